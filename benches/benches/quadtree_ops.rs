// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, QuadTree};

fn gen_grid_points(n: i64, step: i64) -> Vec<Point> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x * step, y * step));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i64
    }
}

fn gen_random_points(count: usize, extent: i64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(
            rng.next_in(-extent, extent),
            rng.next_in(-extent, extent),
        ));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: i64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_in(-50_000, 50_000), rng.next_in(-50_000, 50_000)));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            out.push(Point::new(
                cx + rng.next_in(-spread, spread),
                cy + rng.next_in(-spread, spread),
            ));
        }
    }
    out
}

fn build(points: &[Point], extent: i64) -> QuadTree<u32> {
    let mut tree = QuadTree::new(-extent, extent, -extent, extent);
    for (i, p) in points.iter().copied().enumerate() {
        tree.insert(p, i as u32).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32_i64, 64, 128] {
        let points = gen_grid_points(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<u32>::new(0, n * 10, 0, n * 10),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &count in &[1_000_usize, 10_000, 100_000] {
        let points = gen_random_points(count, 100_000);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_{}", count), |b| {
            b.iter_batched(
                || QuadTree::<u32>::new(-100_000, 100_000, -100_000, 100_000),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 1_000, 200);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered_16x1000", |b| {
        b.iter_batched(
            || QuadTree::<u32>::new(-100_000, 100_000, -100_000, 100_000),
            |mut tree| {
                for (i, p) in points.iter().copied().enumerate() {
                    let _ = tree.insert(p, i as u32);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for &count in &[1_000_usize, 100_000] {
        let points = gen_random_points(count, 100_000);
        let tree = build(&points, 100_000);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("hit_{}", count), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for p in &points {
                    total += tree.find(*p).len();
                }
                black_box(total);
            })
        });
        let misses = gen_random_points(count, 100_000)
            .into_iter()
            .map(|p| Point::new(p.y, -p.x))
            .collect::<Vec<_>>();
        group.bench_function(format!("mostly_miss_{}", count), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for p in &misses {
                    total += tree.find(*p).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_find_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_range");
    let points = gen_random_points(100_000, 100_000);
    let tree = build(&points, 100_000);
    for &half in &[100_i64, 1_000, 10_000, 50_000] {
        group.bench_function(format!("square_half{}", half), |b| {
            b.iter(|| {
                let hits = tree.find_range(Point::new(-half, half), Point::new(half, -half));
                black_box(hits.len());
            })
        });
    }
    let mut buf = Vec::new();
    group.bench_function("reuse_buffer_half1000", |b| {
        b.iter(|| {
            buf.clear();
            tree.find_range_into(Point::new(-1_000, 1_000), Point::new(1_000, -1_000), &mut buf);
            black_box(buf.len());
        })
    });
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    let points = gen_random_points(10_000, 100_000);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("all_10000", |b| {
        b.iter_batched(
            || build(&points, 100_000),
            |mut tree| {
                for (i, p) in points.iter().copied().enumerate() {
                    let _ = tree.delete(p, &(i as u32));
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_find,
    bench_find_range,
    bench_delete
);
criterion_main!(benches);
