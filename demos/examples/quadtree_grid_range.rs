// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range queries over a filled grid.
//!
//! Fill a 21×21 grid centered on the origin, one value per cell, then render
//! which cells a few rectangle queries select.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_grid_range`

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Point, QuadTree};

const HALF: i64 = 10;
const SIDE: i64 = 2 * HALF + 1;

fn cell_value(p: Point) -> i64 {
    (p.y + HALF) * SIDE + (p.x + HALF)
}

fn render(hits: &[&i64]) -> String {
    let mut out = String::new();
    for y in (-HALF..=HALF).rev() {
        for x in -HALF..=HALF {
            let v = cell_value(Point::new(x, y));
            out.push(if hits.contains(&&v) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = QuadTree::new(-HALF, HALF, -HALF, HALF);
    for y in -HALF..=HALF {
        for x in -HALF..=HALF {
            let p = Point::new(x, y);
            tree.insert(p, cell_value(p)).unwrap();
        }
    }
    info!(len = tree.len(), "grid filled");

    let queries = [
        ("3x3 around origin", Point::new(-1, 1), Point::new(1, -1)),
        ("north-east corner", Point::new(5, 10), Point::new(10, 5)),
        ("horizontal strip", Point::new(-10, 0), Point::new(10, -1)),
        ("partly outside", Point::new(8, -8), Point::new(30, -30)),
    ];
    for (name, nw, se) in queries {
        let hits = tree.find_range(nw, se);
        info!(name, hits = hits.len(), "range query");
        println!("{name}:\n{}", render(&hits));
    }
}
