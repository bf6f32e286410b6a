// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert values, force a split, look them up, and delete one, with the
//! library's trace events printed along the way.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_basics`
//! - `RUST_LOG=debug cargo run -p understory_quadtree_demos --example quadtree_basics`

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Point, QuadTree};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,understory_quadtree=trace")),
        )
        .init();

    let mut tree: QuadTree<u32> = QuadTree::new(-10, 10, -10, 10);

    let a = Point::new(3, 1);
    for v in [3, 4, 5] {
        tree.insert(a, v).unwrap();
    }
    info!(point = ?a, values = ?tree.find(a), "stored three values");

    if let Err(err) = tree.insert(Point::new(11, 0), 1) {
        info!(%err, "insert rejected");
    }

    tree.insert(Point::new(-2, 8), 6).unwrap();
    // Same quadrant as (3, 1): the leaf there becomes a node.
    tree.insert(Point::new(4, 2), 7).unwrap();
    info!(
        at_3_1 = ?tree.find(a),
        at_4_2 = ?tree.find(Point::new(4, 2)),
        at_m2_8 = ?tree.find(Point::new(-2, 8)),
        "after split"
    );

    let removed = tree.delete(a, &4);
    info!(removed, remaining = ?tree.find(a), "deleted 4 at (3, 1)");
    let removed = tree.delete(a, &4);
    info!(removed, "deleted 4 at (3, 1) again");

    info!(tree = ?tree, "done");
}
