// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving entities.
//!
//! Keep a few entities in a tree while they wander: each step deletes an
//! entity at its old position and inserts it at the new one, then asks who is
//! near the first entity.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_moving_points`

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Point, QuadTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EntityId(u32);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree: QuadTree<EntityId> = QuadTree::new(0, 63, 0, 63);
    let mut entities: Vec<(EntityId, Point, (i64, i64))> = (0..8)
        .map(|i| {
            let id = EntityId(i);
            let pos = Point::new(i64::from(i) * 7 + 3, 60 - i64::from(i) * 5);
            let vel = (1 - i64::from(i % 3), i64::from(i % 2) * 2 - 1);
            (id, pos, vel)
        })
        .collect();
    for (id, pos, _) in &entities {
        tree.insert(*pos, *id).unwrap();
    }

    for step in 0..10 {
        for (id, pos, vel) in &mut entities {
            let next = Point::new(pos.x + vel.0, pos.y + vel.1);
            if !tree.contains_point(next) {
                // Bounce off the edge.
                *vel = (-vel.0, -vel.1);
                continue;
            }
            if !tree.delete(*pos, id) {
                warn!(?id, ?pos, "entity missing from tree");
            }
            tree.insert(next, *id).unwrap();
            *pos = next;
        }

        let center = entities[0].1;
        let near = tree.find_range(
            Point::new(center.x - 8, center.y + 8),
            Point::new(center.x + 8, center.y - 8),
        );
        info!(step, ?center, near = ?near, "neighbors of entity 0");
    }

    info!(tree = ?tree, "before clear");
    tree.clear();
    info!(tree = ?tree, "after clear");
}
