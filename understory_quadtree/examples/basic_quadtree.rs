// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert, find, range query, delete.

use understory_quadtree::{Point, QuadTree};

fn main() {
    let mut tree: QuadTree<u32> = QuadTree::new(-10, 10, -10, 10);
    tree.insert(Point::new(3, 1), 3).unwrap();
    tree.insert(Point::new(3, 1), 4).unwrap();
    tree.insert(Point::new(-2, 8), 6).unwrap();
    // Lands in the same quadrant as (3, 1) and splits it.
    tree.insert(Point::new(4, 2), 7).unwrap();

    if let Err(err) = tree.insert(Point::new(11, 0), 1) {
        println!("rejected: {err}");
    }

    println!("at (3,1): {:?}", tree.find(Point::new(3, 1)));

    let hits = tree.find_range(Point::new(0, 5), Point::new(5, 0));
    println!("in (0,5)-(5,0): {:?}", hits);

    let removed = tree.delete(Point::new(3, 1), &3);
    println!("deleted 3 at (3,1): {removed}; now {:?}", tree.find(Point::new(3, 1)));
    println!("{tree:?}");
}
