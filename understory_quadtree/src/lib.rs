// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Quadtree: a point-region quadtree over integer 2D coordinates.
//!
//! Understory Quadtree is an embeddable index for applications that need to
//! store values at integer points and ask rectangular questions about them.
//!
//! - Store any number of values at each point; duplicates are kept.
//! - Look up the values at an exact point, in insertion order.
//! - Collect the values of every point inside a rectangle.
//! - Delete a single stored value.
//!
//! The tree covers fixed bounds chosen at construction. Every node owns four
//! child slots, one per quadrant; a slot is split into a sub-node only when a
//! second distinct point lands in it, so the depth of the tree is bounded by
//! the bit width of the bounds' span.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree};
//!
//! let mut tree: QuadTree<&str> = QuadTree::new(-10, 10, -10, 10);
//! tree.insert(Point::new(3, 1), "a").unwrap();
//! tree.insert(Point::new(3, 1), "b").unwrap();
//! tree.insert(Point::new(-2, 8), "c").unwrap();
//! assert!(tree.insert(Point::new(11, 0), "d").is_err());
//!
//! assert_eq!(tree.find(Point::new(3, 1)), &["a", "b"]);
//!
//! // Rectangles are given by their north-west and south-east corners.
//! let mut hits = tree.find_range(Point::new(-5, 10), Point::new(5, 0));
//! hits.sort();
//! assert_eq!(hits, [&"a", &"b", &"c"]);
//!
//! assert!(tree.delete(Point::new(3, 1), &"a"));
//! assert_eq!(tree.find(Point::new(3, 1)), &["b"]);
//! ```
//!
//! ## Coordinates
//!
//! `x` grows to the east and `y` grows to the north, so a [`Bounds`] has its
//! north-west corner at `(min x, max y)` and its south-east corner at
//! `(max x, min y)`. All edges are inclusive.
//!
//! ## Deletion
//!
//! Deleting the last value at a point does not reclaim the storage for that
//! point, and nodes are never merged back together. Reads are unaffected.
//! [`QuadTree::clear`] drops all contents at once.
//!
//! ## Threading
//!
//! The tree does no internal synchronization. Mutation needs `&mut`, so shared
//! use goes through whatever lock the caller already has.
//!
//! ## Logging
//!
//! Construction, rejected inserts, splits and delete misses are reported
//! through [`tracing`] at `debug` and `trace` level. No subscriber is
//! installed by this crate.

#![no_std]

extern crate alloc;

pub mod error;
pub mod quadrant;
pub mod tree;
pub mod types;

mod node;

pub use error::QuadTreeError;
pub use quadrant::{Quadrant, select_quadrant};
pub use tree::QuadTree;
pub use types::{Bounds, Point, rectangles_collide};
