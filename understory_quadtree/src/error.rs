// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

use crate::types::{Bounds, Point};

/// Errors reported by [`QuadTree`](crate::QuadTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum QuadTreeError {
    /// A point was inserted outside the tree's outer bounds. The tree is unchanged.
    #[error("point ({}, {}) lies outside the tree bounds {bounds:?}", .point.x, .point.y)]
    OutOfBounds {
        /// The rejected point.
        point: Point,
        /// The tree's outer bounds.
        bounds: Bounds,
    },

    /// The requested outer bounds do not span at least one unit on each axis.
    #[error("cannot create tree with bounds x {xmin}..={xmax}, y {ymin}..={ymax}")]
    InvalidBounds {
        /// Requested west edge.
        xmin: i64,
        /// Requested east edge.
        xmax: i64,
        /// Requested south edge.
        ymin: i64,
        /// Requested north edge.
        ymax: i64,
    },
}
