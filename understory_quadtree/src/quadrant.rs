// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant selection: which quarter of a bound a point belongs to.
//!
//! Quadrants are numbered clockwise from the top-left:
//!
//! ```text
//!  nw ==================== .
//!     |   0 NW  |  1 NE   |
//!     ====== center =======
//!     |   3 SW  |  2 SE   |
//!   . ==================== se
//! ```
//!
//! The center is the truncated midpoint of the two corners, and the center row
//! and column belong to the south and west halves. Truncation rounds toward
//! zero rather than toward negative infinity, so an axis spanning exactly one
//! unit has no usable center; there the half is decided by comparing against
//! the edge instead, which keeps the partition total for negative bounds too.

use crate::types::{Bounds, Point};

/// One of the four quarters of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-left.
    NorthWest = 0,
    /// Top-right.
    NorthEast = 1,
    /// Bottom-right.
    SouthEast = 2,
    /// Bottom-left.
    SouthWest = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Child slot index, `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn from_halves(west: bool, south: bool) -> Self {
        match (west, south) {
            (true, false) => Self::NorthWest,
            (false, false) => Self::NorthEast,
            (false, true) => Self::SouthEast,
            (true, true) => Self::SouthWest,
        }
    }
}

/// Pick the quadrant of `bounds` holding `point`, and that quadrant's bounds.
///
/// The point is expected to lie within `bounds`; the result is unspecified
/// otherwise.
///
/// ```rust
/// use understory_quadtree::{Bounds, Point, Quadrant, select_quadrant};
///
/// let b = Bounds::from_extents(-10, 10, -10, 10);
/// let (sub, q) = select_quadrant(b, Point::new(3, 1));
/// assert_eq!(q, Quadrant::NorthEast);
/// assert_eq!(sub, Bounds::from_extents(0, 10, 0, 10));
/// ```
pub fn select_quadrant(bounds: Bounds, point: Point) -> (Bounds, Quadrant) {
    let Bounds { mut nw, mut se } = bounds;
    let center = Point::new(truncated_mid(nw.x, se.x), truncated_mid(nw.y, se.y));

    let west = if se.x.abs_diff(nw.x) == 1 {
        point.x == nw.x
    } else {
        let west = point.x <= center.x;
        if west {
            se.x = center.x;
        } else {
            nw.x = center.x;
        }
        west
    };

    let south = if nw.y.abs_diff(se.y) == 1 {
        point.y == se.y
    } else {
        let south = point.y <= center.y;
        if south {
            nw.y = center.y;
        } else {
            se.y = center.y;
        }
        south
    };

    (Bounds::new(nw, se), Quadrant::from_halves(west, south))
}

/// `(a + b) / 2`, truncated toward zero, without overflow.
#[allow(
    clippy::cast_possible_truncation,
    reason = "The midpoint of two i64 values always fits in an i64."
)]
const fn truncated_mid(a: i64, b: i64) -> i64 {
    ((a as i128 + b as i128) / 2) as i64
}
