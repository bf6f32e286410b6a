// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.
//!
//! The coordinate system is the usual mathematical one: `x` grows to the east
//! and `y` grows to the north. A [`Bounds`] is therefore described by its
//! north-west (minimum `x`, maximum `y`) and south-east (maximum `x`, minimum
//! `y`) corners.

/// An integer point in 2D.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, growing east.
    pub x: i64,
    /// Vertical coordinate, growing north.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left and bottom-right corners.
///
/// Both corners are inclusive. A rectangle that can hold a quadtree node has
/// `se.x > nw.x` and `nw.y > se.y`; see [`Bounds::is_valid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// North-west corner (minimum x, maximum y).
    pub nw: Point,
    /// South-east corner (maximum x, minimum y).
    pub se: Point,
}

impl Bounds {
    /// Create bounds from the north-west and south-east corners.
    pub const fn new(nw: Point, se: Point) -> Self {
        Self { nw, se }
    }

    /// Create bounds from per-axis extents.
    ///
    /// ```rust
    /// use understory_quadtree::{Bounds, Point};
    ///
    /// let b = Bounds::from_extents(-10, 10, -5, 5);
    /// assert_eq!(b.nw, Point::new(-10, 5));
    /// assert_eq!(b.se, Point::new(10, -5));
    /// ```
    pub const fn from_extents(xmin: i64, xmax: i64, ymin: i64, ymax: i64) -> Self {
        Self {
            nw: Point::new(xmin, ymax),
            se: Point::new(xmax, ymin),
        }
    }

    /// Minimum x (west edge).
    pub const fn min_x(&self) -> i64 {
        self.nw.x
    }

    /// Maximum x (east edge).
    pub const fn max_x(&self) -> i64 {
        self.se.x
    }

    /// Minimum y (south edge).
    pub const fn min_y(&self) -> i64 {
        self.se.y
    }

    /// Maximum y (north edge).
    pub const fn max_y(&self) -> i64 {
        self.nw.y
    }

    /// Horizontal span, `se.x - nw.x`. Zero for inverted bounds.
    pub const fn width(&self) -> u64 {
        if self.se.x < self.nw.x {
            0
        } else {
            self.se.x.abs_diff(self.nw.x)
        }
    }

    /// Vertical span, `nw.y - se.y`. Zero for inverted bounds.
    pub const fn height(&self) -> u64 {
        if self.nw.y < self.se.y {
            0
        } else {
            self.nw.y.abs_diff(self.se.y)
        }
    }

    /// Whether these bounds cover at least two coordinates on each axis.
    pub const fn is_valid(&self) -> bool {
        self.se.x > self.nw.x && self.nw.y > self.se.y
    }

    /// Whether the point lies inside, edges included.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.nw.x && point.x <= self.se.x && point.y >= self.se.y && point.y <= self.nw.y
    }

    /// Whether the two rectangles overlap, touch, or one contains the other.
    ///
    /// ```rust
    /// use understory_quadtree::Bounds;
    ///
    /// let a = Bounds::from_extents(-2, 2, -2, 2);
    /// // Sharing only the corner (2, -2) still counts.
    /// assert!(a.collides(&Bounds::from_extents(2, 10, -10, -2)));
    /// assert!(!a.collides(&Bounds::from_extents(3, 10, -10, -2)));
    /// ```
    pub const fn collides(&self, other: &Self) -> bool {
        overlaps(self.nw.x, self.se.x, other.nw.x, other.se.x)
            && overlaps(self.se.y, self.nw.y, other.se.y, other.nw.y)
    }
}

/// Rectangle intersection test, inclusive of shared edges and corners.
///
/// Equivalent to `a.collides(&b)`, and symmetric in its arguments.
pub const fn rectangles_collide(a: Bounds, b: Bounds) -> bool {
    a.collides(&b)
}

// Closed intervals [lo1, hi1] and [lo2, hi2] share at least one value. This
// covers both partial overlap and containment in either direction.
const fn overlaps(lo1: i64, hi1: i64, lo2: i64, hi2: i64) -> bool {
    lo2 <= hi1 && lo1 <= hi2
}
