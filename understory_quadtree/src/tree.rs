// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API over the recursive node storage.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::QuadTreeError;
use crate::node::Node;
use crate::types::{Bounds, Point};

/// A point-region quadtree over fixed integer bounds.
///
/// Each distinct point stores an ordered list of values; the same value may be
/// stored more than once. The outer bounds are fixed at construction.
#[derive(Clone)]
pub struct QuadTree<V> {
    root: Node<V>,
    len: usize,
}

impl<V> QuadTree<V> {
    /// Create a tree covering `[xmin, xmax] × [ymin, ymax]`.
    ///
    /// # Panics
    ///
    /// Panics unless `xmax > xmin` and `ymax > ymin`. Use [`QuadTree::try_new`]
    /// to handle that case instead.
    #[track_caller]
    pub fn new(xmin: i64, xmax: i64, ymin: i64, ymax: i64) -> Self {
        match Self::try_new(xmin, xmax, ymin, ymax) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a tree covering `[xmin, xmax] × [ymin, ymax]`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] unless `xmax > xmin` and
    /// `ymax > ymin`.
    pub fn try_new(xmin: i64, xmax: i64, ymin: i64, ymax: i64) -> Result<Self, QuadTreeError> {
        Self::with_bounds(Bounds::from_extents(xmin, xmax, ymin, ymax))
    }

    /// Create a tree covering `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] if `bounds` is not
    /// [valid](Bounds::is_valid).
    pub fn with_bounds(bounds: Bounds) -> Result<Self, QuadTreeError> {
        if !bounds.is_valid() {
            return Err(QuadTreeError::InvalidBounds {
                xmin: bounds.min_x(),
                xmax: bounds.max_x(),
                ymin: bounds.min_y(),
                ymax: bounds.max_y(),
            });
        }
        tracing::debug!(?bounds, "created quadtree");
        Ok(Self {
            root: Node::new(bounds),
            len: 0,
        })
    }

    /// The outer bounds fixed at construction.
    pub fn bounds(&self) -> Bounds {
        self.root.bounds()
    }

    /// Number of stored values, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `point` lies within the outer bounds.
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Store `value` at `point`, after any values already stored there.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::OutOfBounds`] if `point` lies outside the
    /// tree's bounds; the tree is left unchanged.
    pub fn insert(&mut self, point: Point, value: V) -> Result<(), QuadTreeError> {
        if let Err(err) = self.root.insert(point, value) {
            tracing::debug!(?point, bounds = ?self.bounds(), "rejected insert outside tree bounds");
            return Err(err);
        }
        self.len += 1;
        Ok(())
    }

    /// Values stored at exactly `point`, in insertion order.
    ///
    /// Empty if nothing is stored there or `point` is out of bounds.
    pub fn find(&self, point: Point) -> &[V] {
        self.root.find(point)
    }

    /// Values whose points lie in the rectangle from `nw` to `se`, edges included.
    ///
    /// The order of the result is unspecified. An inverted rectangle matches
    /// nothing.
    pub fn find_range(&self, nw: Point, se: Point) -> Vec<&V> {
        let mut out = Vec::new();
        self.find_range_into(nw, se, &mut out);
        out
    }

    /// Like [`QuadTree::find_range`], appending to `out` instead.
    ///
    /// Existing contents of `out` are kept, so one buffer can collect several
    /// queries.
    pub fn find_range_into<'a>(&'a self, nw: Point, se: Point, out: &mut Vec<&'a V>) {
        self.root.find_range_into(Bounds::new(nw, se), out);
    }

    /// Remove every stored value, keeping the bounds.
    pub fn clear(&mut self) {
        tracing::debug!(bounds = ?self.bounds(), dropped = self.len, "cleared quadtree");
        self.root = Node::new(self.bounds());
        self.len = 0;
    }
}

impl<V: PartialEq> QuadTree<V> {
    /// Remove one stored occurrence of `value` at `point`.
    ///
    /// Returns `false`, leaving the tree unchanged, if `point` is out of bounds
    /// or holds no equal value. Other values at `point` are kept but may be
    /// reordered.
    ///
    /// Storage for a point whose last value is removed is not reclaimed; use
    /// [`QuadTree::clear`] to release everything at once.
    pub fn delete(&mut self, point: Point, value: &V) -> bool {
        let removed = self.root.delete(point, value);
        if removed {
            self.len -= 1;
        } else {
            tracing::trace!(?point, "delete matched no stored value");
        }
        removed
    }
}

impl<V> Debug for QuadTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
