// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive node and leaf storage.
//!
//! A [`Node`] owns exactly four child slots, one per [`Quadrant`]. A slot is
//! empty, holds a [`Leaf`] for a single point, or holds a boxed sub-node whose
//! bounds are the quadrant's sub-bounds as computed by [`select_quadrant`].
//! When a second, distinct point lands in a slot holding a leaf, the leaf is
//! split: it is replaced by a sub-node which re-absorbs the leaf's values.
//!
//! Deleting the last value of a leaf leaves the (now empty) leaf in place.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::QuadTreeError;
use crate::quadrant::{Quadrant, select_quadrant};
use crate::types::{Bounds, Point};

/// Contents of one child position of a [`Node`].
#[derive(Clone, Debug)]
pub(crate) enum Slot<V> {
    Empty,
    Leaf(Leaf<V>),
    Node(Box<Node<V>>),
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self::Empty
    }
}

/// A single point and every value stored at it, in insertion order.
#[derive(Clone, Debug)]
pub(crate) struct Leaf<V> {
    point: Point,
    values: Vec<V>,
}

impl<V> Leaf<V> {
    fn new(point: Point, value: V) -> Self {
        let mut values = Vec::with_capacity(1);
        values.push(value);
        Self { point, values }
    }

    /// Append a value. Routing a value for another point here is a bug.
    fn insert(&mut self, point: Point, value: V) {
        assert_eq!(
            point, self.point,
            "leaf at {:?} asked to store a value destined for {:?}",
            self.point, point
        );
        self.values.push(value);
    }
}

impl<V: PartialEq> Leaf<V> {
    /// Remove the first value equal to `value`; the last value takes its place.
    fn delete(&mut self, point: Point, value: &V) -> bool {
        if point != self.point {
            return false;
        }
        match self.values.iter().position(|v| v == value) {
            Some(i) => {
                self.values.swap_remove(i);
                true
            }
            None => false,
        }
    }
}

/// Interior node covering `bounds`, with `se.x > nw.x` and `nw.y > se.y`.
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    bounds: Bounds,
    children: [Slot<V>; 4],
}

impl<V> Node<V> {
    pub(crate) fn new(bounds: Bounds) -> Self {
        debug_assert!(bounds.is_valid(), "node bounds {bounds:?} are degenerate");
        Self {
            bounds,
            children: core::array::from_fn(|_| Slot::Empty),
        }
    }

    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn insert(&mut self, point: Point, value: V) -> Result<(), QuadTreeError> {
        if !self.bounds.contains(point) {
            return Err(QuadTreeError::OutOfBounds {
                point,
                bounds: self.bounds,
            });
        }
        self.insert_within(point, value);
        Ok(())
    }

    fn insert_within(&mut self, point: Point, value: V) {
        debug_assert!(self.bounds.contains(point), "{point:?} routed outside {:?}", self.bounds);
        let (sub, quadrant) = select_quadrant(self.bounds, point);
        let slot = &mut self.children[quadrant.index()];
        *slot = match core::mem::take(slot) {
            Slot::Empty => Slot::Leaf(Leaf::new(point, value)),
            Slot::Node(mut node) => {
                node.insert_within(point, value);
                Slot::Node(node)
            }
            Slot::Leaf(mut leaf) if leaf.point == point => {
                leaf.insert(point, value);
                Slot::Leaf(leaf)
            }
            Slot::Leaf(leaf) => {
                Slot::Node(Box::new(Self::split(sub, quadrant, leaf, point, value)))
            }
        };
    }

    /// Build the node replacing `leaf` once `point` also claims its slot.
    ///
    /// Both points lie in `bounds`, so re-insertion may cascade into further
    /// splits but never fails.
    fn split(bounds: Bounds, quadrant: Quadrant, leaf: Leaf<V>, point: Point, value: V) -> Self {
        let Leaf {
            point: existing,
            values,
        } = leaf;
        tracing::trace!(
            ?existing,
            incoming = ?point,
            ?quadrant,
            ?bounds,
            carried = values.len(),
            "splitting leaf into node"
        );
        let mut node = Self::new(bounds);
        for v in values {
            node.insert_within(existing, v);
        }
        node.insert_within(point, value);
        node
    }

    /// Values stored at exactly `point`, in insertion order.
    pub(crate) fn find(&self, point: Point) -> &[V] {
        if !self.bounds.contains(point) {
            return &[];
        }
        let (_, quadrant) = select_quadrant(self.bounds, point);
        match &self.children[quadrant.index()] {
            Slot::Empty => &[],
            Slot::Node(node) => node.find(point),
            Slot::Leaf(leaf) if leaf.point == point => &leaf.values,
            Slot::Leaf(_) => &[],
        }
    }

    /// Append every value whose point lies in `query` to `out`.
    ///
    /// Sub-nodes whose bounds do not collide with `query` are skipped whole.
    pub(crate) fn find_range_into<'a>(&'a self, query: Bounds, out: &mut Vec<&'a V>) {
        for child in &self.children {
            match child {
                Slot::Empty => {}
                Slot::Leaf(leaf) => {
                    if query.contains(leaf.point) {
                        out.extend(leaf.values.iter());
                    }
                }
                Slot::Node(node) => {
                    if query.collides(&node.bounds) {
                        node.find_range_into(query, out);
                    }
                }
            }
        }
    }
}

impl<V: PartialEq> Node<V> {
    /// Remove one occurrence of `value` at `point`. Emptied leaves stay in place.
    pub(crate) fn delete(&mut self, point: Point, value: &V) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        let (_, quadrant) = select_quadrant(self.bounds, point);
        match &mut self.children[quadrant.index()] {
            Slot::Empty => false,
            Slot::Node(node) => node.delete(point, value),
            Slot::Leaf(leaf) => leaf.delete(point, value),
        }
    }
}
