/*!
Priority frontier shared by Dijkstra's and Prim's algorithm.

A binary min-heap of `(cost, node, via)` entries with *lazy deletion*: instead of decreasing a
key, a node is pushed again with its improved cost and stale entries are skipped by the caller
once the node has been finalized. Ties in cost are broken by the smaller node index and then by
the smaller `via` node, so the extraction order is fully deterministic.
*/

use std::{
    cmp::Ordering,
    collections::BinaryHeap,
};

use super::*;

/// A tentative cost to reach `node` through the edge `(via, node)`
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry<W> {
    pub cost: W,
    pub node: Node,
    pub via: Node,
}

impl<W: Weight> PartialEq for FrontierEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for FrontierEntry<W> {}

impl<W: Weight> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for FrontierEntry<W> {
    /// Reversed so that `BinaryHeap` (a max-heap) pops the cheapest entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.via.cmp(&self.via))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Frontier<W: Weight> {
    heap: BinaryHeap<FrontierEntry<W>>,
}

impl<W: Weight> Frontier<W> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, cost: W, node: Node, via: Node) {
        self.heap.push(FrontierEntry { cost, node, via });
    }

    /// Removes and returns the cheapest entry
    pub fn pop(&mut self) -> Option<FrontierEntry<W>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
