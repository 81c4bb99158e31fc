use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::{node::Node, weight::Weight};

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }
}

/// An edge `(u, v)` together with its weight.
///
/// The canonical order of weighted edges is `(weight, u, v)`; see [`WeightedEdge::cmp_by_weight`].
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge<W> {
    pub u: Node,
    pub v: Node,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(u: Node, v: Node, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Returns the unweighted endpoints
    pub fn edge(&self) -> Edge {
        Edge(self.u, self.v)
    }

    /// Same weighted edge with endpoints ordered `u <= v`
    pub fn normalized(self) -> Self {
        let Edge(u, v) = self.edge().normalized();
        Self { u, v, ..self }
    }

    pub fn is_normalized(&self) -> bool {
        self.u <= self.v
    }
}

impl<W: Weight> WeightedEdge<W> {
    /// Compares by `(weight, u, v)`; the deterministic order used for all edge listings
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.u.cmp(&other.u))
            .then(self.v.cmp(&other.v))
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.u, self.v, self.weight)
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{:?})", self.u, self.v, self.weight)
    }
}

impl<W> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<W> From<WeightedEdge<W>> for (Node, Node, W) {
    fn from(value: WeightedEdge<W>) -> Self {
        (value.u, value.v, value.weight)
    }
}

/// Sorts a slice of weighted edges by `(weight, u, v)`
pub fn sort_by_weight<W: Weight>(edges: &mut [WeightedEdge<W>]) {
    edges.sort_unstable_by(WeightedEdge::cmp_by_weight);
}
