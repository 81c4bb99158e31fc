/*!
# Graph Operations

Traits describing what algorithms may ask of a graph. Every algorithm in [`crate::algo`] is
implemented generically for graphs implementing [`WeightedAdjacencyList`], the concrete
[`Graph`](crate::repr::Graph) being the canonical implementor.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{
    edge::*,
    error::{GraphError, Result, ensure_node},
    node::*,
    weight::Weight,
};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    /// The range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns `Err(GraphError::InvalidNode)` if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        ensure_node!(u, self.number_of_nodes());
        Ok(())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of logical edges of the graph.
    /// An undirected edge `{u, v}` counts once even though it is stored twice.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Directedness is a runtime property of a graph, fixed at construction
pub trait GraphType {
    /// Returns *true* if edges `(u, v)` and `(v, u)` are distinct
    fn is_directed(&self) -> bool;

    /// Returns *true* if an edge `(u, v)` implies `(v, u)`
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Weighted neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + GraphType + Sized {
    type Weight: Weight;

    /// Returns an iterator over `(v, weight)` for every adjacency entry of `u`, in insertion order.
    /// The iterator is lazy and can be restarted by cloning it.
    /// ** Panics if `u >= n` **
    fn neighbors_of(
        &self,
        u: Node,
    ) -> impl Iterator<Item = (Node, Self::Weight)> + Clone + '_;

    /// Returns the number of adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Same as [`WeightedAdjacencyList::neighbors_of`] but fails with `GraphError::InvalidNode`
    /// instead of panicking
    fn try_neighbors_of(
        &self,
        u: Node,
    ) -> Result<impl Iterator<Item = (Node, Self::Weight)> + Clone + '_> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns the smallest weight of any edge `(u, v)` or `None` if there is no such edge.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Self::Weight> {
        self.neighbors_of(u)
            .filter(|&(x, _)| x == v)
            .map(|(_, w)| w)
            .min_by(Weight::total_cmp)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all adjacency entries in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(
        &self,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns every logical edge exactly once: all arcs of a directed graph,
    /// and the normalized entry `u <= v` of every undirected edge.
    fn logical_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.edges(self.is_undirected())
    }

    /// Returns all logical edges sorted by `(weight, u, v)`
    fn ordered_edges(&self) -> Vec<WeightedEdge<Self::Weight>> {
        self.logical_edges()
            .sorted_unstable_by(WeightedEdge::cmp_by_weight)
            .collect()
    }

    /// Returns the sum of weights over all logical edges.
    /// Fails with `GraphError::WeightOverflow` if the sum is not a finite weight.
    fn total_weight(&self) -> Result<Self::Weight> {
        Self::Weight::finite_sum(self.logical_edges().map(|e| e.weight))
            .ok_or(GraphError::WeightOverflow)
    }

    /// Checks that all weights are finite and non-negative, reporting the first offending edge
    fn ensure_non_negative_weights(&self) -> Result<()> {
        match self
            .logical_edges()
            .find(|e| !e.weight.is_valid_non_negative())
        {
            None => Ok(()),
            Some(e) => Err(GraphError::InvalidWeight {
                u: e.u,
                v: e.v,
                weight: e.weight.to_string(),
            }),
        }
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with `n` singleton nodes.
    /// Unweighted graphs assign weight `1` to every edge.
    fn new(n: NumNodes, directed: bool, weighted: bool) -> Self;
}

/// Provides functions to insert edges. Edges can never be removed.
pub trait GraphEdgeEditing: WeightedAdjacencyList + GraphNew {
    /// Adds the edge *(u,v)* to the graph; for undirected graphs also *(v,u)*.
    /// Parallel edges are kept.
    /// Fails with `GraphError::InvalidNode` if `u >= n || v >= n`
    fn insert_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> Result<()>;

    /// Adds all edges in the collection, stopping at the first invalid one
    fn insert_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        for WeightedEdge { u, v, weight } in edges.into_iter().map(Into::into) {
            self.insert_edge(u, v, weight)?;
        }
        Ok(())
    }
}

/// A super trait for creating a weighted graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: WeightedAdjacencyList {
    /// Create a weighted graph from a number of nodes and an iterator over weighted edges
    fn from_edges<I, E>(n: NumNodes, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I, E>(n: NumNodes, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::new(n, directed, true);
        graph.insert_edges(edges)?;
        Ok(graph)
    }
}
