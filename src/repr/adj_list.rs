use tracing::trace;

use super::*;

/// Weighted adjacency-list graph, directed or undirected.
///
/// Node `u` owns the list of `(neighbor, weight)` pairs in insertion order.
/// An undirected edge `{u, v}` is stored as the two entries `u -> v` and `v -> u`
/// (a self-loop `{u, u}` only once) and counts as one logical edge.
///
/// # Type parameters
/// - `W`: the [`Weight`] type, `i64` by default.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<W = i64> {
    nbs: Vec<Vec<(Node, W)>>,
    num_edges: NumEdges,
    directed: bool,
    weighted: bool,
}

impl<W: Weight> Graph<W> {
    /// Returns *true* if the graph stores the weights passed to `insert_edge`.
    /// Unweighted graphs store `1` instead.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the number of nodes `n`
    pub fn node_count(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    /// Returns the adjacency entries of `u` as a slice
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[(Node, W)] {
        &self.nbs[u as usize]
    }
}

impl<W: Weight> GraphNodeOrder for Graph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.node_count()
    }
}

impl<W: Weight> GraphEdgeOrder for Graph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W: Weight> GraphType for Graph<W> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<W: Weight> WeightedAdjacencyList for Graph<W> {
    type Weight = W;

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + Clone + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<W: Weight> GraphNew for Graph<W> {
    fn new(n: NumNodes, directed: bool, weighted: bool) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
            directed,
            weighted,
        }
    }
}

impl<W: Weight> GraphEdgeEditing for Graph<W> {
    fn insert_edge(&mut self, u: Node, v: Node, weight: W) -> Result<()> {
        let n = self.number_of_nodes();
        ensure_node!(u, n);
        ensure_node!(v, n);

        let weight = if self.weighted { weight } else { W::one() };
        trace!(u, v, %weight, "insert edge");

        self.nbs[u as usize].push((v, weight));
        if !self.directed && u != v {
            self.nbs[v as usize].push((u, weight));
        }
        self.num_edges += 1;

        Ok(())
    }
}
