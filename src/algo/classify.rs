/*!
# Edge Classification

Given the full edge list of an undirected graph and one of its spanning trees, every edge is
either a **backbone** edge (part of the tree) or a **redundant** edge, i.e. a connection that can
be closed without disconnecting any two nodes connected by the tree.

Both lists are sorted by `(weight, u, v)` with normalized endpoints `u <= v`.

If the graph contains parallel edges, only one of them can be part of the tree. The tree edge
`{u, v}` is matched against the lightest full edge between `u` and `v`; all heavier copies are
redundant. Hence backbone and redundant edges partition the full edge list exactly.
*/

use fxhash::FxHashSet;

use super::*;

/// Edges partitioned into backbone (tree) and redundant (non-tree) edges
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedEdges<W> {
    backbone: Vec<WeightedEdge<W>>,
    redundant: Vec<WeightedEdge<W>>,
}

impl<W: Weight> ClassifiedEdges<W> {
    /// Edges contained in the spanning tree
    pub fn backbone(&self) -> &[WeightedEdge<W>] {
        &self.backbone
    }

    /// Edges not contained in the spanning tree; these are safe to close
    pub fn redundant(&self) -> &[WeightedEdge<W>] {
        &self.redundant
    }

    /// Total number of classified edges
    pub fn len(&self) -> usize {
        self.backbone.len() + self.redundant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of weights of all redundant edges.
    /// Fails with `GraphError::WeightOverflow` if the sum is not a finite weight.
    pub fn redundant_weight(&self) -> Result<W> {
        W::finite_sum(self.redundant.iter().map(|e| e.weight)).ok_or(GraphError::WeightOverflow)
    }

    /// Returns `(backbone, redundant)`
    pub fn into_parts(self) -> (Vec<WeightedEdge<W>>, Vec<WeightedEdge<W>>) {
        (self.backbone, self.redundant)
    }
}

/// Partitions `full_edges` into backbone and redundant edges with respect to `tree`.
///
/// `full_edges` should list every undirected edge once (as returned by
/// [`WeightedAdjacencyList::logical_edges`]); the orientation of each edge is irrelevant.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::<i64>::from_edges(3, false, [(0, 1, 1), (1, 2, 2), (2, 0, 3)]).unwrap();
/// let tree = graph.mst_kruskal().unwrap();
///
/// let (backbone, redundant) = classify_edges(graph.logical_edges(), &tree).into_parts();
/// assert_eq!(backbone.len(), 2);
/// assert_eq!(redundant, vec![WeightedEdge::new(0, 2, 3)]);
/// ```
pub fn classify_edges<W, I, E>(full_edges: I, tree: &SpanningTree<W>) -> ClassifiedEdges<W>
where
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<WeightedEdge<W>>,
{
    let mut edges: Vec<WeightedEdge<W>> = full_edges
        .into_iter()
        .map(|e| e.into().normalized())
        .collect();
    sort_by_weight(&mut edges);

    let mut unmatched: FxHashSet<Edge> = tree.edges().iter().map(|e| e.edge()).collect();

    let (backbone, redundant) = edges
        .into_iter()
        .partition(|e| unmatched.remove(&e.edge()));

    ClassifiedEdges {
        backbone,
        redundant,
    }
}
