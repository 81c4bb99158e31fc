/*!
# Minimum Spanning Trees

Two independent algorithms compute a minimum spanning tree of an undirected weighted graph:
- [`SpanningTrees::mst_kruskal`] sorts all edges by `(weight, u, v)` and greedily keeps every
  edge that joins two components. On a disconnected graph it returns a minimum spanning *forest*.
- [`SpanningTrees::mst_prim`] grows a tree from a start node along the cheapest frontier edge.
  On a disconnected graph it only spans the component of the start node.

On connected graphs both report the same total weight, although the edge sets may differ
if several minimum spanning trees exist.

Whether a result actually spans the graph is reported by [`SpanningTree::is_spanning`];
callers that need a single tree can use [`SpanningTree::require_spanning`].

# Example
```
use wgraphs::{prelude::*, algo::*};

let graph = Graph::<i64>::from_edges(4, false, [(0, 1, 3), (1, 2, 1), (0, 2, 2), (2, 3, 4)]).unwrap();

let kruskal = graph.mst_kruskal().unwrap();
let prim = graph.mst_prim(3).unwrap();

assert_eq!(kruskal.total_weight(), 7);
assert_eq!(prim.total_weight(), 7);
assert!(kruskal.is_spanning());

let edges = kruskal.classify(&graph);
assert_eq!(edges.redundant().len(), 1);
```
*/

use super::*;

/// A minimum spanning tree (or forest) of a graph.
///
/// The tree is itself an undirected weighted [`Graph`] on the same node set. It is computed
/// freshly per invocation and never shares state with its input.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    tree: Graph<W>,
    total_weight: W,
}

impl<W: Weight> SpanningTree<W> {
    /// Builds the tree from its (acyclic) edge set
    pub(crate) fn from_tree_edges(n: NumNodes, mut edges: Vec<WeightedEdge<W>>) -> Result<Self> {
        debug_assert!(edges.len() < n.max(1) as usize);

        // canonical summation order
        sort_by_weight(&mut edges);
        let total_weight =
            W::finite_sum(edges.iter().map(|e| e.weight)).ok_or(GraphError::WeightOverflow)?;
        let mut tree = Graph::new(n, false, true);
        tree.insert_edges(edges.into_iter().map(WeightedEdge::normalized))?;

        Ok(Self { tree, total_weight })
    }

    /// Returns the tree as a graph
    pub fn graph(&self) -> &Graph<W> {
        &self.tree
    }

    pub fn into_graph(self) -> Graph<W> {
        self.tree
    }

    /// Sum of all tree edge weights
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.tree.number_of_nodes()
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.tree.number_of_edges()
    }

    /// Returns the tree edges `(u, v, w)` with `u <= v`, sorted by `(weight, u, v)`
    pub fn edges(&self) -> Vec<WeightedEdge<W>> {
        self.tree.ordered_edges()
    }

    /// Returns *true* if `{u, v}` is a tree edge.
    /// ** Panics if `u >= n` **
    pub fn contains_edge(&self, u: Node, v: Node) -> bool {
        self.tree.neighbors_of(u).any(|(x, _)| x == v)
    }

    /// Number of connected components of the tree; isolated nodes count as their own component.
    /// A forest with `m` edges on `n` nodes has exactly `n - m` components.
    pub fn number_of_components(&self) -> NumNodes {
        self.number_of_nodes() - self.number_of_edges()
    }

    /// Returns *true* if the tree connects all nodes
    pub fn is_spanning(&self) -> bool {
        self.number_of_components() <= 1
    }

    /// Returns the tree if it connects all nodes.
    /// Fails with `GraphError::DisconnectedGraph` for a spanning forest.
    pub fn require_spanning(self) -> Result<Self> {
        if self.is_spanning() {
            Ok(self)
        } else {
            Err(GraphError::DisconnectedGraph {
                components: self.number_of_components(),
            })
        }
    }

    /// Partitions the logical edges of `graph` into backbone and redundant edges w.r.t. this tree
    pub fn classify<G>(&self, graph: &G) -> ClassifiedEdges<W>
    where
        G: WeightedAdjacencyList<Weight = W>,
    {
        classify_edges(graph.logical_edges(), self)
    }
}

/// Minimum spanning trees of undirected weighted graphs
pub trait SpanningTrees: WeightedAdjacencyList {
    /// Computes a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Fails with `GraphError::DirectedGraph` on a directed graph.
    fn mst_kruskal(&self) -> Result<SpanningTree<Self::Weight>> {
        Kruskal::new(self)?.compute()
    }

    /// Computes a minimum spanning tree of the component of `start` with Prim's algorithm.
    ///
    /// Fails with
    /// - `GraphError::DirectedGraph` on a directed graph,
    /// - `GraphError::InvalidNode` if `start >= n`.
    fn mst_prim(&self, start: Node) -> Result<SpanningTree<Self::Weight>> {
        Prim::new(self, start)?.compute()
    }

    /// Computes a minimum spanning forest and classifies all logical edges against it
    fn classified_edges(&self) -> Result<ClassifiedEdges<Self::Weight>> {
        Ok(self.mst_kruskal()?.classify(self))
    }
}

impl<G> SpanningTrees for G where G: WeightedAdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;

    fn triples<W: Weight>(edges: &[WeightedEdge<W>]) -> Vec<(Node, Node, W)> {
        edges.iter().map(|&e| e.into()).collect_vec()
    }

    #[test]
    fn station_network() {
        let graph = station_network_undirected();

        for tree in [graph.mst_kruskal().unwrap(), graph.mst_prim(A).unwrap()] {
            assert_eq!(tree.total_weight(), 9);
            assert_eq!(tree.number_of_edges(), 4);
            assert!(tree.is_spanning());
            assert_eq!(
                triples(&tree.edges()),
                vec![(B, C, 1), (B, D, 2), (A, C, 3), (D, E, 3)]
            );
            assert!(tree.contains_edge(C, B));
            assert!(!tree.contains_edge(A, B));
        }
    }

    #[test]
    fn kruskal_returns_forest() {
        let graph =
            Graph::<i64>::from_edges(6, false, [(0, 1, 2), (1, 2, 3), (0, 2, 1), (3, 4, 7)])
                .unwrap();
        let forest = graph.mst_kruskal().unwrap();

        assert_eq!(forest.total_weight(), 10);
        assert_eq!(forest.number_of_edges(), 3);
        assert_eq!(forest.number_of_components(), 3);
        assert!(!forest.is_spanning());
        assert_eq!(
            forest.require_spanning(),
            Err(GraphError::DisconnectedGraph { components: 3 })
        );
    }

    #[test]
    fn prim_spans_component_of_start() {
        let graph =
            Graph::<i64>::from_edges(6, false, [(0, 1, 2), (1, 2, 3), (0, 2, 1), (3, 4, 7)])
                .unwrap();

        let tree = graph.mst_prim(1).unwrap();
        assert_eq!(tree.total_weight(), 3);
        assert_eq!(triples(&tree.edges()), vec![(0, 2, 1), (0, 1, 2)]);

        let tree = graph.mst_prim(4).unwrap();
        assert_eq!(triples(&tree.edges()), vec![(3, 4, 7)]);

        let tree = graph.mst_prim(5).unwrap();
        assert_eq!(tree.number_of_edges(), 0);
        assert_eq!(tree.total_weight(), 0);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let graph =
            Graph::<i64>::from_edges(3, false, [(0, 0, 0), (0, 1, 5), (1, 0, 2), (1, 2, 4)])
                .unwrap();

        for tree in [graph.mst_kruskal().unwrap(), graph.mst_prim(2).unwrap()] {
            assert_eq!(triples(&tree.edges()), vec![(0, 1, 2), (1, 2, 4)]);
        }
    }

    #[test]
    fn large_weights() {
        let graph =
            Graph::<u32>::from_edges(3, false, [(0, 1, 2_000_000_000), (1, 2, 2_000_000_000)])
                .unwrap();
        for tree in [graph.mst_kruskal().unwrap(), graph.mst_prim(2).unwrap()] {
            assert_eq!(tree.total_weight(), 4_000_000_000);
        }

        let graph =
            Graph::<u32>::from_edges(3, false, [(0, 1, 3_000_000_000), (1, 2, 3_000_000_000)])
                .unwrap();
        assert_eq!(graph.mst_kruskal(), Err(GraphError::WeightOverflow));
        assert_eq!(graph.mst_prim(0), Err(GraphError::WeightOverflow));
        assert_eq!(graph.total_weight(), Err(GraphError::WeightOverflow));

        // a forest whose trees are individually representable
        let graph =
            Graph::<u32>::from_edges(4, false, [(0, 1, 3_000_000_000), (2, 3, 3_000_000_000)])
                .unwrap();
        assert_eq!(graph.mst_prim(3).unwrap().total_weight(), 3_000_000_000);
        assert_eq!(graph.mst_kruskal(), Err(GraphError::WeightOverflow));
    }

    #[test]
    fn single_and_empty_graphs() {
        let graph = Graph::<i64>::new(1, false, true);
        let tree = graph.mst_prim(0).unwrap();
        assert!(tree.is_spanning());
        assert_eq!(tree.number_of_edges(), 0);

        let graph = Graph::<i64>::new(0, false, true);
        let tree = graph.mst_kruskal().unwrap();
        assert!(tree.is_spanning());
        assert_eq!(tree.number_of_components(), 0);
        assert!(graph.mst_prim(0).is_err());
    }

    #[test]
    fn rejects_directed_graphs() {
        let graph = station_network_directed();

        assert_eq!(graph.mst_kruskal(), Err(GraphError::DirectedGraph));
        assert_eq!(graph.mst_prim(A), Err(GraphError::DirectedGraph));
        assert!(graph.classified_edges().is_err());
    }

    #[test]
    fn classified_edges() {
        let graph = station_network_undirected();
        let (backbone, redundant) = graph.classified_edges().unwrap().into_parts();

        assert_eq!(
            triples(&backbone),
            vec![(B, C, 1), (B, D, 2), (A, C, 3), (D, E, 3)]
        );
        assert_eq!(triples(&redundant), vec![(A, B, 4), (C, E, 5)]);
    }
}
