/*!
# Graph Algorithms

This module provides the **route** and **backbone** algorithms of this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to
- [`ShortestPaths`]: single-source shortest paths (Dijkstra) producing distance and predecessor tables,
- [`reconstruct_path`]: recovering an explicit route from a predecessor table,
- [`SpanningTrees`]: minimum spanning trees via Kruskal's or Prim's algorithm,
- [`classify_edges`]: splitting an edge list into backbone and redundant edges.

Algorithms are provided as traits with blanket implementations for every
[`WeightedAdjacencyList`]. The free functions in this module offer the same functionality
for callers preferring a procedural interface.
*/

mod classify;
mod dijkstra;
mod frontier;
mod kruskal;
mod path;
mod prim;
mod spanning_tree;
mod union_find;

use crate::prelude::*;

use frontier::*;
use kruskal::Kruskal;
use prim::Prim;
use union_find::UnionFind;

pub use classify::*;
pub use dijkstra::*;
pub use path::*;
pub use spanning_tree::*;

/// Computes distance and predecessor tables of all nodes from `source`.
/// See [`ShortestPaths::shortest_paths`].
pub fn shortest_path<G>(
    graph: &G,
    source: Node,
) -> Result<(DistanceTable<G::Weight>, PredecessorTable)>
where
    G: WeightedAdjacencyList,
{
    Ok(graph.shortest_paths(source)?.into_parts())
}

/// Computes a minimum spanning forest of an undirected graph.
/// See [`SpanningTrees::mst_kruskal`].
pub fn minimum_spanning_tree_kruskal<G>(graph: &G) -> Result<SpanningTree<G::Weight>>
where
    G: WeightedAdjacencyList,
{
    graph.mst_kruskal()
}

/// Computes a minimum spanning tree of the component of `start`.
/// See [`SpanningTrees::mst_prim`].
pub fn minimum_spanning_tree_prim<G>(graph: &G, start: Node) -> Result<SpanningTree<G::Weight>>
where
    G: WeightedAdjacencyList,
{
    graph.mst_prim(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn procedural_interface() {
        let graph = station_network_directed();
        let (distances, predecessors) = shortest_path(&graph, A).unwrap();

        let path = reconstruct_path(&predecessors, A, E).unwrap().unwrap();
        assert_eq!(path_weight(&graph, &path), distances.distance_to(E));

        let graph = station_network_undirected();
        let kruskal = minimum_spanning_tree_kruskal(&graph).unwrap();
        let prim = minimum_spanning_tree_prim(&graph, C).unwrap();
        assert_eq!(kruskal.total_weight(), prim.total_weight());

        let (backbone, redundant) = classify_edges(graph.logical_edges(), &kruskal).into_parts();
        assert_eq!(backbone.len(), 4);
        assert_eq!(redundant.len(), 2);
    }
}
