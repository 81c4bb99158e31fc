/*!
`wgraphs` is a small graph library for **w**eighted networks such as transit lines, where
- nodes are unlabelled and numbered `0` to `n - 1`,
- every edge carries a non-negative weight (a travel time, a cost, ...),
- edges are either directed or undirected, decided once per graph.

It answers two kinds of questions about such a network:
1. What is the cheapest route between two nodes? (Dijkstra + path reconstruction)
2. What is the cheapest backbone that keeps the network connected, and which
   connections become redundant once it is chosen? (Kruskal / Prim + edge classification)

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
**Edges** are either a plain `Edge(Node, Node)` or a [`WeightedEdge`](crate::edge::WeightedEdge)
that additionally stores its weight. Weights can be any type implementing
[`Weight`](crate::weight::Weight), which includes all primitive integers and floats.

There is exactly one storage backend, the adjacency-list [`Graph`](crate::repr::Graph).
In an **undirected** graph, inserting `(u, v, w)` creates the adjacency entries `u -> v` and
`v -> u`; both belong to the same logical edge.

# Design

Algorithms are implemented as traits on anything that implements
[`WeightedAdjacencyList`](crate::ops::WeightedAdjacencyList), so you can simply call
`graph.shortest_paths(source)` or `graph.mst_kruskal()`. For callers who prefer plain functions,
the same operations are re-exported at the top level:

- [`build_graph`]
- [`shortest_path`]
- [`reconstruct_path`]
- [`minimum_spanning_tree_kruskal`]
- [`minimum_spanning_tree_prim`]
- [`classify_edges`]

Random generators and builders follow the *Builder* / *Setter* pattern.

# Usage

```
use wgraphs::{prelude::*, algo::*};

let mut graph = build_graph::<i64>(4, false, true);
graph.insert_edge(0, 1, 2).unwrap();
graph.insert_edge(1, 2, 2).unwrap();
graph.insert_edge(0, 2, 5).unwrap();
graph.insert_edge(2, 3, 1).unwrap();

let tree = graph.mst_kruskal().unwrap();
assert_eq!(tree.total_weight(), 5);

let route = graph.shortest_paths(0).unwrap().route_to(3).unwrap().unwrap();
assert_eq!(route.nodes(), &[0, 1, 2, 3]);
assert_eq!(route.total_weight(), 5);
```

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod weight;

/// `wgraphs::prelude` includes definitions for nodes, edges, weights, errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}

pub use algo::{
    classify_edges, minimum_spanning_tree_kruskal, minimum_spanning_tree_prim, reconstruct_path,
    shortest_path,
};
pub use repr::build_graph;
