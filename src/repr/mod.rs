/*!
# Graph Representation

A single concrete representation, the adjacency-list [`Graph`], parameterized at runtime by
- **directedness**: in a directed graph `(u, v)` and `(v, u)` are distinct edges,
- **weightedness**: an unweighted graph stores weight `1` for every edge.

Both flags are fixed at construction. Edges can only be inserted, never removed; algorithms
treat the graph as immutable.

# Example
```
use wgraphs::prelude::*;

let mut graph = build_graph::<i64>(3, false, true);
graph.insert_edge(0, 1, 4).unwrap();
graph.insert_edge(1, 2, 1).unwrap();

assert_eq!(graph.number_of_edges(), 2);
assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![(0, 4), (2, 1)]);
assert!(graph.insert_edge(0, 3, 1).is_err());
```
*/

use crate::{edge::*, error::*, node::*, ops::*, weight::*};

mod adj_list;

pub use adj_list::*;

/// Creates an empty graph with `node_count` nodes.
///
/// - `directed`: if *false*, every inserted edge is traversable in both directions
/// - `weighted`: if *false*, the weights passed to `insert_edge` are ignored and `1` is stored
pub fn build_graph<W: Weight>(node_count: NumNodes, directed: bool, weighted: bool) -> Graph<W> {
    Graph::new(node_count, directed, weighted)
}
