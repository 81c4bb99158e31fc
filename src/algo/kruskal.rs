use tracing::debug;

use super::*;

/// Kruskal's algorithm over the logical edges sorted by `(weight, u, v)`
pub(super) struct Kruskal<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    components: UnionFind,
    tree_edges: Vec<WeightedEdge<G::Weight>>,
}

impl<'a, G> Kruskal<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Result<Self> {
        if graph.is_directed() {
            return Err(GraphError::DirectedGraph);
        }

        let n = graph.number_of_nodes();
        Ok(Self {
            graph,
            components: UnionFind::new(n),
            tree_edges: Vec::with_capacity(n.saturating_sub(1) as usize),
        })
    }

    pub fn compute(mut self) -> Result<SpanningTree<G::Weight>> {
        let n = self.graph.number_of_nodes();
        let max_tree_edges = n.saturating_sub(1) as usize;

        for edge in self.graph.ordered_edges() {
            if self.tree_edges.len() == max_tree_edges {
                break;
            }

            if self.components.union(edge.u, edge.v) {
                self.tree_edges.push(edge);
            }
        }

        if self.components.number_of_sets() > 1 {
            debug!(
                n,
                components = self.components.number_of_sets(),
                "kruskal produced a spanning forest"
            );
        }

        SpanningTree::from_tree_edges(n, self.tree_edges)
    }
}
