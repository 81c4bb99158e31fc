use num::Zero;
use tracing::debug;

use super::*;

/// Prim's algorithm, growing a single tree from `start`
pub(super) struct Prim<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    start: Node,
    in_tree: NodeBitSet,
    best: Vec<Option<G::Weight>>,
    frontier: Frontier<G::Weight>,
    tree_edges: Vec<WeightedEdge<G::Weight>>,
}

impl<'a, G> Prim<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        if graph.is_directed() {
            return Err(GraphError::DirectedGraph);
        }
        graph.check_node(start)?;

        Ok(Self {
            graph,
            start,
            in_tree: graph.vertex_bitset_unset(),
            best: vec![None; graph.len()],
            frontier: Frontier::with_capacity(graph.len()),
            tree_edges: Vec::with_capacity(graph.len() - 1),
        })
    }

    pub fn compute(mut self) -> Result<SpanningTree<G::Weight>> {
        self.frontier.push(G::Weight::zero(), self.start, self.start);

        while let Some(FrontierEntry { cost, node: u, via }) = self.frontier.pop() {
            // stale entry of a node already in the tree
            if self.in_tree.set_bit(u) {
                continue;
            }

            if u != self.start {
                self.tree_edges.push(WeightedEdge::new(via, u, cost));
            }

            self.update_frontier(u);
        }

        let n = self.graph.number_of_nodes();
        if self.tree_edges.len() + 1 < n as usize {
            debug!(
                start = self.start,
                spanned = self.tree_edges.len() + 1,
                n,
                "prim only spans the component of the start node"
            );
        }

        SpanningTree::from_tree_edges(n, self.tree_edges)
    }

    fn update_frontier(&mut self, u: Node) {
        for (v, weight) in self.graph.neighbors_of(u) {
            if self.in_tree.get_bit(v) {
                continue;
            }

            let best = &mut self.best[v as usize];
            if best.is_none_or(|b| weight.total_cmp(&b).is_lt()) {
                *best = Some(weight);
                self.frontier.push(weight, v, u);
            }
        }
    }
}
