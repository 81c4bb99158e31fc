use num::Zero;

use super::*;

/// A route through the graph together with its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct Route<W> {
    nodes: Vec<Node>,
    total_weight: W,
}

impl<W: Weight> Route<W> {
    pub(crate) fn new(nodes: Vec<Node>, total_weight: W) -> Self {
        debug_assert!(!nodes.is_empty());
        Self {
            nodes,
            total_weight,
        }
    }

    /// Nodes of the route, starting at the source and ending at the destination
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn source(&self) -> Node {
        self.nodes[0]
    }

    pub fn destination(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Number of edges traversed
    pub fn number_of_hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

/// Recovers the route from `source` to `destination` by walking the predecessor table backwards.
///
/// Returns `Ok(None)` ("no path") if
/// - `destination` was not reached,
/// - the walk ends at a node other than `source` (the table belongs to another search), or
/// - the table contains a cycle.
///
/// Fails with `GraphError::InvalidNode` if `source` or `destination` is out of range.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let preds: PredecessorTable = vec![
///     Predecessor::Source,
///     Predecessor::Node(0),
///     Predecessor::Node(1),
///     Predecessor::Unreached,
/// ].into();
///
/// assert_eq!(reconstruct_path(&preds, 0, 2).unwrap(), Some(vec![0, 1, 2]));
/// assert_eq!(reconstruct_path(&preds, 0, 3).unwrap(), None);
/// assert_eq!(reconstruct_path(&preds, 1, 2).unwrap(), None);
/// ```
pub fn reconstruct_path(
    predecessors: &PredecessorTable,
    source: Node,
    destination: Node,
) -> Result<Option<Vec<Node>>> {
    let n = predecessors.len() as NumNodes;
    ensure_node!(source, n);
    ensure_node!(destination, n);

    let mut path = vec![destination];
    let mut current = destination;
    loop {
        match predecessors.get(current) {
            Predecessor::Source => break,
            Predecessor::Unreached => return Ok(None),
            Predecessor::Node(p) => {
                if path.len() > n as usize || p >= n {
                    return Ok(None);
                }
                path.push(p);
                current = p;
            }
        }
    }

    if current != source {
        return Ok(None);
    }

    path.reverse();
    Ok(Some(path))
}

/// Sums the edge weights along `path`, taking the lightest of parallel edges.
/// Returns `None` if two consecutive nodes are not connected, a node is out of range,
/// or the sum is not a finite weight.
pub fn path_weight<G>(graph: &G, path: &[Node]) -> Option<G::Weight>
where
    G: WeightedAdjacencyList,
{
    if path.iter().any(|&u| u >= graph.number_of_nodes()) {
        return None;
    }

    path.windows(2).try_fold(G::Weight::zero(), |acc, pair| {
        acc.finite_add(&graph.weight_of(pair[0], pair[1])?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn table(preds: &[Predecessor]) -> PredecessorTable {
        preds.iter().copied().collect()
    }

    #[test]
    fn walks_back_to_source() {
        use Predecessor::{Node as Via, Source};
        let preds = table(&[Via(2), Source, Via(1), Via(0)]);

        assert_eq!(reconstruct_path(&preds, 1, 3).unwrap(), Some(vec![1, 2, 0, 3]));
        assert_eq!(reconstruct_path(&preds, 1, 1).unwrap(), Some(vec![1]));
    }

    #[test]
    fn no_path() {
        use Predecessor::{Node as Via, Source, Unreached};
        let preds = table(&[Source, Via(0), Unreached, Via(2)]);

        // destination unreached
        assert_eq!(reconstruct_path(&preds, 0, 2).unwrap(), None);
        // chain through an unreached node
        assert_eq!(reconstruct_path(&preds, 0, 3).unwrap(), None);
        // walk ends at a different origin
        assert_eq!(reconstruct_path(&preds, 1, 1).unwrap(), None);
    }

    #[test]
    fn cyclic_table_terminates() {
        use Predecessor::{Node as Via, Source};
        let preds = table(&[Source, Via(2), Via(1)]);

        assert_eq!(reconstruct_path(&preds, 0, 2).unwrap(), None);
    }

    #[test]
    fn out_of_range() {
        let preds = table(&[Predecessor::Source]);

        assert_eq!(
            reconstruct_path(&preds, 0, 1),
            Err(GraphError::InvalidNode { node: 1, n: 1 })
        );
        assert_eq!(
            reconstruct_path(&preds, 4, 0),
            Err(GraphError::InvalidNode { node: 4, n: 1 })
        );
    }

    #[test]
    fn weights_along_path() {
        let graph = station_network_directed();

        assert_eq!(path_weight(&graph, &[A, C, B, D, E]), Some(9));
        assert_eq!(path_weight(&graph, &[A]), Some(0));
        assert_eq!(path_weight(&graph, &[A, D]), None);
        assert_eq!(path_weight(&graph, &[A, 9]), None);
    }

    #[test]
    fn path_weight_overflow() {
        let graph =
            Graph::<u32>::from_edges(3, false, [(0, 1, 3_000_000_000), (1, 2, 1_000_000_000)])
                .unwrap();

        assert_eq!(path_weight(&graph, &[0, 1, 2]), Some(4_000_000_000));
        assert_eq!(path_weight(&graph, &[0, 1, 0]), None);
    }
}
