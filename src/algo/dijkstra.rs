/*!
Single-source shortest paths via Dijkstra's algorithm.

Given a graph with non-negative weights and a source node, [`ShortestPaths::shortest_paths`]
computes for every node
- its distance from the source (a [`DistanceTable`]), and
- its predecessor on one shortest path (a [`PredecessorTable`]).

The frontier is a binary heap with lazy deletion, giving `O((n + m) log n)`.
Relaxation only accepts *strictly* shorter distances, so the first predecessor discovered
(in adjacency insertion order) is kept among equally short alternatives. Together with the
deterministic tie-breaking of the frontier, repeated runs produce identical tables.

Tentative distances are added with [`Weight::finite_add`]. A candidate that overflows is never
shorter than a finite distance; if a node can *only* be reached via such candidates, its
distance is not representable and the search fails with `GraphError::WeightOverflow`.

# Example
```
use wgraphs::{prelude::*, algo::*};

let graph = Graph::<i64>::from_edges(4, true, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]).unwrap();
let tree = graph.shortest_paths(0).unwrap();

assert_eq!(tree.distances().distance_to(3), Some(4));
assert_eq!(tree.predecessors().get(1), Predecessor::Node(2));
assert_eq!(tree.predecessors().get(0), Predecessor::Source);
```
*/

use std::ops::Index;

use num::Zero;
use tracing::{debug, trace};

use super::*;

/// Predecessor of a node in a shortest-path tree.
///
/// Distinguishes the source, which has no predecessor by definition,
/// from nodes that were never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predecessor {
    /// The node is the source of the search
    Source,
    /// The node was reached via the given node
    Node(Node),
    /// The node was not reached from the source
    Unreached,
}

impl Predecessor {
    /// Returns the predecessor node, if there is one
    pub fn node(&self) -> Option<Node> {
        match *self {
            Predecessor::Node(u) => Some(u),
            _ => None,
        }
    }

    pub fn is_source(&self) -> bool {
        matches!(self, Predecessor::Source)
    }

    /// Returns *true* for the source and every node reached from it
    pub fn is_reached(&self) -> bool {
        !matches!(self, Predecessor::Unreached)
    }
}

/// Distances from the source; unreached nodes hold [`Weight::INFINITY`]
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<W>(Vec<W>);

impl<W: Weight> DistanceTable<W> {
    fn new(n: NumNodes) -> Self {
        Self(vec![W::INFINITY; n as usize])
    }

    /// Returns the raw distance of `u`, possibly the infinite sentinel
    /// ** Panics if `u >= n` **
    pub fn get(&self, u: Node) -> W {
        self.0[u as usize]
    }

    /// Returns the distance of `u` or `None` if `u` is unreachable
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<W> {
        let d = self.get(u);
        d.is_finite().then_some(d)
    }

    /// Returns *true* if the distance of `u` is finite
    /// ** Panics if `u >= n` **
    pub fn is_reachable(&self, u: Node) -> bool {
        self.distance_to(u).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[W] {
        &self.0
    }

    /// Iterates over `(node, distance)` for all reachable nodes
    pub fn iter_reachable(&self) -> impl Iterator<Item = (Node, W)> + '_ {
        (0..self.len() as Node).filter_map(|u| self.distance_to(u).map(|d| (u, d)))
    }
}

impl<W> Index<Node> for DistanceTable<W> {
    type Output = W;

    fn index(&self, index: Node) -> &Self::Output {
        &self.0[index as usize]
    }
}

/// Predecessor of every node in a shortest-path tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorTable(Vec<Predecessor>);

impl PredecessorTable {
    fn new(n: NumNodes) -> Self {
        Self(vec![Predecessor::Unreached; n as usize])
    }

    /// ** Panics if `u >= n` **
    pub fn get(&self, u: Node) -> Predecessor {
        self.0[u as usize]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Predecessor] {
        &self.0
    }
}

impl From<Vec<Predecessor>> for PredecessorTable {
    fn from(value: Vec<Predecessor>) -> Self {
        Self(value)
    }
}

impl FromIterator<Predecessor> for PredecessorTable {
    fn from_iter<T: IntoIterator<Item = Predecessor>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of a single-source shortest-path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<W> {
    source: Node,
    distances: DistanceTable<W>,
    predecessors: PredecessorTable,
}

impl<W: Weight> ShortestPathTree<W> {
    pub fn source(&self) -> Node {
        self.source
    }

    pub fn distances(&self) -> &DistanceTable<W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }

    /// Splits the result into its distance and predecessor tables
    pub fn into_parts(self) -> (DistanceTable<W>, PredecessorTable) {
        (self.distances, self.predecessors)
    }

    /// Returns a shortest route from the source to `destination`, or `None` if there is none.
    ///
    /// An infinite distance is the authoritative signal for unreachability; the predecessor
    /// chain is only walked for reachable destinations.
    /// Fails with `GraphError::InvalidNode` if `destination >= n`.
    pub fn route_to(&self, destination: Node) -> Result<Option<Route<W>>> {
        ensure_node!(destination, self.distances.len() as NumNodes);

        let Some(total_weight) = self.distances.distance_to(destination) else {
            return Ok(None);
        };

        Ok(
            reconstruct_path(&self.predecessors, self.source, destination)?
                .map(|nodes| Route::new(nodes, total_weight)),
        )
    }
}

/// Provides single-source shortest paths on graphs with non-negative weights
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Runs Dijkstra's algorithm from `source`.
    ///
    /// Fails with
    /// - `GraphError::InvalidNode` if `source >= n`,
    /// - `GraphError::InvalidWeight` if any edge has a negative or non-finite weight,
    /// - `GraphError::WeightOverflow` if the distance of a reachable node is not a finite weight.
    fn shortest_paths(&self, source: Node) -> Result<ShortestPathTree<Self::Weight>> {
        Dijkstra::new(self, source)?.compute()
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList {}

struct Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    source: Node,
    distances: DistanceTable<G::Weight>,
    predecessors: PredecessorTable,
    finalized: NodeBitSet,
    overflowed: NodeBitSet,
    frontier: Frontier<G::Weight>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    fn new(graph: &'a G, source: Node) -> Result<Self> {
        graph.check_node(source)?;
        graph.ensure_non_negative_weights()?;

        let n = graph.number_of_nodes();
        Ok(Self {
            graph,
            source,
            distances: DistanceTable::new(n),
            predecessors: PredecessorTable::new(n),
            finalized: graph.vertex_bitset_unset(),
            overflowed: graph.vertex_bitset_unset(),
            frontier: Frontier::with_capacity(graph.len()),
        })
    }

    fn compute(mut self) -> Result<ShortestPathTree<G::Weight>> {
        let zero = G::Weight::zero();
        self.distances.0[self.source as usize] = zero;
        self.predecessors.0[self.source as usize] = Predecessor::Source;
        self.frontier.push(zero, self.source, self.source);

        let mut num_finalized: NumNodes = 0;
        while let Some(FrontierEntry { cost, node: u, .. }) = self.frontier.pop() {
            // stale entry of an already finalized node
            if self.finalized.set_bit(u) {
                continue;
            }
            num_finalized += 1;

            trace!(u, %cost, frontier = self.frontier.len(), "finalize");
            self.relax_edges_of(u, cost);
        }

        debug!(
            source = self.source,
            reached = num_finalized,
            n = self.graph.number_of_nodes(),
            "dijkstra finished"
        );

        // only reachable along sums beyond the largest finite weight
        if let Some(u) = self
            .overflowed
            .iter_set_bits()
            .find(|&u| !self.finalized.get_bit(u))
        {
            debug!(source = self.source, u, "distance overflows the weight type");
            return Err(GraphError::WeightOverflow);
        }

        Ok(ShortestPathTree {
            source: self.source,
            distances: self.distances,
            predecessors: self.predecessors,
        })
    }

    fn relax_edges_of(&mut self, u: Node, dist_u: G::Weight) {
        for (v, weight) in self.graph.neighbors_of(u) {
            if self.finalized.get_bit(v) {
                continue;
            }

            let Some(candidate) = dist_u.finite_add(&weight) else {
                self.overflowed.set_bit(v);
                continue;
            };
            if candidate.total_cmp(&self.distances.get(v)).is_lt() {
                self.distances.0[v as usize] = candidate;
                self.predecessors.0[v as usize] = Predecessor::Node(u);
                self.frontier.push(candidate, v, u);
            }
        }
    }
}
