/*!
# Random Weighted Graphs

Random graphs are mostly used to benchmark the algorithms of this crate and to test them
against each other on inputs no one would write by hand.

Generators follow the builder pattern:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters using the setters (e.g., `.nodes(n).prob(p).max_weight(w)`).
3. Generate weighted edges via `generate()` or `stream()`.

The [`RandomWeightedGraph`] trait turns a generator directly into a graph.

# Example
```
use wgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let mut rng = rand::rngs::StdRng::seed_from_u64(1);
let edges = WeightedGnp::new().nodes(20).prob(0.3).max_weight(5).generate(&mut rng);

assert!(edges.iter().all(|e| e.u < e.v && (1..=5).contains(&e.weight)));

let graph = Graph::<i64>::weighted_gnp(&mut rng, 20, 0.3, 5);
assert!(graph.is_undirected());
```
*/

use rand::Rng;

use crate::prelude::*;

mod weighted_gnp;

pub use weighted_gnp::*;

/// Trait for generators that allow setting the number of nodes
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that draw integer weights from `1..=max_weight`
pub trait MaxWeightGen: Sized {
    /// Sets the largest weight that can be generated
    fn set_max_weight(&mut self, max_weight: u32);

    /// Sets the largest weight that can be generated
    fn max_weight(mut self, max_weight: u32) -> Self {
        self.set_max_weight(max_weight);
        self
    }
}

/// A configurable random generator of weighted edges
pub trait WeightedGraphGenerator {
    /// Generates a list of random weighted edges
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<u32>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated weighted edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<u32>>
    where
        R: Rng;
}

/// Builds whole random graphs from the generators of this module
pub trait RandomWeightedGraph: Sized {
    /// Creates an undirected graph in which every pair `u < v` is connected with probability `p`
    /// by an edge with a uniform weight in `1..=max_weight`.
    ///
    /// # Panics
    /// Panics if `p` is not a probability or `max_weight == 0`.
    fn weighted_gnp<R>(rng: &mut R, n: NumNodes, p: f64, max_weight: u32) -> Self
    where
        R: Rng;
}

impl<G> RandomWeightedGraph for G
where
    G: GraphEdgeEditing,
    G::Weight: From<u32>,
{
    fn weighted_gnp<R>(rng: &mut R, n: NumNodes, p: f64, max_weight: u32) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(n, false, true);
        for WeightedEdge { u, v, weight } in WeightedGnp::new()
            .nodes(n)
            .prob(p)
            .max_weight(max_weight)
            .stream(rng)
        {
            // generated endpoints are always below `n`
            let inserted = graph.insert_edge(u, v, weight.into());
            debug_assert!(inserted.is_ok());
        }
        graph
    }
}
