use rand_distr::{Bernoulli, Distribution, Uniform};
use tracing::debug;

use super::*;

/// `G(n,p)` with weights: every pair `u < v` is connected independently with probability `p`;
/// each edge receives a uniform integer weight in `1..=max_weight`.
///
/// Defaults are `n = 0`, `p = 0.15` and `max_weight = 20`.
/// Self-loops and parallel edges are never generated.
#[derive(Debug, Copy, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    p: f64,
    max_weight: u32,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.15,
            max_weight: 20,
        }
    }
}

impl WeightedGnp {
    /// Creates a new generator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` inplace
    ///
    /// # Panics
    /// Panics if `p` is not in `[0, 1]`.
    pub fn set_prob(&mut self, p: f64) {
        assert!((0.0..=1.0).contains(&p), "{p} is not a probability");
        self.p = p;
    }

    /// Updates `p`
    ///
    /// # Panics
    /// Panics if `p` is not in `[0, 1]`.
    pub fn prob(mut self, p: f64) -> Self {
        self.set_prob(p);
        self
    }
}

impl NumNodesGen for WeightedGnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl MaxWeightGen for WeightedGnp {
    /// # Panics
    /// Panics if `max_weight == 0`.
    fn set_max_weight(&mut self, max_weight: u32) {
        assert!(max_weight > 0, "weights are drawn from 1..=max_weight");
        self.max_weight = max_weight;
    }
}

impl WeightedGraphGenerator for WeightedGnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<u32>>
    where
        R: Rng,
    {
        // parameters are validated by the setters
        let coin = Bernoulli::new(self.p).unwrap();
        let weights = Uniform::new_inclusive(1, self.max_weight).unwrap();

        debug!(n = self.n, p = self.p, max_weight = self.max_weight, "generate weighted gnp");

        let n = self.n;
        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| (u, v)))
            .filter_map(move |(u, v)| {
                coin.sample(rng)
                    .then(|| WeightedEdge::new(u, v, weights.sample(rng)))
            })
    }
}
