//! Fixtures and property suites shared by the unit tests of all modules.

use rand::Rng;
use tracing_subscriber::EnvFilter;

use crate::prelude::*;

pub(crate) const A: Node = 0;
pub(crate) const B: Node = 1;
pub(crate) const C: Node = 2;
pub(crate) const D: Node = 3;
pub(crate) const E: Node = 4;

/// Five stations `A..E` connected by directed timed connections
pub(crate) fn station_network_directed() -> Graph<i64> {
    Graph::from_edges(
        5,
        true,
        [
            (A, B, 4),
            (A, C, 3),
            (B, A, 4),
            (B, C, 1),
            (B, D, 2),
            (C, A, 3),
            (C, B, 1),
            (C, E, 5),
            (D, B, 2),
            (D, E, 3),
            (E, C, 5),
            (E, D, 3),
        ],
    )
    .unwrap()
}

/// Five stations `A..E` connected by undirected timed connections
pub(crate) fn station_network_undirected() -> Graph<i64> {
    Graph::from_edges(
        5,
        false,
        [
            (A, B, 4),
            (A, C, 3),
            (B, C, 1),
            (B, D, 2),
            (C, E, 5),
            (D, E, 3),
        ],
    )
    .unwrap()
}

/// Creates a random graph with `m` random edges, possibly including loops and parallel edges
pub(crate) fn random_graph<W, R, F>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
    directed: bool,
    mut weight: F,
) -> Graph<W>
where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = Graph::new(n, directed, true);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let w = weight(rng);
        graph.insert_edge(u, v, w).unwrap();
    }
    graph
}

/// Creates a random connected undirected graph: a random tree plus `extra` random edges
pub(crate) fn random_connected_graph<W, R, F>(
    rng: &mut R,
    n: NumNodes,
    extra: NumEdges,
    mut weight: F,
) -> Graph<W>
where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = Graph::new(n, false, true);
    for v in 1..n {
        let u = rng.random_range(0..v);
        let w = weight(rng);
        graph.insert_edge(u, v, w).unwrap();
    }
    if n > 0 {
        for _ in 0..extra {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            let w = weight(rng);
            graph.insert_edge(u, v, w).unwrap();
        }
    }
    graph
}

/// Installs a subscriber printing to the test output; `RUST_LOG` selects the level
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Instantiates the algorithm property suite for one weight type.
/// `$random_weight` maps `&mut Pcg64Mcg` to a non-negative weight.
macro_rules! test_weighted_algorithms {
    ($env:ident, $weight:ty, $random_weight:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::*};
            use itertools::Itertools;
            use num::Zero;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn random_weight(rng: &mut Pcg64Mcg) -> $weight {
                ($random_weight)(rng)
            }

            #[test]
            fn kruskal_and_prim_agree() {
                init_tracing();
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 2, 10, 50, 200] {
                    for extra in [0, n, n * 3] {
                        let graph = random_connected_graph(rng, n, extra, random_weight);
                        let start = rng.random_range(0..n);

                        let kruskal = graph.mst_kruskal().unwrap();
                        let prim = graph.mst_prim(start).unwrap();

                        assert!(kruskal.is_spanning());
                        assert!(prim.is_spanning());
                        assert_eq!(kruskal.number_of_edges(), n - 1);
                        assert_eq!(prim.number_of_edges(), n - 1);
                        assert_eq!(kruskal.total_weight(), prim.total_weight());
                    }
                }
            }

            #[test]
            fn forest_is_union_of_component_trees() {
                init_tracing();
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [5 as NumNodes, 20, 100] {
                    let graph = random_graph(rng, n, n / 2, false, random_weight);
                    let forest = graph.mst_kruskal().unwrap();

                    let mut covered = graph.vertex_bitset_unset();
                    let mut components = 0;
                    let mut total = <$weight>::zero();
                    for u in graph.vertices() {
                        if covered.get_bit(u) {
                            continue;
                        }

                        let tree = graph.mst_prim(u).unwrap();
                        covered.set_bit(u);
                        for e in tree.edges() {
                            covered.set_bit(e.u);
                            covered.set_bit(e.v);
                        }
                        components += 1;
                        total = total + tree.total_weight();
                    }

                    assert_eq!(forest.number_of_components(), components);
                    assert_eq!(forest.total_weight(), total);
                }
            }

            #[test]
            fn shortest_path_properties() {
                init_tracing();
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for directed in [false, true] {
                    for n in [1 as NumNodes, 10, 50, 100] {
                        let graph = random_graph(rng, n, 2 * n, directed, random_weight);
                        let source = rng.random_range(0..n);
                        let tree = graph.shortest_paths(source).unwrap();

                        assert_eq!(tree.distances().distance_to(source), Some(<$weight>::zero()));
                        assert!(tree.predecessors().get(source).is_source());

                        for v in graph.vertices() {
                            match tree.route_to(v).unwrap() {
                                Some(route) => {
                                    assert_eq!(route.source(), source);
                                    assert_eq!(route.destination(), v);
                                    assert_eq!(Some(route.total_weight()), tree.distances().distance_to(v));
                                    assert_eq!(path_weight(&graph, route.nodes()), Some(route.total_weight()));
                                }
                                None => {
                                    assert!(!tree.distances().is_reachable(v));
                                    assert_eq!(tree.distances()[v], <$weight as Weight>::INFINITY);
                                    assert_eq!(tree.predecessors().get(v), Predecessor::Unreached);
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn classification_partitions_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);

                for n in [2 as NumNodes, 10, 50] {
                    let graph = random_connected_graph(rng, n, 2 * n, random_weight);
                    let classified = graph.classified_edges().unwrap();

                    assert_eq!(classified.backbone().len(), n as usize - 1);
                    assert_eq!(classified.len(), graph.number_of_edges() as usize);

                    for part in [classified.backbone(), classified.redundant()] {
                        assert!(part.is_sorted_by(|a, b| a.cmp_by_weight(b).is_le()));
                        assert!(part.iter().all(|e| e.is_normalized()));
                    }

                    let mut merged = classified.backbone().iter().chain(classified.redundant()).copied().collect_vec();
                    sort_by_weight(&mut merged);
                    assert_eq!(merged, graph.ordered_edges());
                }
            }
        }
    };
}

test_weighted_algorithms!(weights_i64, i64, |rng: &mut Pcg64Mcg| rng.random_range(0..50i64));
test_weighted_algorithms!(weights_u32, u32, |rng: &mut Pcg64Mcg| rng.random_range(1..=20u32));
// at most 200 summands of each stay below the sentinel
test_weighted_algorithms!(weights_large_u64, u64, |rng: &mut Pcg64Mcg| rng.random_range(0..u64::MAX / 256));
test_weighted_algorithms!(weights_large_i64, i64, |rng: &mut Pcg64Mcg| rng.random_range(i64::MAX / 512..i64::MAX / 256));
// quarters keep float sums exact
test_weighted_algorithms!(weights_f64, f64, |rng: &mut Pcg64Mcg| rng.random_range(0..64u32) as f64 / 4.0);
