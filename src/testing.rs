//! Helpers shared by the unit tests: a macro checking the basic graph operations of a backend
//! and slow but obviously correct reference implementations of the recognition algorithms.

use itertools::Itertools;

use crate::{algo::*, prelude::*};

/// Every graph representation should implement the basic operations consistently
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;
            use stream_bitset::prelude::*;

            /// Creates a list of at most `m_ub` random normalized edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v).normalized()
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                        }

                        // every edge is inserted in both directions
                        let graph = <$graph>::from_edges(
                            n,
                            edges.iter().flat_map(|e| [*e, e.reverse()]),
                        );

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges(true));

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                            assert_eq!(
                                graph.closed_neighbors_of(u).filter(|&v| v != u).count() as NumNodes,
                                graph.degree_of(u) - graph.has_self_loop(u) as NumNodes
                            );
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn test_adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [5 as NumNodes, 20] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 2 * n);
                    let graph = <$graph>::from_edges(n, &edges);

                    for u in 0..n {
                        for v in 0..n {
                            let expected = edges.binary_search(&Edge(u, v).normalized()).is_ok();
                            assert_eq!(graph.has_edge(u, v), expected);
                            assert_eq!(graph.has_edge(v, u), expected);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    let mut graph = <$graph>::new(n);
                    let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                    let mut m = 0;

                    for _ in 0..m_ub {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        let existed = adj_matrix[u as usize].set_bit(v);
                        adj_matrix[v as usize].set_bit(u);
                        assert_eq!(graph.try_add_edge(u, v), existed);

                        m += !existed as NumEdges;
                        assert_eq!(graph.number_of_edges(), m);
                    }

                    // reinserting is absorbed
                    let edges = graph.ordered_edges(true);
                    graph.add_edges(edges.iter().map(|e| e.reverse()));
                    assert_eq!(graph.number_of_edges(), m);
                    assert_eq!(graph.ordered_edges(true), edges);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// The sun `S3`: triangle `{0, 1, 2}` where node `3`, `4`, `5` is attached to the edge
/// `(0, 1)`, `(1, 2)`, `(2, 0)` respectively
pub(crate) fn sun_graph<G: GraphFromScratch>() -> G {
    G::from_edges(
        6,
        [
            (0, 1),
            (1, 2),
            (2, 0),
            (3, 0),
            (3, 1),
            (4, 1),
            (4, 2),
            (5, 2),
            (5, 0),
        ],
    )
}

/// Checks the four-point condition of Lex-BFS orderings: whenever `a < b < c` (by position)
/// with `ac` an edge and `ab` not, there exists a `d < a` adjacent to `b` but not to `c`
pub(crate) fn is_lex_bfs_ordering<G: AdjacencyTest>(graph: &G, order: &[Node]) -> bool {
    let adjacent = |x: usize, y: usize| graph.has_edge(order[x], order[y]);

    (0..order.len()).tuple_combinations().all(|(a, b, c)| {
        !adjacent(a, c) || adjacent(a, b) || (0..a).any(|d| adjacent(d, b) && !adjacent(d, c))
    })
}

/// Repeatedly removes a simplicial node; the graph is chordal iff this empties the graph
pub(crate) fn is_chordal_by_elimination<G: AdjacencyList + AdjacencyTest>(graph: &G) -> bool {
    let mut remaining = graph.vertices().collect_vec();

    let is_simplicial = |v: Node, remaining: &[Node]| {
        remaining
            .iter()
            .copied()
            .filter(|&u| u != v && graph.has_edge(u, v))
            .tuple_combinations()
            .all(|(x, y)| graph.has_edge(x, y))
    };

    while let Some(pos) = remaining
        .iter()
        .position(|&v| is_simplicial(v, &remaining))
    {
        remaining.swap_remove(pos);
    }

    remaining.is_empty()
}

/// Searches for three pairwise non-adjacent nodes, each pair connected by a path
/// avoiding the closed neighborhood of the third
pub(crate) fn has_asteroidal_triple_by_search<G: AdjacencyList + AdjacencyTest>(graph: &G) -> bool {
    let connected_avoiding = |x: Node, y: Node, z: Node| {
        graph
            .bfs(y)
            .with_nodes_excluded(graph.closed_neighbors_of(x))
            .is_node_reachable(z)
    };

    graph
        .vertices_range()
        .tuple_combinations()
        .filter(|&(x, y, z)| !graph.has_edge(x, y) && !graph.has_edge(x, z) && !graph.has_edge(y, z))
        .any(|(x, y, z)| {
            connected_avoiding(x, y, z) && connected_avoiding(y, x, z) && connected_avoiding(z, x, y)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;

    #[test]
    fn oracles_on_known_graphs() {
        let sun = sun_graph::<AdjArrayUndir>();
        assert!(is_chordal_by_elimination(&sun));
        assert!(has_asteroidal_triple_by_search(&sun));

        let mut cycle = AdjArrayUndir::new(5);
        cycle.connect_cycle(0..5);
        assert!(!is_chordal_by_elimination(&cycle));

        let mut path = AdjArrayUndir::new(6);
        path.connect_path(0..6);
        assert!(is_chordal_by_elimination(&path));
        assert!(!has_asteroidal_triple_by_search(&path));

        assert!(is_lex_bfs_ordering(&path, &[0, 1, 2, 3, 4, 5]));
        // 0 - 1 - 2 with 2 visited before 1
        assert!(!is_lex_bfs_ordering(&path, &[0, 2, 1, 3, 4, 5]));
    }
}
