use crate::covering::GreedyHyperedgeCovering;
use crate::elimination_graph::EliminationGraph;
use crate::error::DecompError;
use crate::graph::MutableGraph;
use std::cmp::max;

/// Induced width of `order`.
///
/// Stops as soon as the vertices left to eliminate cannot exceed the width
/// seen so far, so the result equals that of a full simulation.
pub fn treewidth<G: MutableGraph>(graph: &G, order: &[usize]) -> usize {
    let mut width = 0;
    let mut graph = EliminationGraph::new(graph);
    for (i, v) in order.iter().copied().enumerate() {
        let w = graph.degree(v);
        graph.eliminate(v);
        width = max(width, w);
        if order.len() - i <= width {
            break;
        }
    }
    width
}

/// Induced width of `order`, simulating every elimination step.
pub fn treewidth_unpruned<G: MutableGraph>(graph: &G, order: &[usize]) -> usize {
    let mut graph = EliminationGraph::new(graph);
    order
        .iter()
        .map(|v| {
            let degree = graph.degree(*v);
            graph.eliminate(*v);
            degree
        })
        .max()
        .unwrap_or(0)
}

/// Generalized hypertree width of `order` on the primal graph `graph`.
///
/// Each step costs the size of a greedy hyperedge cover of the eliminated
/// vertex together with its current neighbors. The cover size is not bounded
/// by the number of remaining vertices, so every step is evaluated.
pub fn generalized_hypertree_width<G: MutableGraph>(
    graph: &G,
    covering: &GreedyHyperedgeCovering,
    order: &[usize],
) -> Result<usize, DecompError> {
    let mut width = 0;
    let mut graph = EliminationGraph::new(graph);
    for v in order.iter().copied() {
        let w = covering.closed_neighborhood_cover_size(v, graph.neighborhood(v))?;
        graph.eliminate(v);
        width = max(width, w);
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use crate::covering::GreedyHyperedgeCovering;
    use crate::error::ErrorKind;
    use crate::graph::{HashMapGraph, HyperGraph, MutableGraph};
    use crate::util::width_by_virtual_elimination;
    use crate::width::{generalized_hypertree_width, treewidth, treewidth_unpruned};
    use rand::prelude::{SliceRandom, StdRng};
    use rand::{Rng, SeedableRng};

    fn path(n: usize) -> HashMapGraph {
        let mut graph = HashMapGraph::with_vertices(n);
        for v in 1..n {
            graph.add_edge(v - 1, v);
        }
        graph
    }

    fn complete(n: usize) -> HashMapGraph {
        let mut graph = HashMapGraph::with_vertices(n);
        let vertices: Vec<usize> = (0..n).collect();
        graph.make_clique(&vertices);
        graph
    }

    fn random_graph(rng: &mut StdRng, n: usize, p: f64) -> HashMapGraph {
        let mut graph = HashMapGraph::with_vertices(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    graph.add_edge(u, v);
                }
            }
        }
        graph
    }

    #[test]
    fn path_has_width_one() {
        assert_eq!(treewidth(&path(4), &[0, 1, 2, 3]), 1);
    }

    #[test]
    fn complete_graph() {
        let graph = complete(4);
        let mut rng: StdRng = SeedableRng::seed_from_u64(7);
        let mut order: Vec<usize> = (0..4).collect();
        for _ in 0..10 {
            order.shuffle(&mut rng);
            assert_eq!(treewidth(&graph, &order), 3);
        }
    }

    #[test]
    fn cycle() {
        let mut graph = HashMapGraph::with_vertices(5);
        for v in 0..5 {
            graph.add_edge(v, (v + 1) % 5);
        }
        assert_eq!(treewidth(&graph, &[0, 1, 2, 3, 4]), 2);
    }

    #[test]
    fn edgeless_and_empty() {
        let graph = HashMapGraph::with_vertices(3);
        assert_eq!(treewidth(&graph, &[2, 0, 1]), 0);
        let graph = HashMapGraph::with_vertices(0);
        assert_eq!(treewidth(&graph, &[]), 0);
        assert_eq!(treewidth_unpruned(&graph, &[]), 0);
    }

    #[test]
    fn pruning_matches_full_simulation() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(1337);
        for round in 0..40 {
            let n = 5 + round % 12;
            let graph = random_graph(&mut rng, n, 0.3);
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut rng);
            let expected = treewidth_unpruned(&graph, &order);
            assert_eq!(treewidth(&graph, &order), expected);
            assert_eq!(width_by_virtual_elimination(&graph, &order), expected);
        }
    }

    #[test]
    fn hypertree_width() {
        let mut hypergraph = HyperGraph::with_vertices(4);
        hypergraph.add_edge("A", &[0, 1, 2]);
        hypergraph.add_edge("B", &[2, 3]);
        let primal: HashMapGraph = hypergraph.primal_graph();
        let covering = GreedyHyperedgeCovering::new(&hypergraph);

        // eliminating 2 first sees {0, 1, 2, 3}
        let width = generalized_hypertree_width(&primal, &covering, &[2, 0, 1, 3]).unwrap();
        assert_eq!(width, 2);
        let width = generalized_hypertree_width(&primal, &covering, &[3, 0, 1, 2]).unwrap();
        assert_eq!(width, 1);
    }

    #[test]
    fn hypertree_width_of_acyclic_hypergraph() {
        let mut hypergraph = HyperGraph::with_vertices(6);
        hypergraph.add_edge("A", &[0, 1, 2]);
        hypergraph.add_edge("B", &[2, 3, 4]);
        hypergraph.add_edge("C", &[4, 5]);
        let primal: HashMapGraph = hypergraph.primal_graph();
        let covering = GreedyHyperedgeCovering::new(&hypergraph);

        let width =
            generalized_hypertree_width(&primal, &covering, &[0, 1, 5, 3, 2, 4]).unwrap();
        assert_eq!(width, 1);
    }

    #[test]
    fn hypertree_width_uncoverable() {
        let mut hypergraph = HyperGraph::with_vertices(3);
        hypergraph.add_edge("A", &[0, 1]);
        let primal: HashMapGraph = hypergraph.primal_graph();
        let covering = GreedyHyperedgeCovering::new(&hypergraph);

        let e = generalized_hypertree_width(&primal, &covering, &[0, 1, 2]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UncoverableVertex);
    }
}
