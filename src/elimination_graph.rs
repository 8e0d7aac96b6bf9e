use crate::graph::MutableGraph;
use std::ops::Deref;

/// Owned copy of a graph that vertices are eliminated from one by one.
///
/// Eliminating `v` turns its neighborhood into a clique and then detaches `v`.
/// The vertex itself stays in the graph as an isolated vertex, so `order()` is
/// unaffected by elimination.
#[derive(Clone, Debug)]
pub struct EliminationGraph<G: MutableGraph> {
    graph: G,
}

impl<G: MutableGraph> EliminationGraph<G> {
    pub fn new(graph: &G) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    /// Callers track which vertices were eliminated already; eliminating an
    /// isolated vertex again changes nothing.
    pub fn eliminate(&mut self, v: usize) {
        let nb: Vec<usize> = self.graph.neighborhood(v).collect();
        for (i, a) in nb.iter().enumerate() {
            for b in nb.iter().skip(i + 1) {
                self.graph.add_edge(*a, *b);
            }
            self.graph.remove_edge(v, *a);
        }
    }

    /// Resets to a fresh copy of `graph`.
    pub fn reset(&mut self, graph: &G) {
        self.graph.clone_from(graph);
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: MutableGraph> Deref for EliminationGraph<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use crate::elimination_graph::EliminationGraph;
    use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};

    fn cycle(n: usize) -> HashMapGraph {
        let mut graph = HashMapGraph::with_vertices(n);
        for v in 0..n {
            graph.add_edge(v, (v + 1) % n);
        }
        graph
    }

    #[test]
    fn fill_in() {
        let graph = cycle(5);
        let mut elim = EliminationGraph::new(&graph);
        elim.eliminate(0);

        assert!(elim.has_edge(1, 4));
        assert_eq!(elim.degree(0), 0);
        assert_eq!(elim.order(), 5);
        assert_eq!(elim.degree(1), 2);
        assert_eq!(elim.degree(4), 2);

        // source untouched
        assert!(!graph.has_edge(1, 4));
        assert_eq!(graph.degree(0), 2);
    }

    #[test]
    fn neighborhood_becomes_clique() {
        let mut graph = HashMapGraph::with_vertices(5);
        for v in 1..5 {
            graph.add_edge(0, v);
        }
        let mut elim = EliminationGraph::new(&graph);
        elim.eliminate(0);
        assert!(elim.is_clique(&[1, 2, 3, 4]));
        assert_eq!(elim.degree(0), 0);
    }

    #[test]
    fn repeated_elimination_is_noop() {
        let graph = cycle(4);
        let mut elim = EliminationGraph::new(&graph);
        elim.eliminate(2);
        let snapshot = elim.clone();
        elim.eliminate(2);
        for v in 0..4 {
            assert_eq!(elim.degree(v), snapshot.degree(v));
        }
    }

    #[test]
    fn copies_are_independent() {
        let graph = cycle(6);
        let mut a = EliminationGraph::new(&graph);
        let b = a.clone();
        a.eliminate(0);
        assert!(a.has_edge(1, 5));
        assert!(!b.has_edge(1, 5));

        a.reset(&graph);
        assert!(!a.has_edge(1, 5));
        assert_eq!(a.degree(0), 2);
    }
}
