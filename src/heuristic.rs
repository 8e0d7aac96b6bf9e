use crate::graph::BaseGraph;

pub type DynamicHeuristic<G> = fn(&G, usize) -> f64;

/// Desirability of eliminating a vertex next. Larger is better.
pub enum Heuristic<G> {
    MinDegree,
    MinFill,
    Custom(DynamicHeuristic<G>),
}

impl<G> Clone for Heuristic<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Heuristic<G> {}

impl<G> Default for Heuristic<G> {
    fn default() -> Self {
        Self::MinDegree
    }
}

impl<G: BaseGraph> Heuristic<G> {
    pub fn score(&self, graph: &G, v: usize) -> f64 {
        match self {
            Heuristic::MinDegree => min_degree(graph, v),
            Heuristic::MinFill => min_fill(graph, v),
            Heuristic::Custom(heuristic) => heuristic(graph, v),
        }
    }
}

pub fn min_degree<G: BaseGraph>(graph: &G, v: usize) -> f64 {
    1.0 / (graph.degree(v) as f64 + 1.0)
}

pub fn min_fill<G: BaseGraph>(graph: &G, v: usize) -> f64 {
    1.0 / (graph.fill_in_count(v) as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use crate::graph::{HashMapGraph, MutableGraph};
    use crate::heuristic::Heuristic;

    #[test]
    fn prefers_small_degree_and_fill() {
        let mut graph = HashMapGraph::with_vertices(4);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(0, 3);
        graph.add_edge(1, 2);

        let h: Heuristic<HashMapGraph> = Heuristic::MinDegree;
        assert_eq!(h.score(&graph, 3), 0.5);
        assert_eq!(h.score(&graph, 0), 0.25);

        let h = Heuristic::MinFill;
        assert_eq!(h.score(&graph, 3), 1.0);
        assert_eq!(h.score(&graph, 0), 1.0 / 3.0);
        assert_eq!(h.score(&graph, 1), 1.0);
    }

    #[test]
    fn custom() {
        let graph = HashMapGraph::with_vertices(2);
        let h: Heuristic<HashMapGraph> = Heuristic::Custom(|_, v| v as f64);
        assert_eq!(h.score(&graph, 1), 1.0);
    }
}
