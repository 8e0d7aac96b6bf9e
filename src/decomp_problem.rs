use crate::covering::GreedyHyperedgeCovering;
use crate::datastructures::VertexSet;
use crate::elimination_graph::EliminationGraph;
use crate::error::DecompError;
use crate::graph::{HyperGraph, MutableGraph};
use crate::heuristic::Heuristic;
use crate::max_clique::{max_clique_positions, MaxCliqueNeighbourhood};
use crate::meta_heuristics::{
    EvaluationFunction, HillClimbing, IterativeLocalSearch, OptimizationProblem,
    PerturbationFunction, VertexScores, DEFAULT_LOCAL_SEARCH_ITERATIONS,
};
use crate::util::validate_order;
use crate::width::{generalized_hypertree_width, treewidth};
#[cfg(feature = "log")]
use log::debug;
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

/// Width notion a decomposition problem optimizes, together with the score
/// used to rank vertices during tour construction.
pub trait WidthMeasure<G: MutableGraph> {
    fn compute_width(&self, graph: &G, order: &[usize]) -> Result<usize, DecompError>;
    /// Desirability of eliminating `v` next from `graph`.
    fn score(&self, graph: &G, v: usize) -> Result<f64, DecompError>;

    /// Score of an unvisited `v` while a tour is under construction. `source`
    /// is the untouched graph, `partial` has the tour so far eliminated.
    fn neighbour_score(&self, _source: &G, partial: &G, v: usize) -> Result<f64, DecompError> {
        self.score(partial, v)
    }
}

/// Induced width, vertices ranked by a graph heuristic.
pub struct Treewidth<G> {
    heuristic: Heuristic<G>,
}

impl<G> Treewidth<G> {
    pub fn new(heuristic: Heuristic<G>) -> Self {
        Self { heuristic }
    }
}

impl<G: MutableGraph> WidthMeasure<G> for Treewidth<G> {
    fn compute_width(&self, graph: &G, order: &[usize]) -> Result<usize, DecompError> {
        Ok(treewidth(graph, order))
    }

    fn score(&self, graph: &G, v: usize) -> Result<f64, DecompError> {
        Ok(self.heuristic.score(graph, v))
    }
}

/// Generalized hypertree width, vertices ranked by the inverse size of a
/// greedy cover of their closed neighborhood.
pub struct GeneralizedHypertreeWidth {
    hypergraph: HyperGraph,
}

impl GeneralizedHypertreeWidth {
    pub fn new(hypergraph: HyperGraph) -> Self {
        Self { hypergraph }
    }

    pub fn hypergraph(&self) -> &HyperGraph {
        &self.hypergraph
    }
}

impl<G: MutableGraph> WidthMeasure<G> for GeneralizedHypertreeWidth {
    fn compute_width(&self, graph: &G, order: &[usize]) -> Result<usize, DecompError> {
        let covering = GreedyHyperedgeCovering::new(&self.hypergraph);
        generalized_hypertree_width(graph, &covering, order)
    }

    fn score(&self, graph: &G, v: usize) -> Result<f64, DecompError> {
        let covering = GreedyHyperedgeCovering::new(&self.hypergraph);
        let size = covering.closed_neighborhood_cover_size(v, graph.neighborhood(v))?;
        Ok(1.0 / size as f64)
    }

    /// Covers are taken in the primal graph, ignoring the fill-in of the tour
    /// under construction.
    fn neighbour_score(&self, source: &G, _partial: &G, v: usize) -> Result<f64, DecompError> {
        self.score(source, v)
    }
}

/// Elimination ordering problem handed to the tour construction and the
/// local search.
///
/// Owns the source graph and the elimination graph of the tour currently
/// under construction. `added_vertex_to_tour` is the only place that advances
/// the latter and `cleanup` resets it; an instance therefore serves one
/// construction at a time.
pub struct DecompProblem<G: MutableGraph, W: WidthMeasure<G>, R: Rng> {
    graph: G,
    elim_graph: EliminationGraph<G>,
    visited: VertexSet,
    vertex_weight: Vec<f64>,
    vertices_eliminated: usize,
    measure: W,
    rng: R,
    local_search_iterations: usize,
}

pub type TreeDecompProblem<G, R = StdRng> = DecompProblem<G, Treewidth<G>, R>;
pub type HyperTreeDecompProblem<G, R = StdRng> = DecompProblem<G, GeneralizedHypertreeWidth, R>;

impl<G: MutableGraph, R: Rng> DecompProblem<G, Treewidth<G>, R> {
    pub fn new(graph: G, heuristic: Heuristic<G>, rng: R) -> Self {
        Self::with_measure(graph, Treewidth::new(heuristic), rng)
    }
}

impl<G: MutableGraph, R: Rng> DecompProblem<G, GeneralizedHypertreeWidth, R> {
    /// Works on the primal graph of `hypergraph`.
    pub fn new(hypergraph: HyperGraph, rng: R) -> Self {
        let graph = hypergraph.primal_graph();
        Self::with_measure(graph, GeneralizedHypertreeWidth::new(hypergraph), rng)
    }

    pub fn hypergraph(&self) -> &HyperGraph {
        self.measure.hypergraph()
    }
}

impl<G: MutableGraph, W: WidthMeasure<G>, R: Rng> DecompProblem<G, W, R> {
    pub fn with_measure(graph: G, measure: W, rng: R) -> Self {
        let n = graph.order();
        Self {
            elim_graph: EliminationGraph::new(&graph),
            graph,
            visited: VertexSet::new(n),
            vertex_weight: vec![0.0; n],
            vertices_eliminated: 0,
            measure,
            rng,
            local_search_iterations: DEFAULT_LOCAL_SEARCH_ITERATIONS,
        }
    }

    impl_setter!(self, local_search_iterations, usize);

    pub fn number_of_vertices(&self) -> usize {
        self.graph.order()
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn elimination_graph(&self) -> &G {
        self.elim_graph.graph()
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.visited.contains(v)
    }

    pub fn vertices_eliminated(&self) -> usize {
        self.vertices_eliminated
    }

    pub fn vertex_weight(&self, v: usize) -> f64 {
        self.vertex_weight[v]
    }

    pub fn compute_width(&self, tour: &[usize]) -> Result<usize, DecompError> {
        validate_order(self.graph.order(), tour)?;
        self.measure.compute_width(&self.graph, tour)
    }

    /// Improves `tour` by iterated hill climbing in the max clique
    /// neighbourhood and returns the best order found.
    pub fn apply_local_search(&mut self, tour: &[usize]) -> Result<Vec<usize>, DecompError> {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        let neighbourhood = MaxCliqueNeighbourhood::new(&self.graph, tour.to_vec(), rng);
        let climbing = HillClimbing::new(tour.to_vec(), &*self, neighbourhood)?;
        let mut search =
            IterativeLocalSearch::new(climbing).iterations(self.local_search_iterations);
        search.run(self)?;
        #[cfg(feature = "log")]
        debug!(
            "local search reached fitness {}",
            search.best_so_far_fitness()
        );
        Ok(search.into_best_so_far_solution())
    }
}

impl<G: MutableGraph, W: WidthMeasure<G>, R: Rng> OptimizationProblem for DecompProblem<G, W, R> {
    fn max_tour_size(&self) -> usize {
        self.graph.order()
    }

    fn feasible_start_vertices(&self) -> Result<VertexScores, DecompError> {
        let mut vertices = VertexScores::new();
        for v in 0..self.graph.order() {
            vertices.insert(v, self.measure.score(&self.graph, v)?);
        }
        Ok(vertices)
    }

    fn feasible_neighbours(&self, _current: usize) -> Result<VertexScores, DecompError> {
        let mut vertices = VertexScores::new();
        for v in self.visited.iter_missing() {
            let score = self
                .measure
                .neighbour_score(&self.graph, self.elim_graph.graph(), v)?;
            vertices.insert(v, score);
        }
        Ok(vertices)
    }

    fn is_tour_complete(&self, tour: &[usize]) -> bool {
        tour.len() == self.graph.order()
    }

    fn eval_tour(&self, tour: &[usize]) -> Result<usize, DecompError> {
        self.compute_width(tour)
    }

    fn pheromone_update(&self, v: usize, tour_length: f64) -> f64 {
        1.0 / (self.vertex_weight[v] + 1.0) * (1.0 / tour_length)
    }

    fn added_vertex_to_tour(&mut self, v: usize) {
        if !self.visited.insert(v) {
            return;
        }
        let remaining = self.graph.order() - self.vertices_eliminated;
        self.vertex_weight[v] = self.elim_graph.degree(v) as f64 / remaining as f64;
        self.elim_graph.eliminate(v);
        self.vertices_eliminated += 1;
    }

    fn cleanup(&mut self) {
        self.vertices_eliminated = 0;
        self.elim_graph.reset(&self.graph);
        self.visited.clear();
    }
}

impl<G: MutableGraph, W: WidthMeasure<G>, R: Rng> EvaluationFunction for DecompProblem<G, W, R> {
    /// Inverse width; a width of zero maps to the largest fitness.
    fn eval_solution(&self, solution: &[usize]) -> Result<f64, DecompError> {
        let width = self.compute_width(solution)?;
        if width == 0 {
            return Ok(f64::MAX);
        }
        Ok(1.0 / width as f64)
    }
}

impl<G: MutableGraph, W: WidthMeasure<G>, R: Rng> PerturbationFunction
    for DecompProblem<G, W, R>
{
    /// Swaps every largest-bag position with a random position. Later swaps
    /// may undo earlier ones.
    fn perturbate(&mut self, solution: &[usize]) -> Vec<usize> {
        let mut new_solution = solution.to_vec();
        if new_solution.is_empty() {
            return new_solution;
        }
        for p in max_clique_positions(&self.graph, solution) {
            let swap_pos = self.rng.gen_range(0..new_solution.len());
            new_solution.swap(p, swap_pos);
        }
        new_solution
    }
}
