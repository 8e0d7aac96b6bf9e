//! Contracts between the decomposition problems and the search engines driving
//! them, plus the iterated local search used to improve finished orders.
use crate::error::DecompError;
use std::collections::BTreeMap;

mod construction;
mod local_search;

pub use construction::greedy_tour;
pub use local_search::{HillClimbing, IterativeLocalSearch, DEFAULT_LOCAL_SEARCH_ITERATIONS};

/// Vertex to desirability score. Ordered by vertex so that consumers drawing
/// from it with a seeded generator stay reproducible.
pub type VertexScores = BTreeMap<usize, f64>;

/// Interface an ant-style tour construction uses to grow elimination orders.
///
/// Implementations keep per-construction state (the partially eliminated
/// graph and the visited vertices) which is only reset by `cleanup`. One
/// instance must not serve two constructions at the same time.
pub trait OptimizationProblem {
    fn max_tour_size(&self) -> usize;
    fn feasible_start_vertices(&self) -> Result<VertexScores, DecompError>;
    /// Scores of all vertices not yet added to the current tour.
    fn feasible_neighbours(&self, current: usize) -> Result<VertexScores, DecompError>;
    fn is_tour_complete(&self, tour: &[usize]) -> bool;
    fn eval_tour(&self, tour: &[usize]) -> Result<usize, DecompError>;
    fn pheromone_update(&self, v: usize, tour_length: f64) -> f64;
    fn added_vertex_to_tour(&mut self, v: usize);
    fn cleanup(&mut self);
}

/// Fitness of a complete solution, larger is better.
pub trait EvaluationFunction {
    fn eval_solution(&self, solution: &[usize]) -> Result<f64, DecompError>;
}

pub trait PerturbationFunction {
    fn perturbate(&mut self, solution: &[usize]) -> Vec<usize>;
}

pub trait Neighbourhood {
    fn set_solution(&mut self, solution: Vec<usize>);
    fn solution(&self) -> &[usize];
    fn has_next_neighbour_solution(&self) -> bool;
    fn next_neighbour_solution(&mut self) -> Result<&[usize], DecompError>;
}
