use crate::error::DecompError;
use crate::meta_heuristics::{EvaluationFunction, Neighbourhood, PerturbationFunction};
#[cfg(feature = "handle-ctrlc")]
use crate::signals::received_ctrl_c;
#[cfg(feature = "log")]
use log::{debug, info};

pub const DEFAULT_LOCAL_SEARCH_ITERATIONS: usize = 100;

/// Moves to a neighbour as long as it is strictly fitter.
pub struct HillClimbing<N: Neighbourhood> {
    neighbourhood: N,
    current: Vec<usize>,
    current_fitness: f64,
    best: Vec<usize>,
    best_fitness: f64,
}

impl<N: Neighbourhood> HillClimbing<N> {
    pub fn new<E: EvaluationFunction>(
        solution: Vec<usize>,
        eval: &E,
        mut neighbourhood: N,
    ) -> Result<Self, DecompError> {
        let fitness = eval.eval_solution(&solution)?;
        neighbourhood.set_solution(solution.clone());
        Ok(Self {
            neighbourhood,
            current: solution.clone(),
            current_fitness: fitness,
            best: solution,
            best_fitness: fitness,
        })
    }

    /// Restarts the climb from `solution`, keeping the best solution so far.
    pub fn set_solution<E: EvaluationFunction>(
        &mut self,
        solution: Vec<usize>,
        eval: &E,
    ) -> Result<(), DecompError> {
        self.current_fitness = eval.eval_solution(&solution)?;
        self.neighbourhood.set_solution(solution.clone());
        self.current = solution;
        Ok(())
    }

    /// Returns `true` if the best solution so far was improved.
    pub fn search<E: EvaluationFunction>(&mut self, eval: &E) -> Result<bool, DecompError> {
        while self.neighbourhood.has_next_neighbour_solution() {
            let candidate = self.neighbourhood.next_neighbour_solution()?.to_vec();
            let fitness = eval.eval_solution(&candidate)?;
            if fitness > self.current_fitness {
                self.neighbourhood.set_solution(candidate.clone());
                self.current = candidate;
                self.current_fitness = fitness;
            }
        }
        if self.current_fitness > self.best_fitness {
            self.best.clone_from(&self.current);
            self.best_fitness = self.current_fitness;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn current_solution(&self) -> &[usize] {
        self.current.as_slice()
    }

    pub fn best_so_far_solution(&self) -> &[usize] {
        self.best.as_slice()
    }

    pub fn best_so_far_fitness(&self) -> f64 {
        self.best_fitness
    }
}

/// Alternates perturbation of the best solution so far and hill climbing.
pub struct IterativeLocalSearch<N: Neighbourhood> {
    climbing: HillClimbing<N>,
    iterations: usize,
}

impl<N: Neighbourhood> IterativeLocalSearch<N> {
    pub fn new(climbing: HillClimbing<N>) -> Self {
        Self {
            climbing,
            iterations: DEFAULT_LOCAL_SEARCH_ITERATIONS,
        }
    }

    impl_setter!(self, iterations, usize);

    pub fn run<P: EvaluationFunction + PerturbationFunction>(
        &mut self,
        problem: &mut P,
    ) -> Result<(), DecompError> {
        self.climbing.search(&*problem)?;
        for _i in 0..self.iterations {
            #[cfg(feature = "handle-ctrlc")]
            if received_ctrl_c() {
                #[cfg(feature = "log")]
                info!("local search interrupted after {} iterations", _i);
                break;
            }
            let perturbed = problem.perturbate(self.climbing.best_so_far_solution());
            self.climbing.set_solution(perturbed, &*problem)?;
            if self.climbing.search(&*problem)? {
                #[cfg(feature = "log")]
                debug!(
                    "iteration {}: improved fitness to {}",
                    _i,
                    self.climbing.best_so_far_fitness()
                );
            }
        }
        #[cfg(feature = "log")]
        info!(
            "local search finished with fitness {}",
            self.climbing.best_so_far_fitness()
        );
        Ok(())
    }

    pub fn best_so_far_solution(&self) -> &[usize] {
        self.climbing.best_so_far_solution()
    }

    pub fn best_so_far_fitness(&self) -> f64 {
        self.climbing.best_so_far_fitness()
    }

    pub fn into_best_so_far_solution(self) -> Vec<usize> {
        self.climbing.best
    }
}
