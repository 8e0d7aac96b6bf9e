use crate::error::DecompError;
use crate::meta_heuristics::{OptimizationProblem, VertexScores};

fn best_scored(scores: &VertexScores) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (v, score) in scores.iter() {
        match best {
            Some((_, s)) if s >= *score => {}
            _ => best = Some((*v, *score)),
        }
    }
    best.map(|(v, _)| v)
}

/// Builds a complete tour by always extending with the highest scored feasible
/// vertex, ties going to the smallest vertex. The problem is cleaned up before
/// and after the construction.
pub fn greedy_tour<P: OptimizationProblem>(problem: &mut P) -> Result<Vec<usize>, DecompError> {
    problem.cleanup();
    let mut tour = Vec::with_capacity(problem.max_tour_size());
    if problem.max_tour_size() == 0 {
        return Ok(tour);
    }

    let mut current = match best_scored(&problem.feasible_start_vertices()?) {
        Some(v) => v,
        None => return Ok(tour),
    };
    loop {
        tour.push(current);
        problem.added_vertex_to_tour(current);
        if problem.is_tour_complete(&tour) {
            break;
        }
        current = match best_scored(&problem.feasible_neighbours(current)?) {
            Some(v) => v,
            None => break,
        };
    }
    problem.cleanup();
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use crate::meta_heuristics::construction::best_scored;
    use crate::meta_heuristics::VertexScores;

    #[test]
    fn highest_score_lowest_vertex() {
        let mut scores = VertexScores::new();
        scores.insert(4, 0.5);
        scores.insert(2, 0.25);
        scores.insert(7, 0.5);
        assert_eq!(best_scored(&scores), Some(4));
        assert_eq!(best_scored(&VertexScores::new()), None);
    }
}
