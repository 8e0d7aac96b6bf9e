use crate::elimination_graph::EliminationGraph;
use crate::error::{DecompError, ErrorKind};
use crate::graph::MutableGraph;
use crate::meta_heuristics::Neighbourhood;
use rand::Rng;

/// Positions in `order` whose vertex has maximum degree at elimination time,
/// i.e. the positions producing a largest bag.
///
/// All ties are reported in ascending order. The scan ends once the vertices
/// left to eliminate cannot reach the current maximum any more; positions past
/// that point could only tie if the maximum were exceeded, which cannot happen.
pub fn max_clique_positions<G: MutableGraph>(graph: &G, order: &[usize]) -> Vec<usize> {
    let mut max_clique = 0;
    let mut positions = Vec::new();
    let mut graph = EliminationGraph::new(graph);
    for (i, v) in order.iter().copied().enumerate() {
        let w = graph.degree(v);
        if w == max_clique {
            positions.push(i);
        } else if w > max_clique {
            positions.clear();
            positions.push(i);
            max_clique = w;
        }

        graph.eliminate(v);
        if order.len() - i <= max_clique {
            break;
        }
    }
    positions
}

/// Local search neighbourhood that offers a single move per base solution:
/// a random largest-bag position swapped with another random position.
pub struct MaxCliqueNeighbourhood<G: MutableGraph, R: Rng> {
    graph: G,
    solution: Vec<usize>,
    neighbour: Vec<usize>,
    has_next_neighbour: bool,
    rng: R,
}

impl<G: MutableGraph, R: Rng> MaxCliqueNeighbourhood<G, R> {
    pub fn new(graph: &G, solution: Vec<usize>, rng: R) -> Self {
        let neighbour = solution.clone();
        Self {
            graph: graph.clone(),
            solution,
            neighbour,
            has_next_neighbour: true,
            rng,
        }
    }
}

impl<G: MutableGraph, R: Rng> Neighbourhood for MaxCliqueNeighbourhood<G, R> {
    fn set_solution(&mut self, solution: Vec<usize>) {
        self.neighbour.clone_from(&solution);
        self.solution = solution;
        self.has_next_neighbour = true;
    }

    fn solution(&self) -> &[usize] {
        self.solution.as_slice()
    }

    fn has_next_neighbour_solution(&self) -> bool {
        self.has_next_neighbour
    }

    fn next_neighbour_solution(&mut self) -> Result<&[usize], DecompError> {
        if !self.has_next_neighbour {
            return Err(DecompError::new(
                ErrorKind::NeighbourhoodExhausted,
                "The move for the current solution was already produced.",
            ));
        }
        self.has_next_neighbour = false;
        // a single position has nothing to swap with
        if self.solution.len() < 2 {
            return Ok(self.neighbour.as_slice());
        }

        let max_cliques = max_clique_positions(&self.graph, &self.solution);
        let mut max_clique_pos = 0;
        let mut other_pos = 0;
        while max_clique_pos == other_pos {
            max_clique_pos = max_cliques[self.rng.gen_range(0..max_cliques.len())];
            other_pos = self.rng.gen_range(0..self.solution.len());
        }

        self.neighbour.swap(max_clique_pos, other_pos);
        Ok(self.neighbour.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::graph::{HashMapGraph, MutableGraph};
    use crate::max_clique::{max_clique_positions, MaxCliqueNeighbourhood};
    use crate::meta_heuristics::Neighbourhood;
    use crate::util::validate_order;
    use crate::width::treewidth_unpruned;
    use crate::elimination_graph::EliminationGraph;
    use crate::graph::BaseGraph;
    use rand::prelude::{SliceRandom, StdRng};
    use rand::{Rng, SeedableRng};

    fn degrees_at_elimination(graph: &HashMapGraph, order: &[usize]) -> Vec<usize> {
        let mut graph = EliminationGraph::new(graph);
        order
            .iter()
            .map(|v| {
                let degree = graph.degree(*v);
                graph.eliminate(*v);
                degree
            })
            .collect()
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
    fn ties_are_all_reported() {
        // two disjoint triangles, each contributes a bag of size 3
        let mut graph = HashMapGraph::with_vertices(7);
        graph.make_clique(&[0, 1, 2]);
        graph.make_clique(&[3, 4, 5]);
        let positions = max_clique_positions(&graph, &[0, 3, 1, 4, 2, 5, 6]);
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn strictly_larger_resets() {
        // path 0-1-2 plus a triangle 3-4-5
        let mut graph = HashMapGraph::with_vertices(6);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.make_clique(&[3, 4, 5]);
        let positions = max_clique_positions(&graph, &[0, 1, 3, 2, 4, 5]);
        assert_eq!(positions, vec![2]);
    }

    #[test]
    fn positions_have_maximum_width() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(42);
        for round in 0..30 {
            let n = 4 + round % 10;
            let graph = random_graph(&mut rng, n, 0.4);
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut rng);

            let positions = max_clique_positions(&graph, &order);
            let degrees = degrees_at_elimination(&graph, &order);
            let width = treewidth_unpruned(&graph, &order);

            assert!(!positions.is_empty());
            for p in positions.iter() {
                assert_eq!(degrees[*p], width);
            }
            assert!(degrees.iter().all(|d| *d <= width));
        }
    }

    #[test]
    fn edgeless_graph() {
        let graph = HashMapGraph::with_vertices(3);
        // every vertex ties with width 0 until the remaining count runs out
        assert_eq!(max_clique_positions(&graph, &[1, 0, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn single_move_per_solution() {
        let mut graph = HashMapGraph::with_vertices(5);
        for v in 0..5 {
            graph.add_edge(v, (v + 1) % 5);
        }
        let rng: StdRng = SeedableRng::seed_from_u64(3);
        let solution = vec![0, 1, 2, 3, 4];
        let mut neighbourhood = MaxCliqueNeighbourhood::new(&graph, solution.clone(), rng);

        assert!(neighbourhood.has_next_neighbour_solution());
        let neighbour = neighbourhood.next_neighbour_solution().unwrap().to_vec();
        assert!(validate_order(5, &neighbour).is_ok());
        assert_ne!(neighbour, solution);
        assert!(!neighbourhood.has_next_neighbour_solution());

        let e = neighbourhood.next_neighbour_solution().unwrap_err();
        assert_eq!(e.kind(), ErrorKind::NeighbourhoodExhausted);

        neighbourhood.set_solution(neighbour.clone());
        assert!(neighbourhood.has_next_neighbour_solution());
        assert_eq!(neighbourhood.solution(), neighbour.as_slice());
        assert!(neighbourhood.next_neighbour_solution().is_ok());
    }

    #[test]
    fn move_swaps_a_max_clique_position() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(99);
        for _ in 0..20 {
            let graph = random_graph(&mut rng, 8, 0.5);
            let mut solution: Vec<usize> = (0..8).collect();
            solution.shuffle(&mut rng);
            let positions = max_clique_positions(&graph, &solution);

            let seed = rng.gen();
            let mut neighbourhood =
                MaxCliqueNeighbourhood::new(&graph, solution.clone(), StdRng::seed_from_u64(seed));
            let neighbour = neighbourhood.next_neighbour_solution().unwrap().to_vec();

            let changed: Vec<usize> = (0..8).filter(|i| neighbour[*i] != solution[*i]).collect();
            assert_eq!(changed.len(), 2);
            assert!(changed.iter().any(|i| positions.contains(i)));
            assert!(validate_order(8, &neighbour).is_ok());
        }
    }

    #[test]
    fn reproducible_with_seed() {
        let mut graph = HashMapGraph::with_vertices(6);
        graph.make_clique(&[0, 1, 2, 3]);
        graph.add_edge(3, 4);
        graph.add_edge(4, 5);
        let solution = vec![5, 4, 3, 2, 1, 0];

        let mut a = MaxCliqueNeighbourhood::new(&graph, solution.clone(), StdRng::seed_from_u64(11));
        let mut b = MaxCliqueNeighbourhood::new(&graph, solution, StdRng::seed_from_u64(11));
        assert_eq!(
            a.next_neighbour_solution().unwrap(),
            b.next_neighbour_solution().unwrap()
        );
    }
}
