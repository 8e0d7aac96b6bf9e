use crate::error::DecompError;
use crate::graph::HyperGraph;
use fxhash::FxHashMap;

/// Greedy set cover of vertex sets by hyperedges.
///
/// In every round the hyperedge containing the most still uncovered vertices
/// is picked. Ties go to the hyperedge with the smallest id, which keeps the
/// result reproducible across runs.
#[derive(Clone, Copy, Debug)]
pub struct GreedyHyperedgeCovering<'a> {
    hypergraph: &'a HyperGraph,
}

impl<'a> GreedyHyperedgeCovering<'a> {
    pub fn new(hypergraph: &'a HyperGraph) -> Self {
        Self { hypergraph }
    }

    pub fn hypergraph(&self) -> &HyperGraph {
        self.hypergraph
    }

    /// Returns the ids of the chosen hyperedges in the order they were picked.
    pub fn cover(&self, mut vertices: Vec<usize>) -> Result<Vec<usize>, DecompError> {
        if let Some(v) = vertices
            .iter()
            .copied()
            .find(|v| *v >= self.hypergraph.order() || self.hypergraph.edges_for_vertex(*v).is_empty())
        {
            return Err(DecompError::uncoverable_vertex(v));
        }
        vertices.sort_unstable();
        vertices.dedup();

        let mut edges = Vec::new();
        let mut tally: FxHashMap<usize, usize> = FxHashMap::default();
        while !vertices.is_empty() {
            tally.clear();
            for v in vertices.iter().copied() {
                for e in self.hypergraph.edges_for_vertex(v) {
                    *tally.entry(*e).or_insert(0) += 1;
                }
            }

            let mut maximum_edge = None;
            let mut covered = 0;
            for (e, count) in tally.iter() {
                let better = match maximum_edge {
                    None => true,
                    Some(best) => *count > covered || (*count == covered && *e < best),
                };
                if better {
                    maximum_edge = Some(*e);
                    covered = *count;
                }
            }
            // every remaining vertex has at least one hyperedge
            let maximum_edge = maximum_edge.unwrap();
            let members = self.hypergraph.edge(maximum_edge);
            vertices.retain(|v| !members.contains(v));
            edges.push(maximum_edge);
        }
        Ok(edges)
    }

    /// Size of the greedy cover of `v` together with `neighbors`.
    pub fn closed_neighborhood_cover_size<I: Iterator<Item = usize>>(
        &self,
        v: usize,
        neighbors: I,
    ) -> Result<usize, DecompError> {
        let mut vertices: Vec<usize> = neighbors.collect();
        vertices.push(v);
        Ok(self.cover(vertices)?.len())
    }
}
