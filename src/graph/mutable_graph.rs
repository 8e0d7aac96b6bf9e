use crate::graph::base_graph::BaseGraph;

pub trait MutableGraph: BaseGraph {
    fn add_vertex(&mut self, u: usize);
    fn add_edge(&mut self, u: usize, v: usize);
    fn remove_edge(&mut self, u: usize, v: usize);
    fn new() -> Self;

    /// Graph on the dense vertex set `0..n` without edges.
    fn with_vertices(n: usize) -> Self {
        let mut graph = Self::new();
        for u in 0..n {
            graph.add_vertex(u);
        }
        graph
    }

    fn make_clique(&mut self, vertices: &[usize]) {
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                self.add_edge(*u, *v);
            }
        }
    }
}
