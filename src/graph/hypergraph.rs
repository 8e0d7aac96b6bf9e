use crate::graph::mutable_graph::MutableGraph;

/// Hypergraph on the dense vertex set `0..order()`.
///
/// Every hyperedge keeps its vertices deduplicated and in insertion order. The
/// incidence lists are kept in ascending hyperedge order, which the greedy
/// covering relies on for reproducible tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct HyperGraph {
    vertex_names: Vec<String>,
    edges: Vec<Vec<usize>>,
    edge_names: Vec<String>,
    incidence: Vec<Vec<usize>>,
}

impl HyperGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(n: usize) -> Self {
        let mut hypergraph = Self::new();
        for v in 0..n {
            hypergraph.add_vertex(&format!("v{}", v + 1));
        }
        hypergraph
    }

    pub fn add_vertex(&mut self, name: &str) -> usize {
        self.vertex_names.push(String::from(name));
        self.incidence.push(Vec::new());
        self.vertex_names.len() - 1
    }

    /// Adds a hyperedge over `vertices` and returns its id. Vertices beyond the
    /// current vertex range are added implicitly.
    pub fn add_edge(&mut self, name: &str, vertices: &[usize]) -> usize {
        let id = self.edges.len();
        let mut members = Vec::with_capacity(vertices.len());
        for v in vertices.iter().copied() {
            while v >= self.order() {
                let name = format!("v{}", self.order() + 1);
                self.add_vertex(&name);
            }
            if !members.contains(&v) {
                members.push(v);
                self.incidence[v].push(id);
            }
        }
        self.edges.push(members);
        self.edge_names.push(String::from(name));
        id
    }

    pub fn order(&self) -> usize {
        self.vertex_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, e: usize) -> &[usize] {
        self.edges[e].as_slice()
    }

    pub fn edge_name(&self, e: usize) -> &str {
        self.edge_names[e].as_str()
    }

    pub fn vertex_name(&self, v: usize) -> &str {
        self.vertex_names[v].as_str()
    }

    pub fn edges_for_vertex(&self, v: usize) -> &[usize] {
        self.incidence[v].as_slice()
    }

    /// Two vertices are adjacent iff they share a hyperedge.
    pub fn primal_graph<G: MutableGraph>(&self) -> G {
        let mut graph = G::with_vertices(self.order());
        for edge in self.edges.iter() {
            graph.make_clique(edge);
        }
        graph
    }
}
