use std::fmt::Debug;

pub trait BaseGraph: Clone + Debug {
    fn degree(&self, u: usize) -> usize;
    fn order(&self) -> usize;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, u) in vertices.iter().enumerate() {
            for v in vertices.iter().skip(i + 1) {
                if !self.has_edge(*u, *v) {
                    return false;
                }
            }
        }
        true
    }

    /// Number of edges missing between the neighbors of `u`.
    fn fill_in_count(&self, u: usize) -> usize {
        let nb: Vec<usize> = self.neighborhood(u).collect();
        let mut cnt = 0;
        for (i, a) in nb.iter().enumerate() {
            for b in nb.iter().skip(i + 1) {
                if !self.has_edge(*a, *b) {
                    cnt += 1;
                }
            }
        }
        cnt
    }
}
