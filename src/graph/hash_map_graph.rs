use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use fxhash::FxHashSet;

#[derive(Clone, Debug, Default)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl HashMapGraph {
    pub fn edge_count(&self) -> usize {
        self.data.values().map(|nb| nb.len()).sum::<usize>() / 2
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        if u == v {
            self.add_vertex(u);
            return;
        }
        let first = self.data.entry(u).or_insert_with(FxHashSet::default);
        first.insert(v);
        let second = self.data.entry(v).or_insert_with(FxHashSet::default);
        second.insert(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        if let Some(x) = self.data.get_mut(&u) {
            x.remove(&v);
        }
        if let Some(x) = self.data.get_mut(&v) {
            x.remove(&u);
        }
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_vertices(n: usize) -> Self {
        let mut data = FxHashMap::with_capacity_and_hasher(n, Default::default());
        for u in 0..n {
            data.insert(u, FxHashSet::default());
        }
        HashMapGraph { data }
    }
}

impl BaseGraph for HashMapGraph {
    fn degree(&self, u: usize) -> usize {
        assert!(self.data.contains_key(&u));
        self.data.get(&u).unwrap().len()
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).map_or(false, |nb| nb.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.keys().copied())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.get(&u).unwrap().iter().copied())
    }

    fn fill_in_count(&self, u: usize) -> usize {
        let nb = self.data.get(&u).unwrap();
        let mut cnt = 0;
        for a in nb {
            for b in nb.iter().filter(|b| a < *b) {
                if !self.data.get(a).unwrap().contains(b) {
                    cnt += 1;
                }
            }
        }
        cnt
    }
}
