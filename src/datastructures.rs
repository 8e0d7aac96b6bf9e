use bitvec::prelude::*;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Fixed-capacity set of vertices `0..capacity`, used to track which vertices
/// already made it into the order under construction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VertexSet {
    bit_vec: BitVec,
}

impl Debug for VertexSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self.iter().map(|i| i.to_string()).collect();
        write!(f, "VertexSet {{ {} }}", values.join(", "))
    }
}

impl VertexSet {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            bit_vec: bitvec![0; capacity],
        }
    }

    /// Returns `true` if `v` was not yet contained.
    #[inline]
    pub fn insert(&mut self, v: usize) -> bool {
        if self.bit_vec[v] {
            return false;
        }
        self.bit_vec.set(v, true);
        true
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.bit_vec[v]
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bit_vec.as_mut_slice().iter_mut().for_each(|x| *x = 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.bit_vec.len()).filter(move |v| self.bit_vec[*v])
    }

    pub fn iter_missing(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.bit_vec.len()).filter(move |v| !self.bit_vec[*v])
    }
}
