use crate::datastructures::VertexSet;
use crate::error::{DecompError, ErrorKind};
use crate::graph::BaseGraph;
use std::cmp::max;

/// Checks that `order` is a permutation of `0..n`.
pub fn validate_order(n: usize, order: &[usize]) -> Result<(), DecompError> {
    if order.len() != n {
        let msg = format!(
            "Order contains {} vertices but the graph has {}.",
            order.len(),
            n
        );
        return Err(DecompError::new(ErrorKind::InvalidOrder, &msg));
    }
    let mut seen = VertexSet::new(n);
    for v in order.iter().copied() {
        if v >= n {
            let msg = format!("Vertex {} is out of range.", v);
            return Err(DecompError::new(ErrorKind::InvalidOrder, &msg));
        }
        if !seen.insert(v) {
            let msg = format!("Vertex {} is contained more than once.", v);
            return Err(DecompError::new(ErrorKind::InvalidOrder, &msg));
        }
    }
    Ok(())
}

/// Inverse of `order`: position of every vertex.
pub fn positions(order: &[usize]) -> Vec<usize> {
    let mut pos = vec![0; order.len()];
    for (i, v) in order.iter().enumerate() {
        pos[*v] = i;
    }
    pos
}

/// Induced width of `order` without touching a copy of the graph.
///
/// The degree of `order[i]` at elimination time equals the number of not yet
/// eliminated vertices reachable from it through already eliminated vertices.
pub fn width_by_virtual_elimination<G: BaseGraph>(graph: &G, order: &[usize]) -> usize {
    let pos = positions(order);
    let mut stack = Vec::with_capacity(graph.order());
    let mut width = 0;
    for (idx, v) in order.iter().copied().enumerate() {
        let mut degree = 0;
        let mut visited = VertexSet::new(graph.order());
        visited.insert(v);
        stack.push(v);
        while let Some(x) = stack.pop() {
            for u in graph.neighborhood(x) {
                if visited.insert(u) {
                    if pos[u] < idx {
                        stack.push(u);
                    } else {
                        degree += 1;
                    }
                }
            }
        }
        width = max(degree, width);
    }
    width
}
