//! Exhaustive minimum spanning forest search for tiny graphs.
//!
//! Enumerates every subset of the edge list with exactly `n - c` edges and
//! keeps the cheapest acyclic one. Only usable while the edge count stays
//! small.

use crate::Edge;

use super::helpers::{count_components, find_root};

/// Largest edge list the exhaustive search accepts.
pub(super) const MAX_BRUTE_FORCE_EDGES: usize = 12;

/// Returns the minimum total weight over all spanning forests of the graph,
/// or `None` when the edge list is too large to enumerate.
pub(super) fn brute_force_forest_weight(vertex_count: usize, edges: &[Edge]) -> Option<i128> {
    if edges.len() > MAX_BRUTE_FORCE_EDGES {
        return None;
    }

    let target = vertex_count - count_components(vertex_count, edges);
    let mut best: Option<i128> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let chosen: Vec<Edge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if !is_acyclic(vertex_count, &chosen) {
            continue;
        }
        let weight = chosen.iter().map(|edge| i128::from(edge.weight())).sum();
        best = Some(best.map_or(weight, |current: i128| current.min(weight)));
    }
    best
}

fn is_acyclic(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let left = find_root(&mut parent, edge.u());
        let right = find_root(&mut parent, edge.v());
        if left == right {
            return false;
        }
        parent[right] = left;
    }
    true
}
