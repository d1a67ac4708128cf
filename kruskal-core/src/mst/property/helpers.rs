//! Shared helper functions for MST property-based tests.

use crate::Edge;

/// Path-halving find over a plain parent array, independent of
/// [`crate::DisjointSet`].
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums edge weights as `i128` so the check itself cannot overflow.
pub(super) fn total_weight_i128(edges: &[Edge]) -> i128 {
    edges.iter().map(|e| i128::from(e.weight())).sum()
}

/// Counts connected components with a breadth-first search over an
/// adjacency list.
pub(super) fn count_components(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in edges {
        adjacency[edge.u()].push(edge.v());
        adjacency[edge.v()].push(edge.u());
    }

    let mut seen = vec![false; vertex_count];
    let mut components = 0;
    let mut queue = std::collections::VecDeque::new();
    for start in 0..vertex_count {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    components
}
