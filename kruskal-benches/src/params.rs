//! Benchmark parameter types.

use std::fmt;

use crate::source::Density;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Shape of the edge list.
    pub density: Density,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.density)
    }
}

/// Parameters for a disjoint-set benchmark run.
#[derive(Clone, Debug)]
pub struct UnionBenchParams {
    /// Number of elements in the forest.
    pub element_count: usize,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.element_count)
    }
}
