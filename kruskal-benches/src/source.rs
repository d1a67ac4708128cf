//! Seeded graph workloads for benchmarks.
//!
//! Sparse graphs come from the core random connected graph generator; complete
//! graphs connect every pair once with a weight drawn from
//! [`RANDOM_WEIGHT_RANGE`].

use std::fmt;

use kruskal_core::{Graph, RANDOM_WEIGHT_RANGE, RandomGraphConfig};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Edge list shape of a benchmark graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Density {
    /// A random spanning tree plus random extra edges.
    Sparse,
    /// Every unordered vertex pair exactly once.
    Complete,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sparse => "sparse",
            Self::Complete => "complete",
        })
    }
}

/// Configuration for a benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphWorkload {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edge list shape.
    pub density: Density,
    /// RNG seed.
    pub seed: u64,
}

impl GraphWorkload {
    /// Builds the graph described by this workload.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
    /// [`BenchSetupError::Mst`] if an edge is rejected.
    pub fn generate(&self) -> Result<Graph, BenchSetupError> {
        if self.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        match self.density {
            Density::Sparse => Ok(RandomGraphConfig::new(self.vertex_count)
                .with_seed(self.seed)
                .generate()),
            Density::Complete => self.complete(),
        }
    }

    fn complete(&self) -> Result<Graph, BenchSetupError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = Graph::new(self.vertex_count);
        for u in 0..self.vertex_count {
            for v in (u + 1)..self.vertex_count {
                let weight = rng.gen_range(RANDOM_WEIGHT_RANGE);
                graph.add_edge(u, v, weight)?;
            }
        }
        Ok(graph)
    }
}

/// Returns `count` seeded `(a, b)` pairs over `0..element_count` for union
/// benchmarks.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `element_count` is zero.
pub fn union_pairs(
    element_count: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if element_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "element_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect())
}
