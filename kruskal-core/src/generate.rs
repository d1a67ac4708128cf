//! Random connected graph generation.
//!
//! The generator first links every vertex `i > 0` to a parent drawn from
//! `0..i`, which yields a random spanning tree and therefore a connected
//! graph. It then makes a random number of attempts to add extra edges
//! between uniformly drawn endpoints, skipping self-loops.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{Edge, Graph, Weight};

/// Weights assigned to generated edges.
pub const RANDOM_WEIGHT_RANGE: RangeInclusive<Weight> = 1..=100;

/// Settings for a single random graph.
///
/// # Examples
/// ```
/// use kruskal_core::{RandomGraphConfig, kruskal};
///
/// let graph = RandomGraphConfig::new(12).with_seed(7).generate();
/// assert_eq!(graph.vertex_count(), 12);
/// assert!(kruskal(&graph)?.is_tree());
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomGraphConfig {
    vertex_count: usize,
    seed: Option<u64>,
}

impl RandomGraphConfig {
    /// Creates a configuration for `vertex_count` vertices seeded from
    /// system entropy.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            seed: None,
        }
    }

    /// Fixes the RNG seed so generation is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the configured seed, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Generates a graph with these settings.
    #[must_use]
    pub fn generate(&self) -> Graph {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        random_connected_graph(self.vertex_count, &mut rng)
    }
}

/// Generates a connected graph on `vertex_count` vertices.
///
/// The extra-edge attempt count is uniform in `0..n(n-1)/2`; attempts that
/// draw a self-loop add nothing. All weights fall in
/// [`RANDOM_WEIGHT_RANGE`].
#[instrument(name = "core.random_graph", skip(rng))]
pub fn random_connected_graph<R: Rng + ?Sized>(vertex_count: usize, rng: &mut R) -> Graph {
    let mut graph = Graph::new(vertex_count);

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(RANDOM_WEIGHT_RANGE);
        graph.push_valid(Edge::new(vertex, parent, weight));
    }

    let pair_count = vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2;
    let attempts = if pair_count == 0 {
        0
    } else {
        rng.gen_range(0..pair_count)
    };
    for _ in 0..attempts {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u == v {
            continue;
        }
        let weight = rng.gen_range(RANDOM_WEIGHT_RANGE);
        debug!(u, v, weight, "added edge");
        graph.push_valid(Edge::new(u, v, weight));
    }

    info!(
        vertices = vertex_count,
        edges = graph.edge_count(),
        "random graph generated"
    );
    graph
}
