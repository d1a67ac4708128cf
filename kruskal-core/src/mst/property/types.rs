//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::Edge;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen, producing inputs that
/// stress different aspects of the builder. `ManyIdentical` is weighted up
/// because it exercises the tie-break policy hardest.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights.
    #[weight(3)]
    ManyIdentical,
    /// Weights straddling zero, including negative values.
    #[weight(2)]
    Negative,
    /// Sparse graph with roughly `1.5n` to `2n` edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph.
    #[weight(2)]
    Dense,
    /// Multiple components with no cross-component edges.
    #[weight(2)]
    Disconnected,
    /// Random multigraph with self-loops and duplicate edges.
    #[weight(2)]
    Messy,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the distribution used
/// during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in insertion order.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the graph under test from the fixture.
    pub(super) fn graph(&self) -> crate::Graph {
        crate::Graph::from_edges(self.vertex_count, self.edges.iter().copied())
    }
}
