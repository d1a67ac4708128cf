//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are stable-sorted by ascending weight, so edges of equal weight are
//! considered in insertion order and the selected forest is deterministic.
//! Each edge joining two different trees of the forest is accepted and the
//! trees are merged through a [`DisjointSet`] owned by the call.

use tracing::{debug, instrument};

use crate::{DisjointSet, Edge, Graph, MstError, Result, Weight};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: Weight,
    vertex_count: usize,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in the order Kruskal selected them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of vertices of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees in the forest, one per connected
    /// component of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns `true` when the forest holds exactly
    /// `vertex_count - component_count` edges.
    ///
    /// A forest over `n` vertices with `c` trees has `n - c` edges, so this
    /// holds for every forest the builder returns.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(self.component_count)
    }
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// Self-loops are never selected because both endpoints already share a
/// set. Negative weights are handled like any other weight.
///
/// # Errors
/// Returns [`MstError::WeightOverflow`] when the total weight does not fit
/// in [`Weight`].
///
/// # Examples
/// ```
/// use kruskal_core::{Graph, kruskal};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 2)?;
/// graph.add_edge(1, 2, 3)?;
/// graph.add_edge(0, 2, 1)?;
/// let forest = kruskal(&graph)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[instrument(
    name = "core.kruskal",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> Result<MinimumSpanningForest> {
    let vertex_count = graph.vertex_count();
    let mut sets = DisjointSet::new(vertex_count);

    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(Edge::weight);

    let mut edges =
        Vec::with_capacity(vertex_count.saturating_sub(1).min(graph.edge_count()));
    let mut total_weight: Weight = 0;
    for edge in sorted {
        if sets.num_sets() <= 1 {
            break;
        }
        if !sets.union_sets(edge.u(), edge.v())? {
            continue;
        }
        total_weight = total_weight
            .checked_add(edge.weight())
            .ok_or(MstError::WeightOverflow {
                accepted: edges.len(),
            })?;
        edges.push(edge);
    }

    let forest = MinimumSpanningForest {
        edges,
        total_weight,
        vertex_count,
        component_count: sets.num_sets(),
    };
    debug_assert!(forest.is_acyclic(), "spanning forest must hold n - c edges");
    debug!(
        accepted = forest.edges.len(),
        components = forest.component_count,
        total_weight = forest.total_weight,
        "spanning forest built"
    );
    Ok(forest)
}
