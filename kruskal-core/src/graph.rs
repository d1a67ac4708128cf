//! Undirected weighted graph value types.
//!
//! A [`Graph`] owns a vertex count and an insertion-ordered list of
//! [`Edge`]s. Endpoints are validated on insertion; duplicates and
//! self-loops are kept as given.

use tracing::warn;

use crate::{MstError, Result};

/// Identifier of a vertex in `0..vertex_count`.
pub type VertexId = usize;

/// Integer edge weight. Negative values are allowed.
pub type Weight = i64;

/// A weighted undirected connection between two vertices.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge. Endpoints are only checked when the edge is added to a
    /// [`Graph`].
    #[must_use]
    pub const fn new(u: VertexId, v: VertexId, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> VertexId { self.u }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> VertexId { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// An undirected multigraph over `0..vertex_count`.
///
/// # Examples
/// ```
/// use kruskal_core::{Graph, MstError};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, -2)?;
/// assert!(matches!(
///     graph.add_edge(2, 3, 1),
///     Err(MstError::InvalidEdge { .. })
/// ));
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), MstError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `edges`, discarding any edge with an endpoint
    /// outside the graph.
    ///
    /// Rejected edges are logged at `warn`, matching [`Graph::add_edge`].
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            // Rejections are already logged by `add_edge`.
            let _ = graph.add_edge(edge.u, edge.v, edge.weight);
        }
        graph
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the accepted edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Appends the edge `u -- v` with the given weight.
    ///
    /// Negative weights are accepted with a warning.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidEdge`] when either endpoint is not below
    /// [`vertex_count`](Self::vertex_count); the graph is left unchanged.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        if u >= self.vertex_count || v >= self.vertex_count {
            return Err(self.reject(signed(u), signed(v)));
        }
        self.push(Edge::new(u, v, weight));
        Ok(())
    }

    /// Appends an edge whose endpoints come from untrusted signed input.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidEdge`] when either endpoint is negative or
    /// not below [`vertex_count`](Self::vertex_count).
    pub fn add_signed_edge(&mut self, u: i64, v: i64, weight: Weight) -> Result<()> {
        match (VertexId::try_from(u), VertexId::try_from(v)) {
            (Ok(left), Ok(right)) if left < self.vertex_count && right < self.vertex_count => {
                self.push(Edge::new(left, right, weight));
                Ok(())
            }
            _ => Err(self.reject(i128::from(u), i128::from(v))),
        }
    }

    /// Appends an edge whose endpoints the caller has already bounded.
    pub(crate) fn push_valid(&mut self, edge: Edge) {
        debug_assert!(edge.u < self.vertex_count && edge.v < self.vertex_count);
        self.push(edge);
    }

    fn push(&mut self, edge: Edge) {
        if edge.weight < 0 {
            warn!(
                u = edge.u,
                v = edge.v,
                weight = edge.weight,
                "negative edge weight accepted"
            );
        }
        self.edges.push(edge);
    }

    fn reject(&self, u: i128, v: i128) -> MstError {
        warn!(
            u,
            v,
            vertex_count = self.vertex_count,
            "invalid edge discarded"
        );
        MstError::InvalidEdge {
            u,
            v,
            vertex_count: self.vertex_count,
        }
    }
}

// Lossless on every target whose `usize` is at most 64 bits wide.
fn signed(vertex: VertexId) -> i128 {
    i128::try_from(vertex).unwrap_or(i128::MAX)
}
