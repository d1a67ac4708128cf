//! Kruskal core library.
//!
//! Minimum spanning forests of undirected integer-weighted graphs, built
//! with Kruskal's algorithm over a path-compressing, rank-merging
//! [`DisjointSet`].

mod disjoint_set;
mod error;
mod generate;
mod graph;
mod mst;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{MstError, MstErrorCode, Result},
    generate::{RANDOM_WEIGHT_RANGE, RandomGraphConfig, random_connected_graph},
    graph::{Edge, Graph, VertexId, Weight},
    mst::{MinimumSpanningForest, kruskal},
};
