//! Benchmark support crate for kruskal.
//!
//! Provides seeded graph workloads and parameter types used by the Criterion
//! benchmarks for the disjoint-set forest and the spanning forest builder.

pub mod error;
pub mod params;
pub mod source;
