//! Support library for the `kruskal` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests can
//! drive the interactive session with in-memory streams instead of a
//! subprocess.

pub mod cli;
pub mod logging;
