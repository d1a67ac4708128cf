//! Command-line interface orchestration for the `kruskal` binary.
//!
//! Offers the interactive menu session (the default), a one-shot `random`
//! command, and a `file` command that reads an edge list.

mod commands;
mod input;
mod report;
mod session;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FileArgs, InteractiveArgs, RandomArgs, run_cli,
};
pub use report::{MstReport, render_report};
pub use session::Session;
