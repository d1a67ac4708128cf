//! Command-line parsing and dispatch for the `kruskal` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use kruskal_core::{Graph, MstError, RandomGraphConfig};
use thiserror::Error;
use tracing::{info, instrument};

use super::input::{Parsed, TokenReader};
use super::report::{MstReport, render_report};
use super::session::Session;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute; defaults to the interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the interactive menu.
    Interactive(InteractiveArgs),
    /// Generate one random connected graph and report its MST.
    Random(RandomArgs),
    /// Read `n m` followed by `m` triples `u v weight` from a file.
    File(FileArgs),
}

/// Options accepted by the `interactive` command.
#[derive(Debug, Args, Clone, Default)]
pub struct InteractiveArgs {
    /// Seed for randomly generated graphs.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `random` command.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of vertices in the generated graph.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Seed for the generator; system entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `file` command.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to a whitespace-separated edge list.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an input file failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading input or writing output failed.
    #[error("console stream failed: {0}")]
    Stream(#[from] io::Error),
    /// A file contained a token that is not a valid value for its field.
    #[error("expected {field}, found `{token}`")]
    MalformedInput {
        /// Name of the field being read.
        field: &'static str,
        /// Offending token.
        token: String,
    },
    /// A file ended before all fields were read.
    #[error("input ended while reading {field}")]
    UnexpectedEof {
        /// Name of the field being read.
        field: &'static str,
    },
    /// The spanning forest computation failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// The interactive session ended after this many completed rounds.
    Session {
        /// Number of reports printed.
        rounds: u64,
    },
    /// A single non-interactive computation.
    Single(MstReport),
}

/// Executes `cli`, reading interactive answers from `input` and writing
/// prompts and reports to `output`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or computing fails.
///
/// # Examples
/// ```
/// # use kruskal_cli::cli::{Cli, Command, ExecutionSummary, RandomArgs, run_cli};
/// let cli = Cli {
///     command: Some(Command::Random(RandomArgs { vertices: 6, seed: Some(1) })),
/// };
/// let mut output = Vec::new();
/// let summary = run_cli(cli, std::io::empty(), &mut output)?;
/// let ExecutionSummary::Single(report) = summary else {
///     panic!("random runs produce one report");
/// };
/// assert!(report.forest.is_tree());
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
pub fn run_cli(
    cli: Cli,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        None => run_interactive(&InteractiveArgs::default(), input, output),
        Some(Command::Interactive(args)) => run_interactive(&args, input, output),
        Some(Command::Random(args)) => {
            let report = run_random(&args)?;
            render_report(&report, &mut output)?;
            Ok(ExecutionSummary::Single(report))
        }
        Some(Command::File(args)) => {
            let report = run_file(&args.path)?;
            render_report(&report, &mut output)?;
            Ok(ExecutionSummary::Single(report))
        }
    }
}

fn run_interactive(
    args: &InteractiveArgs,
    input: impl BufRead,
    output: impl Write,
) -> Result<ExecutionSummary, CliError> {
    let rounds = Session::new(input, output).with_seed(args.seed).run()?;
    Ok(ExecutionSummary::Session { rounds })
}

#[instrument(name = "cli.random", skip_all, fields(vertices = args.vertices, seed = ?args.seed))]
fn run_random(args: &RandomArgs) -> Result<MstReport, CliError> {
    let mut config = RandomGraphConfig::new(args.vertices);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(MstReport::compute(&config.generate())?)
}

#[instrument(name = "cli.file", skip_all, fields(path = %path.display()))]
fn run_file(path: &Path) -> Result<MstReport, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_edge_list(BufReader::new(file))?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(MstReport::compute(&graph)?)
}

/// Parses `n m` followed by `m` triples. Edges with endpoints outside the
/// graph are logged and skipped.
pub(crate) fn read_edge_list(reader: impl BufRead) -> Result<Graph, CliError> {
    let mut tokens = TokenReader::new(reader);
    let vertex_count = expect_field(&mut tokens, "vertex count")?;
    let edge_count: usize = expect_field(&mut tokens, "edge count")?;

    let mut graph = Graph::new(vertex_count);
    for _ in 0..edge_count {
        let u = expect_field(&mut tokens, "edge endpoint")?;
        let v = expect_field(&mut tokens, "edge endpoint")?;
        let weight = expect_field(&mut tokens, "edge weight")?;
        // Out-of-range edges are dropped; `add_signed_edge` logs them.
        let _ = graph.add_signed_edge(u, v, weight);
    }
    Ok(graph)
}

fn expect_field<T: FromStr>(
    tokens: &mut TokenReader<impl BufRead>,
    field: &'static str,
) -> Result<T, CliError> {
    match tokens.next_parsed()? {
        Parsed::Value(value) => Ok(value),
        Parsed::Malformed(token) => Err(CliError::MalformedInput { field, token }),
        Parsed::Exhausted => Err(CliError::UnexpectedEof { field }),
    }
}
