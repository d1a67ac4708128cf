//! The interactive menu loop.
//!
//! Each round asks for a manually entered or randomly generated graph,
//! prints the spanning forest report, and asks whether to go again.
//! Malformed answers are reported and the same field is asked for again;
//! the session ends on `n`/`N` or when the input is exhausted.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use kruskal_core::{Graph, RandomGraphConfig};
use tracing::{debug, info, warn};

use super::CliError;
use super::input::{Parsed, TokenReader};
use super::report::{MstReport, render_report};

const MENU_PROMPT: &str =
    "Enter 1 to manually input the graph, or 2 to generate a random graph: ";
const MENU_RETRY: &str = "Invalid input. Please enter 1 or 2.";
const MENU_INVALID_OPTION: &str = "Invalid option. Please enter 1 or 2.";
const COUNT_RETRY: &str = "Invalid input. Please enter a non-negative integer.";
const TRIPLE_RETRY: &str = "Invalid input. Please enter three integers.";
const CONTINUE_PROMPT: &str = "Do you want to continue? (y/n): ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MenuOption {
    Manual,
    Random,
}

/// An interactive session over arbitrary input and output streams.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use kruskal_cli::cli::Session;
///
/// let input = Cursor::new("1\n2 1\n0 1 4\nn\n");
/// let mut output = Vec::new();
/// let rounds = Session::new(input, &mut output).run()?;
/// assert_eq!(rounds, 1);
/// assert!(String::from_utf8_lossy(&output).contains("0 -- 1 == 4"));
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    seed: Option<u64>,
    rounds: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing prompts
    /// and reports to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            seed: None,
            rounds: 0,
        }
    }

    /// Seeds random graph generation. Round `k` uses `seed + k`.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Runs the menu loop until the user declines to continue or the input
    /// ends, returning the number of completed rounds.
    ///
    /// A round whose computation fails prints the error and moves on to the
    /// continue prompt without counting as completed.
    ///
    /// # Errors
    /// Returns [`CliError::Stream`] when the streams fail.
    pub fn run(mut self) -> Result<u64, CliError> {
        loop {
            let Some(option) = self.read_menu_option()? else {
                break;
            };
            let graph = match option {
                MenuOption::Manual => self.read_manual_graph()?,
                MenuOption::Random => self.read_random_graph()?,
            };
            let Some(graph) = graph else {
                break;
            };

            match MstReport::compute(&graph) {
                Ok(report) => {
                    render_report(&report, &mut self.output)?;
                    self.rounds += 1;
                }
                Err(err) => {
                    warn!(error = %err, code = err.code().as_str(), "round failed");
                    writeln!(self.output, "Error: {err}.")?;
                }
            }

            if !self.read_continue()? {
                break;
            }
        }
        info!(rounds = self.rounds, "session finished");
        Ok(self.rounds)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn retry(&mut self, token: &str, message: &str) -> io::Result<()> {
        debug!(token, "malformed input");
        self.input.discard_line();
        writeln!(self.output, "{message}")
    }

    fn read_field<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<Option<T>, CliError> {
        loop {
            self.prompt(prompt)?;
            match self.input.next_parsed()? {
                Parsed::Value(value) => return Ok(Some(value)),
                Parsed::Malformed(token) => self.retry(&token, retry)?,
                Parsed::Exhausted => return Ok(None),
            }
        }
    }

    fn read_menu_option(&mut self) -> Result<Option<MenuOption>, CliError> {
        loop {
            let Some(option) = self.read_field::<i64>(MENU_PROMPT, MENU_RETRY)? else {
                return Ok(None);
            };
            match option {
                1 => return Ok(Some(MenuOption::Manual)),
                2 => return Ok(Some(MenuOption::Random)),
                other => {
                    warn!(option = other, "invalid menu option");
                    writeln!(self.output, "{MENU_INVALID_OPTION}")?;
                }
            }
        }
    }

    fn read_manual_graph(&mut self) -> Result<Option<Graph>, CliError> {
        let Some(vertex_count) = self.read_field("Enter the number of vertices: ", COUNT_RETRY)?
        else {
            return Ok(None);
        };
        let Some(edge_count) = self.read_field::<usize>("Enter the number of edges: ", COUNT_RETRY)?
        else {
            return Ok(None);
        };

        let mut graph = Graph::new(vertex_count);
        writeln!(self.output, "Enter the edges (u, v, weight):")?;
        for _ in 0..edge_count {
            let Some((u, v, weight)) = self.read_triple()? else {
                return Ok(None);
            };
            match graph.add_signed_edge(u, v, weight) {
                Ok(()) if weight < 0 => {
                    writeln!(self.output, "Warning: negative weight: {weight}.")?;
                }
                Ok(()) => {}
                Err(err) => writeln!(self.output, "Skipping {err}.")?,
            }
        }
        Ok(Some(graph))
    }

    fn read_triple(&mut self) -> Result<Option<(i64, i64, i64)>, CliError> {
        'triple: loop {
            let mut values = [0_i64; 3];
            for slot in &mut values {
                match self.input.next_parsed()? {
                    Parsed::Value(value) => *slot = value,
                    Parsed::Malformed(token) => {
                        self.retry(&token, TRIPLE_RETRY)?;
                        continue 'triple;
                    }
                    Parsed::Exhausted => return Ok(None),
                }
            }
            let [u, v, weight] = values;
            return Ok(Some((u, v, weight)));
        }
    }

    fn read_random_graph(&mut self) -> Result<Option<Graph>, CliError> {
        let Some(vertex_count) = self.read_field("Enter the number of vertices: ", COUNT_RETRY)?
        else {
            return Ok(None);
        };
        let mut config = RandomGraphConfig::new(vertex_count);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(self.rounds));
        }
        let graph = config.generate();
        // The first `n - 1` edges form the spanning tree; the rest are extras.
        for edge in graph.edges().iter().skip(vertex_count.saturating_sub(1)) {
            writeln!(
                self.output,
                "Added edge: {} -- {} == {}",
                edge.u(),
                edge.v(),
                edge.weight()
            )?;
        }
        Ok(Some(graph))
    }

    fn read_continue(&mut self) -> Result<bool, CliError> {
        self.prompt(CONTINUE_PROMPT)?;
        let answer = self.input.next_token()?;
        self.input.discard_line();
        Ok(match answer {
            None => false,
            Some(token) => !token.starts_with(['n', 'N']),
        })
    }
}
