//! Timing and console rendering of a spanning forest computation.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use kruskal_core::{Graph, MinimumSpanningForest, MstError, kruskal};

/// A computed forest together with the wall-clock time Kruskal took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstReport {
    /// The minimum spanning forest.
    pub forest: MinimumSpanningForest,
    /// Time spent inside [`kruskal`].
    pub elapsed: Duration,
}

impl MstReport {
    /// Runs [`kruskal`] on `graph` and measures how long it took.
    ///
    /// # Errors
    /// Propagates any [`MstError`] raised by the builder.
    pub fn compute(graph: &Graph) -> Result<Self, MstError> {
        let start = Instant::now();
        let forest = kruskal(graph)?;
        let elapsed = start.elapsed();
        Ok(Self { forest, elapsed })
    }
}

/// Renders `report` to `writer` in the console format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{MstReport, render_report};
/// # use kruskal_core::{Edge, Graph};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(2, [Edge::new(0, 1, 7)]);
/// let report = MstReport::compute(&graph)?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("0 -- 1 == 7"));
/// assert!(text.contains("Total weight of MST is 7"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &MstReport, mut writer: impl Write) -> io::Result<()> {
    let forest = &report.forest;
    writeln!(writer, "Edges of MST are")?;
    for edge in forest.edges() {
        writeln!(writer, "{} -- {} == {}", edge.u(), edge.v(), edge.weight())?;
    }
    writeln!(writer, "Total weight of MST is {}", forest.total_weight())?;
    writeln!(
        writer,
        "Time taken: {} microseconds",
        report.elapsed.as_micros()
    )?;
    if forest.is_acyclic() {
        writeln!(writer, "The graph is acyclic.")
    } else {
        writeln!(writer, "The graph is not acyclic.")
    }
}
