/// IncludeSleuth CLI — argument parsing, output rendering, exit codes.
///
/// Tracing logic lives in `includesleuth-core`; this crate only decides how
/// the event stream is presented.
pub mod args;
pub mod exit;
pub mod render;

pub use args::{Cli, OutputFormat};
pub use exit::CliExitCode;

use anyhow::Context;
use includesleuth_core::{TraceOptions, TraceSummary, Tracer, VisitedSet};
use render::{renderer, write_summary, OutputSink};
use std::io::Write;
use tracing::{debug, info};

/// Run one trace as described by `cli`, writing the trace to `out` and
/// errors (plus the optional summary) to `err`.
///
/// Per-file errors do not fail the call; they are counted in the returned
/// summary. An error is returned only when output could not be written.
pub fn run<W: Write, E: Write>(cli: &Cli, out: W, err: E) -> anyhow::Result<TraceSummary> {
    let options = TraceOptions {
        max_depth: cli.max_depth,
    };
    let tracer = Tracer::new(options);
    let mut visited = VisitedSet::new();

    let renderer = renderer(cli.format, out).context("failed to write trace header")?;
    let mut sink = OutputSink::new(renderer, err);
    let summary = tracer
        .trace(&cli.file, &mut visited, &mut sink)
        .with_context(|| format!("trace of {} aborted", cli.file.display()))?;
    info!("{} distinct files visited", visited.len());
    for path in visited.sorted() {
        debug!("visited {}", path.display());
    }

    if cli.summary {
        write_summary(sink.into_err(), &summary).context("failed to write summary")?;
    }
    Ok(summary)
}
