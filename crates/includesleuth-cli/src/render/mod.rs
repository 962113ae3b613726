/// Trace renderers — turn events into bytes on stdout as they arrive.
///
/// Every renderer flushes after each event so the stream is usable from a
/// pipe while a large trace is still running. Per-file errors always go to
/// stderr as one text line, whatever the stdout format; the structured
/// formats additionally carry them as records.
pub mod csv;
pub mod json;
pub mod summary;
pub mod text;

pub use summary::write_summary;

use crate::args::OutputFormat;
use includesleuth_core::{TraceEvent, TraceSink};
use std::io::{self, Write};

/// Writes one event in a specific output format.
pub trait Render {
    fn event(&mut self, event: &TraceEvent) -> io::Result<()>;
}

/// Build the renderer for `format`, writing to `out`.
pub fn renderer<'a, W: Write + 'a>(format: OutputFormat, out: W) -> io::Result<Box<dyn Render + 'a>> {
    Ok(match format {
        OutputFormat::Text => Box::new(text::TextRenderer::new(out)),
        OutputFormat::Json => Box::new(json::JsonRenderer::new(out)),
        OutputFormat::Csv => Box::new(csv::CsvRenderer::new(out)?),
    })
}

/// Trace sink that renders to stdout and reports errors on stderr.
pub struct OutputSink<'a, E: Write> {
    renderer: Box<dyn Render + 'a>,
    err: E,
}

impl<'a, E: Write> OutputSink<'a, E> {
    pub fn new(renderer: Box<dyn Render + 'a>, err: E) -> Self {
        Self { renderer, err }
    }

    /// Give back the error stream, e.g. to write a summary after the run.
    pub fn into_err(self) -> E {
        self.err
    }
}

impl<E: Write> TraceSink for OutputSink<'_, E> {
    fn emit(&mut self, event: TraceEvent) -> io::Result<()> {
        if let TraceEvent::Error { error } = &event {
            writeln!(self.err, "{error}")?;
            self.err.flush()?;
        }
        self.renderer.event(&event)
    }
}
