/// IncludeSleuth Core — include scanning, path resolution, and traversal.
///
/// This crate contains all tracing logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, editor
/// integrations, tests).
///
/// # Modules
///
/// - [`model`] — Trace events, per-file errors, the visited set, and run totals.
/// - [`scanner`] — Line reading and `#include` directive recognition.
/// - [`resolver`] — Quoted-include path resolution relative to the including file.
/// - [`tracer`] — Depth-first traversal engine and trace sinks.
pub mod model;
pub mod resolver;
pub mod scanner;
pub mod tracer;

pub use model::{FileError, TraceEvent, TraceSummary, VisitedSet};
pub use scanner::{scan_line, IncludeDirective, QuoteKind};
pub use tracer::{TraceError, TraceOptions, TraceSink, Tracer};
