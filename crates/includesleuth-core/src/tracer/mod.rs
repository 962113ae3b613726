/// Traversal engine — walks the quoted-include graph depth-first.
///
/// For every file the engine emits `Enter`, then one `Found` per directive
/// in file order, descending into each quoted include before moving on to
/// the next directive, and finally `Close`. Angle-bracket includes are
/// reported but never followed.
///
/// # Explicit work stack
///
/// The walk does not use native recursion. Each open file is a `Frame`
/// holding its already-scanned directives and a cursor into them; descending
/// pushes a frame, finishing a file pops one. Event order is identical to
/// the recursive pre-order walk, but include depth is bounded by heap rather
/// than by the thread's call stack.
///
/// Each file is opened, read to the end, and closed while its frame is being
/// built, so at most one file handle is open at any time.
///
/// # Deduplication
///
/// A path is added to the [`VisitedSet`] before it is opened. A later
/// reference to the same path still emits `Enter`, but nothing else: no
/// second expansion and no second `Close`. This is what terminates cycles.
///
/// The set is keyed by the lexically normalised path, so `./a.h` and `a.h`
/// are one file. Events and `open` use the path as given (the root) or as
/// resolved (children); the root is never rewritten before it is opened.
pub mod sink;

pub use sink::TraceSink;

use crate::model::{FileError, TraceEvent, TraceSummary, VisitedSet};
use crate::resolver::{normalize, resolve_quoted};
use crate::scanner::{scan_reader, LocatedDirective};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a traversal stops before exploring the whole graph.
///
/// Per-file failures are not here: they are reported as
/// [`TraceEvent::Error`] and the walk continues.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The sink rejected an event (e.g. stdout was closed).
    #[error("failed to emit trace event: {0}")]
    Sink(#[from] io::Error),
}

/// Traversal settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceOptions {
    /// Deepest include level that is still opened (root = 0). Quoted
    /// includes found at this depth are reported but not followed.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

/// One file on the work stack.
struct Frame {
    path: PathBuf,
    directives: std::vec::IntoIter<LocatedDirective>,
    /// Read failure to report once the directives read before it are done.
    read_error: Option<io::Error>,
    depth: usize,
}

/// The include traversal engine.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    options: TraceOptions,
}

impl Tracer {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }

    /// Trace `root` and everything it quote-includes, emitting events to
    /// `sink` as they happen.
    ///
    /// `visited` may be shared across several calls to trace multiple roots
    /// without re-expanding files common to them.
    pub fn trace<S: TraceSink>(
        &self,
        root: &Path,
        visited: &mut VisitedSet,
        sink: &mut S,
    ) -> Result<TraceSummary, TraceError> {
        info!("Starting include trace of {}", root.display());

        let mut run = Run {
            sink,
            visited,
            summary: TraceSummary::default(),
        };

        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = run.open(root.to_path_buf(), 0)? {
            stack.push(frame);
        }

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(located) = frame.directives.next() else {
                if let Some(frame) = stack.pop() {
                    run.close(frame)?;
                }
                continue;
            };

            let from = frame.path.clone();
            let depth = frame.depth;
            let child = located
                .directive
                .is_followable()
                .then(|| resolve_quoted(&from, &located.directive.target));

            run.emit(TraceEvent::Found {
                path: from,
                line_no: located.line_no,
                directive: located.directive,
            })?;

            let Some(child) = child else {
                continue;
            };
            if self.options.max_depth.is_some_and(|max| depth >= max) {
                debug!("Depth limit reached, not following {}", child.display());
                run.summary.depth_limited += 1;
                continue;
            }
            if let Some(frame) = run.open(child, depth + 1)? {
                stack.push(frame);
            }
        }

        info!(
            "Include trace complete: {} files, {} includes, {} errors",
            run.summary.files_opened, run.summary.includes_found, run.summary.errors
        );
        Ok(run.summary)
    }
}

/// Mutable state of one traversal.
struct Run<'a, S: TraceSink> {
    sink: &'a mut S,
    visited: &'a mut VisitedSet,
    summary: TraceSummary,
}

impl<S: TraceSink> Run<'_, S> {
    fn emit(&mut self, event: TraceEvent) -> Result<(), TraceError> {
        self.summary.record(&event);
        self.sink.emit(event)?;
        Ok(())
    }

    /// Enter `path`: announce it, dedupe, then open and scan it.
    ///
    /// Returns `None` when there is nothing to descend into (already
    /// visited, or could not be opened).
    fn open(&mut self, path: PathBuf, depth: usize) -> Result<Option<Frame>, TraceError> {
        self.emit(TraceEvent::Enter { path: path.clone() })?;

        if !self.visited.insert(&normalize(&path)) {
            debug!("Already visited {}, not expanding again", path.display());
            self.summary.duplicates += 1;
            return Ok(None);
        }

        let file = match File::open(&path) {
            Ok(f) => f,
            Err(source) => {
                debug!("Cannot open {}: {source}", path.display());
                self.emit(TraceEvent::Error {
                    error: FileError::Open { path, source },
                })?;
                return Ok(None);
            }
        };

        // The handle is dropped when `scan_reader` returns.
        let outcome = scan_reader(BufReader::new(file));
        self.summary.files_opened += 1;
        self.summary.max_depth_reached = self.summary.max_depth_reached.max(depth);
        debug!(
            "Scanned {} ({} lines, {} directives)",
            path.display(),
            outcome.lines_read,
            outcome.directives.len()
        );

        Ok(Some(Frame {
            path,
            directives: outcome.directives.into_iter(),
            read_error: outcome.read_error,
            depth,
        }))
    }

    fn close(&mut self, frame: Frame) -> Result<(), TraceError> {
        if let Some(source) = frame.read_error {
            self.emit(TraceEvent::Error {
                error: FileError::Read {
                    path: frame.path.clone(),
                    source,
                },
            })?;
        }
        self.emit(TraceEvent::Close { path: frame.path })
    }
}
