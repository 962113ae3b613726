/// Trace events — the ordered output of a traversal.
///
/// Events are handed to a [`TraceSink`](crate::tracer::TraceSink) the moment
/// they are produced; nothing is buffered inside the engine. The order of
/// events on the sink is the diagnostic payload.
use crate::scanner::IncludeDirective;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A per-file failure. Never aborts the run; it only prunes the subtree
/// below the affected file.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file is missing or unreadable. Nothing beneath it is traced.
    #[error("Error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading failed part-way through. Directives read before the failure
    /// are still followed and the file is closed at the point of failure.
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => source,
        }
    }

    /// Stable short label for structured output.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Read { .. } => "read",
        }
    }
}

/// One atomic step of the traversal.
#[derive(Debug)]
pub enum TraceEvent {
    /// A file is being processed. Emitted for every reference, including
    /// duplicates that are not expanded again.
    Enter { path: PathBuf },
    /// An include directive was found in `path`.
    Found {
        path: PathBuf,
        /// 1-based line number of the directive.
        line_no: usize,
        directive: IncludeDirective,
    },
    /// Every directive of `path` has been processed.
    Close { path: PathBuf },
    /// `path` could not be opened or fully read.
    Error { error: FileError },
}

impl TraceEvent {
    /// The file this event refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Enter { path } | Self::Found { path, .. } | Self::Close { path } => path,
            Self::Error { error } => error.path(),
        }
    }

    /// Stable short label for structured output.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Enter { .. } => "enter",
            Self::Found { .. } => "found",
            Self::Close { .. } => "close",
            Self::Error { .. } => "error",
        }
    }
}
