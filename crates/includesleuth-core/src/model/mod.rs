/// Data model for an include trace.
///
/// Re-exports the event stream types, the deduplication set, and run totals.
pub mod event;
pub mod summary;
pub mod visited;

pub use event::{FileError, TraceEvent};
pub use summary::TraceSummary;
pub use visited::VisitedSet;
