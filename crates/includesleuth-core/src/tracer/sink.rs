/// Trace sinks — where events go the moment they are produced.
use crate::model::TraceEvent;
use std::io;

/// Receives trace events in traversal order.
///
/// Returning an error aborts the traversal. Per-file problems are events,
/// not sink errors.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent) -> io::Result<()>;
}

/// Collects every event in memory. Mostly useful in tests.
impl TraceSink for Vec<TraceEvent> {
    fn emit(&mut self, event: TraceEvent) -> io::Result<()> {
        self.push(event);
        Ok(())
    }
}
