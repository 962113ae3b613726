/// Run totals for a traversal.
///
/// Filled in by the engine as events are emitted. Frontends use it for the
/// optional summary report and for the process exit code.
use crate::model::TraceEvent;
use crate::scanner::QuoteKind;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    /// Distinct files successfully opened.
    pub files_opened: u64,
    /// Include directives found across all opened files.
    pub includes_found: u64,
    /// Of those, quoted includes.
    pub quoted: u64,
    /// Of those, angle-bracket includes.
    pub angle_bracket: u64,
    /// References to files already visited (not expanded again).
    pub duplicates: u64,
    /// Quoted includes not followed because of the depth limit.
    pub depth_limited: u64,
    /// Open and read errors.
    pub errors: u64,
    /// Deepest include nesting reached (root = 0).
    pub max_depth_reached: usize,
}

impl TraceSummary {
    /// Account for one emitted event.
    pub fn record(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::Found { directive, .. } => {
                self.includes_found += 1;
                match directive.quote_kind {
                    QuoteKind::Quoted => self.quoted += 1,
                    QuoteKind::AngleBracket => self.angle_bracket += 1,
                }
            }
            TraceEvent::Error { .. } => self.errors += 1,
            TraceEvent::Enter { .. } | TraceEvent::Close { .. } => {}
        }
    }

    /// `true` if every reachable file was opened and read in full.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}
