/// Scanner module — finds `#include` directives in source text.
///
/// Scanning is split in two layers:
/// - [`lines`] reads raw bytes line by line, tolerating non-UTF-8 content.
/// - [`directive`] decides whether a single line is an include directive.
///
/// [`scan_reader`] combines both and collects every directive of one file
/// so the caller can release the file handle before descending into any
/// of the includes.
pub mod directive;
pub mod lines;

pub use directive::{scan_line, IncludeDirective, QuoteKind};
pub use lines::LineReader;

use std::io::{self, BufRead};

/// A directive together with the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedDirective {
    pub line_no: usize,
    pub directive: IncludeDirective,
}

/// Result of scanning one file from start to end (or to the first read failure).
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Directives in file order, up to the point where reading stopped.
    pub directives: Vec<LocatedDirective>,
    /// Number of lines successfully read.
    pub lines_read: usize,
    /// Set when reading failed part-way through the file.
    pub read_error: Option<io::Error>,
}

/// Scan every line of `reader`, collecting include directives in order.
///
/// A read error ends the scan; everything recognised before it is kept.
pub fn scan_reader<R: BufRead>(reader: R) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for line in LineReader::new(reader) {
        match line {
            Ok(text) => {
                outcome.lines_read += 1;
                if let Some(directive) = scan_line(&text) {
                    outcome.directives.push(LocatedDirective {
                        line_no: outcome.lines_read,
                        directive,
                    });
                }
            }
            Err(err) => {
                outcome.read_error = Some(err);
                break;
            }
        }
    }
    outcome
}
