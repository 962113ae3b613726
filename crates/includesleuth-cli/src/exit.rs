//! Process exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Every reachable file was opened and read |
//! | 1 | At least one file could not be opened or read (trace still complete) |
//! | 2 | Usage error (reported by clap) |
//! | 3 | The trace output could not be written |

use includesleuth_core::TraceSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliExitCode {
    Success = 0,
    TraceErrors = 1,
    Usage = 2,
    OutputFailed = 3,
}

impl CliExitCode {
    pub fn from_summary(summary: &TraceSummary) -> Self {
        if summary.is_clean() {
            Self::Success
        } else {
            Self::TraceErrors
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<CliExitCode> for std::process::ExitCode {
    fn from(code: CliExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
