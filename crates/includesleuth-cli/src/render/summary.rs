/// Run summary, printed to stderr on request.
use includesleuth_core::TraceSummary;
use std::io::{self, Write};

fn plural(n: u64, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Write a short human-readable report of `summary`.
pub fn write_summary<W: Write>(mut out: W, summary: &TraceSummary) -> io::Result<()> {
    writeln!(out, "Summary:")?;
    writeln!(out, "  {} opened", plural(summary.files_opened, "file"))?;
    writeln!(
        out,
        "  {} found ({} quoted, {} angle-bracket)",
        plural(summary.includes_found, "include"),
        summary.quoted,
        summary.angle_bracket
    )?;
    writeln!(
        out,
        "  {} not expanded again",
        plural(summary.duplicates, "repeated reference")
    )?;
    if summary.depth_limited > 0 {
        writeln!(
            out,
            "  {} not followed (depth limit)",
            plural(summary.depth_limited, "include")
        )?;
    }
    writeln!(out, "  {}", plural(summary.errors, "error"))?;
    writeln!(out, "  deepest include level: {}", summary.max_depth_reached)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        let summary = TraceSummary {
            files_opened: 3,
            includes_found: 4,
            quoted: 3,
            angle_bracket: 1,
            duplicates: 1,
            depth_limited: 0,
            errors: 0,
            max_depth_reached: 2,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Summary:\n  3 files opened\n  4 includes found (3 quoted, 1 angle-bracket)\n  \
             1 repeated reference not expanded again\n  0 errors\n  deepest include level: 2\n"
        );
    }

    #[test]
    fn test_depth_limit_line_only_when_used() {
        let summary = TraceSummary {
            depth_limited: 2,
            ..TraceSummary::default()
        };
        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  2 includes not followed (depth limit)\n"));
    }
}
