/// Command-line arguments.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Trace #include directives through C/C++ sources.
///
/// Prints every file as it is processed, every include found in it, and
/// when it is closed, in depth-first include order. Only quoted includes
/// are followed; they are resolved next to the including file.
#[derive(Debug, Parser)]
#[command(name = "includesleuth")]
#[command(version)]
pub struct Cli {
    /// Root source file to trace
    pub file: PathBuf,

    /// Output format for the trace stream
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not follow quoted includes deeper than this many levels below the root
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print run totals to stderr after the trace
    #[arg(long)]
    pub summary: bool,

    /// Verbosity level for diagnostic logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines: Processing / Found include / Closing
    Text,
    /// One JSON object per event
    Json,
    /// CSV with a header row
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["includesleuth", "main.cpp"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("main.cpp"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.max_depth, None);
        assert!(!cli.summary);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "includesleuth",
            "--format",
            "json",
            "--max-depth",
            "2",
            "--summary",
            "-vv",
            "src/main.c",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_depth, Some(2));
        assert!(cli.summary);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        let err = Cli::try_parse_from(["includesleuth"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }
}
