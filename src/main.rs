//! IncludeSleuth — traces `#include` directives to diagnose header ordering.
//!
//! Thin binary entry point. All logic lives in the `includesleuth-core`
//! and `includesleuth-cli` crates.

use clap::Parser;
use includesleuth_cli::{Cli, CliExitCode};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                CliExitCode::Usage.into()
            } else {
                CliExitCode::Success.into()
            };
        }
    };

    // Initialise structured logging on stderr so it never mixes with the
    // trace on stdout. RUST_LOG applies when no -v flag is given.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("IncludeSleuth starting");

    match includesleuth_cli::run(&cli, io::stdout().lock(), io::stderr()) {
        Ok(summary) => CliExitCode::from_summary(&summary).into(),
        Err(err) => {
            eprintln!("includesleuth: {err:#}");
            CliExitCode::OutputFailed.into()
        }
    }
}
