//! Hoproute - first-hop routing tables for weighted directed graphs
//!
//! Loads an edge list, asks for a source vertex, grows the shortest-path
//! tree from it and prints which neighbor of the source to forward through
//! for every destination.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use hoproute_core::error::ExitCode as RouteExitCode;
use hoproute_core::format::OutputFormat;
use hoproute_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            // Help and version are informational, not errors - let clap handle them
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                err.exit()
            }
            _ => {
                let _ = err.print();
                return ExitCode::from(RouteExitCode::Usage as u8);
            }
        },
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();
            if e.is_internal() {
                tracing::error!(error = %e, "routing engine invariant violated");
            }

            if cli.format == Some(OutputFormat::Json) {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
