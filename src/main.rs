//! Shortpath - weighted undirected graphs and Dijkstra shortest paths
//!
//! Loads a graph document (TOML, JSON or YAML edge list) and answers
//! shortest-path queries from the command line.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use shortpath_core::error::{ExitCode as ShortpathExitCode, ShortpathError};
use shortpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if argv_requests_json() => return report_parse_error_json(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(ShortpathExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Turn a clap failure into the JSON error envelope on stderr.
///
/// Help and version output still go through clap.
fn report_parse_error_json(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => ShortpathError::UsageError(err.to_string()),
        _ => ShortpathError::Other(err.to_string()),
    };

    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Raw argv scan for `--format json`, used when clap itself rejected the
/// arguments and `Cli.format` is unavailable.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
