//! CLI argument parsing for shortpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{DistancesArgs, DumpArgs, GraphArgs, PathArgs};
pub use shortpath_core::format::OutputFormat;
use parse::parse_output_format;

/// Shortpath - weighted undirected graphs and Dijkstra shortest paths
#[derive(Parser, Debug)]
#[command(name = "shortpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `shortpath_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two vertices
    Path(PathArgs),

    /// List the cheapest cost from a vertex to every reachable vertex
    Distances(DistancesArgs),

    /// Print the edge list of a graph document
    Dump(DumpArgs),

    /// Run the solver on the built-in seven-vertex example graph
    Demo,
}
