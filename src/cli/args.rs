use super::parse::parse_max_cost;
use clap::Args;
use std::path::PathBuf;

/// Graph document selection shared by graph-reading commands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.toml, .json, .yaml)
    #[arg(long, short = 'g', env = "SHORTPATH_GRAPH")]
    pub graph: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start vertex label
    pub from: String,

    /// End vertex label
    pub to: String,

    /// Give up on paths costing more than this (overrides solver.max_cost)
    #[arg(long, value_parser = parse_max_cost)]
    pub max_cost: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct DistancesArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Source vertex label
    pub from: String,

    /// Only report vertices within this cost (overrides solver.max_cost)
    #[arg(long, value_parser = parse_max_cost)]
    pub max_cost: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct DumpArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}
