//! Path command
use std::time::Instant;

use crate::cli::{Cli, OutputFormat, PathArgs};
use crate::commands::load::load_graph;
use shortpath_core::error::Result;
use shortpath_core::graph::{PathResult, ShortestPathSolver};
use shortpath_core::trace_time;

/// Execute the path command
pub fn execute(cli: &Cli, args: &PathArgs, start: Instant) -> Result<()> {
    let (graph, options) = load_graph(&args.graph, args.max_cost, start)?;

    let solver = ShortestPathSolver::new(&graph).with_options(options);
    let result = match solver.run(&args.from, &args.to)? {
        Some(path) => path.to_result(),
        None => PathResult::not_found(&args.from, &args.to),
    };
    trace_time!(start, "solve", found = result.found);

    output_path(cli, &result)
}

/// Print a path result in the selected format
pub fn output_path(cli: &Cli, result: &PathResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Human => output_path_human(cli, result),
        OutputFormat::Records => {
            for line in path_records(result) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn output_path_human(cli: &Cli, result: &PathResult) {
    if !result.found {
        if !cli.quiet {
            println!("No path found from {} to {}", result.from, result.to);
        }
        return;
    }

    println!("{}", result.vertices.join(" -> "));
    if let Some(cost) = result.cost {
        if cli.quiet {
            println!("cost: {}", cost);
        } else {
            let plural = if result.path_length == 1 { "" } else { "s" };
            println!("cost: {} ({} hop{})", cost, result.path_length, plural);
        }
    }
}

/// Records: one header line, then `N` per vertex and `E` per edge on the path
pub fn path_records(result: &PathResult) -> Vec<String> {
    let cost = result
        .cost
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut lines = vec![format!(
        "H shortpath=1 records=1 mode=path from={} to={} found={} length={} cost={}",
        result.from, result.to, result.found, result.path_length, cost
    )];

    if result.found {
        lines.extend(result.vertices.iter().map(|v| format!("N {}", v)));
        lines.extend(
            result
                .links
                .iter()
                .map(|l| format!("E {} {} {}", l.from, l.to, l.weight)),
        );
    }
    lines
}
