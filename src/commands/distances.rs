//! Distances command
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, DistancesArgs, OutputFormat};
use crate::commands::load::load_graph;
use shortpath_core::error::Result;
use shortpath_core::graph::{ShortestPathSolver, VertexDistance};
use shortpath_core::trace_time;

#[derive(Debug, Serialize)]
struct DistancesOutput<'a> {
    from: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_cost: Option<f64>,
    distances: &'a [VertexDistance],
}

/// Execute the distances command
pub fn execute(cli: &Cli, args: &DistancesArgs, start: Instant) -> Result<()> {
    let (graph, options) = load_graph(&args.graph, args.max_cost, start)?;

    let solver = ShortestPathSolver::new(&graph).with_options(options);
    let distances = solver.costs_from(&args.from)?;
    trace_time!(start, "solve", reachable = distances.len());

    match cli.format {
        OutputFormat::Json => {
            let output = DistancesOutput {
                from: &args.from,
                max_cost: options.max_cost.map(|w| w.value()),
                distances: &distances,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for entry in &distances {
                match &entry.previous {
                    Some(prev) if !cli.quiet => {
                        println!("{}: {} (via {})", entry.vertex, entry.cost, prev)
                    }
                    _ => println!("{}: {}", entry.vertex, entry.cost),
                }
            }
        }
        OutputFormat::Records => {
            for line in distance_records(&args.from, &distances) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Records: header, then `D vertex cost previous` (`-` for the source)
fn distance_records(from: &str, distances: &[VertexDistance]) -> Vec<String> {
    let mut lines = vec![format!(
        "H shortpath=1 records=1 mode=distances from={} count={}",
        from,
        distances.len()
    )];
    lines.extend(distances.iter().map(|d| {
        format!(
            "D {} {} {}",
            d.vertex,
            d.cost,
            d.previous.as_deref().unwrap_or("-")
        )
    }));
    lines
}
