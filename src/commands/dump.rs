//! Dump command
use std::time::Instant;

use crate::cli::{Cli, DumpArgs, OutputFormat};
use crate::commands::load::load_graph;
use shortpath_core::config::GraphDocument;
use shortpath_core::error::Result;
use shortpath_core::graph::Graph;

/// Execute the dump command
pub fn execute(cli: &Cli, args: &DumpArgs, start: Instant) -> Result<()> {
    let (graph, _) = load_graph(&args.graph, None, start)?;
    output_graph(cli, &graph)
}

/// Print a graph's edge list in the selected format
pub fn output_graph(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let doc = GraphDocument::from_graph(graph);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Human => print!("{}", graph),
        OutputFormat::Records => {
            for line in graph_records(graph) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Records: header, then `E from to weight` per edge in insertion order
pub fn graph_records(graph: &Graph) -> Vec<String> {
    let mut lines = vec![format!(
        "H shortpath=1 records=1 mode=dump vertices={} edges={}",
        graph.vertex_count(),
        graph.edge_count()
    )];
    lines.extend(graph.all_edges().iter().map(|edge| {
        let (from, to) = graph.endpoint_labels(edge);
        format!("E {} {} {}", from, to, edge.weight())
    }));
    lines
}
