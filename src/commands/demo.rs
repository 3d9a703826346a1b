//! Demo command: the classic seven-vertex example graph
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dump::{graph_records, output_graph};
use crate::commands::path::{output_path, path_records};
use shortpath_core::error::Result;
use shortpath_core::graph::{Graph, ShortestPathSolver};

const DEMO_EDGES: [(&str, &str, f64); 12] = [
    ("A", "B", 4.0),
    ("A", "C", 3.0),
    ("A", "E", 7.0),
    ("B", "C", 6.0),
    ("C", "E", 8.0),
    ("B", "D", 5.0),
    ("C", "D", 11.0),
    ("E", "D", 2.0),
    ("D", "G", 10.0),
    ("E", "G", 5.0),
    ("D", "F", 2.0),
    ("G", "F", 3.0),
];

const DEMO_FROM: &str = "A";
const DEMO_TO: &str = "F";

pub fn demo_graph() -> Result<Graph> {
    Graph::from_edges(DEMO_EDGES)
}

/// Execute the demo command
pub fn execute(cli: &Cli) -> Result<()> {
    let graph = demo_graph()?;
    let result = ShortestPathSolver::new(&graph)
        .find_path(DEMO_FROM, DEMO_TO)?
        .to_result();

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "graph": shortpath_core::config::GraphDocument::from_graph(&graph),
                "path": result,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            for line in graph_records(&graph).into_iter().chain(path_records(&result)) {
                println!("{}", line);
            }
        }
        OutputFormat::Human => {
            output_graph(cli, &graph)?;
            println!();
            output_path(cli, &result)?;
        }
    }

    Ok(())
}
