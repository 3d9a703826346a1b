//! Graph document loading shared by the graph-reading commands

use std::time::Instant;

use crate::cli::GraphArgs;
use shortpath_core::config::GraphDocument;
use shortpath_core::error::Result;
use shortpath_core::graph::{Graph, SolverOptions, Weight};
use shortpath_core::trace_time;

/// Load the graph document and build the graph plus solver options.
///
/// A `--max-cost` flag takes precedence over the document's `solver.max_cost`.
pub fn load_graph(
    args: &GraphArgs,
    max_cost: Option<f64>,
    start: Instant,
) -> Result<(Graph, SolverOptions)> {
    let doc = GraphDocument::load(&args.graph)?;
    let mut options = doc.solver_options()?;
    if let Some(bound) = max_cost {
        options.max_cost = Some(Weight::new(bound));
    }

    let graph = doc.to_graph()?;
    trace_time!(
        start,
        "load_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    Ok((graph, options))
}
