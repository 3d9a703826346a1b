//! Path reconstruction from a solver's predecessor table

use crate::graph::algos::dijkstra::VertexCost;
use crate::graph::types::{Edge, Vertex, VertexId};
use crate::graph::GraphProvider;

/// Link back to the vertex a best-known path arrived from.
///
/// Lives only in the per-solve table, never in the graph.
#[derive(Debug, Clone, Copy)]
pub struct Predecessor<'g> {
    pub vertex: VertexId,
    pub edge: &'g Edge,
}

/// Walk predecessors from `end` back to `start` and return the path in
/// traversal order. `None` if the chain does not lead back to `start`.
pub(crate) fn reconstruct_path<'g>(
    provider: &'g dyn GraphProvider,
    table: &[VertexCost<'g>],
    start: VertexId,
    end: VertexId,
) -> Option<(Vec<&'g Vertex>, Vec<&'g Edge>)> {
    let mut vertices = vec![provider.vertex(end)?];
    let mut edges = Vec::new();
    let mut current = end;

    while current != start {
        // A chain longer than the table would mean a cycle
        if edges.len() >= table.len() {
            return None;
        }
        let pred = table.get(current.index())?.previous?;
        edges.push(pred.edge);
        vertices.push(provider.vertex(pred.vertex)?);
        current = pred.vertex;
    }

    vertices.reverse();
    edges.reverse();
    Some((vertices, edges))
}
