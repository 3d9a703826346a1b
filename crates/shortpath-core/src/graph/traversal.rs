use crate::graph::store::Graph;
use crate::graph::types::{Edge, Vertex, VertexId};

/// Trait for providing vertex lookup and adjacency to the solver
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn resolve(&self, label: &str) -> Option<VertexId>;
    fn vertex(&self, id: VertexId) -> Option<&Vertex>;
    fn incident_edges(&self, id: VertexId) -> Vec<&Edge>;
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn resolve(&self, label: &str) -> Option<VertexId> {
        self.vertex(label).map(|v| v.id())
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_by_id(id)
    }

    fn incident_edges(&self, id: VertexId) -> Vec<&Edge> {
        self.edges_of(id).collect()
    }
}
