use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, ShortpathError};
use crate::graph::types::{Edge, EdgeId, Vertex, VertexId, Weight};

/// In-memory undirected weighted graph.
///
/// Vertices are deduplicated by label: inserting an edge whose endpoint label
/// is already known reuses the stored vertex. Every edge is recorded in the
/// incident list of both endpoints so adjacency queries never scan the full
/// edge list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    edges: Vec<Edge>,
    incident: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            incident: Vec::with_capacity(vertex_count),
        }
    }

    /// Return the stored vertex for `label`, inserting it first if unseen.
    fn intern_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(id, label.to_string()));
        self.incident.push(Vec::new());
        self.index.insert(label.to_string(), id);
        id
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Duplicate edges between the same pair are kept as separate edges.
    /// Fails with `InvalidWeight` for negative or non-finite weights; the
    /// graph is left untouched in that case.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<EdgeId> {
        let weight = Weight::new(weight);
        if !weight.is_valid() {
            return Err(ShortpathError::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight: weight.value(),
            });
        }

        let a = self.intern_vertex(a);
        let b = self.intern_vertex(b);
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(id, a, b, weight));

        self.incident[a.0].push(id);
        if a != b {
            self.incident[b.0].push(id);
        }

        tracing::trace!(edge = id.0, weight = weight.value(), "add_edge");
        Ok(id)
    }

    /// Bulk load from an iterator of `(from, to, weight)` triples.
    pub fn from_edges<I, S>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from.as_ref(), to.as_ref(), weight)?;
        }
        Ok(graph)
    }

    /// All stored vertices. Order is insertion order but not part of the contract.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Look up a stored vertex by label.
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index.get(label).map(|id| &self.vertices[id.0])
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// All edges in insertion order.
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to the vertex labelled `label`. Empty for unknown labels.
    pub fn edges(&self, label: &str) -> Vec<&Edge> {
        match self.index.get(label) {
            Some(&id) => self.edges_of(id).collect(),
            None => Vec::new(),
        }
    }

    /// Edges incident to a stored vertex.
    pub fn edges_of(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.incident
            .get(id.0)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |edge_id| &self.edges[edge_id.0])
    }

    /// The stored endpoint of `edge` opposite `vertex`.
    pub fn other_vertex(&self, edge: &Edge, vertex: &Vertex) -> Result<&Vertex> {
        edge.other_vertex(vertex.id())
            .and_then(|id| self.vertex_by_id(id))
            .ok_or_else(|| ShortpathError::NotAnEndpoint {
                edge: self.describe_edge(edge),
                vertex: vertex.label().to_string(),
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Labels of the edge's endpoints in insertion order.
    pub fn endpoint_labels(&self, edge: &Edge) -> (&str, &str) {
        let (a, b) = edge.endpoints();
        (self.label_of(a), self.label_of(b))
    }

    fn label_of(&self, id: VertexId) -> &str {
        self.vertices.get(id.0).map(|v| v.label()).unwrap_or_default()
    }

    fn describe_edge(&self, edge: &Edge) -> String {
        let (a, b) = self.endpoint_labels(edge);
        format!("{}-{}", a, b)
    }
}

/// One `source->destination, weight: N` line per edge, in insertion order.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            let (a, b) = self.endpoint_labels(edge);
            writeln!(f, "{}->{}, weight: {}", a, b, edge.weight())?;
        }
        Ok(())
    }
}
