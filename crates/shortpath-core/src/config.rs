//! Graph documents
//!
//! A graph is described by a TOML, JSON or YAML file holding an optional
//! `[solver]` section and a list of `[[edges]]`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, ShortpathError};
use crate::graph::{Graph, SolverOptions, Weight};

pub use types::{DocumentFormat, EdgeSpec, GraphDocument, SolverConfig};

impl GraphDocument {
    /// Load a graph document, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShortpathError::invalid_graph_file(path, e))?;
        let doc = Self::parse(&content, DocumentFormat::from_path(path))
            .map_err(|e| ShortpathError::invalid_graph_file(path, e))?;
        doc.solver_options()
            .map_err(|e| ShortpathError::invalid_graph_file(path, e))?;

        tracing::debug!(path = %path.display(), edges = doc.edges.len(), "load_graph_document");
        Ok(doc)
    }

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let doc = match format {
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(doc)
    }

    /// Build the graph. Fails on the first edge with an invalid weight.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::with_capacity(self.edges.len() * 2, self.edges.len());
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    pub fn solver_options(&self) -> Result<SolverOptions> {
        let max_cost = match self.solver.max_cost {
            Some(value) => {
                let bound = Weight::new(value);
                if !bound.is_valid() {
                    return Err(ShortpathError::UsageError(format!(
                        "solver.max_cost must be finite and non-negative, got {}",
                        value
                    )));
                }
                Some(bound)
            }
            None => None,
        };
        Ok(SolverOptions { max_cost })
    }

    /// Export a graph's edge list as a document.
    pub fn from_graph(graph: &Graph) -> Self {
        let edges = graph
            .all_edges()
            .iter()
            .map(|edge| {
                let (from, to) = graph.endpoint_labels(edge);
                EdgeSpec {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight: edge.weight().value(),
                }
            })
            .collect();
        GraphDocument {
            solver: SolverConfig::default(),
            edges,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ShortpathError::Other(e.to_string()))
    }
}
