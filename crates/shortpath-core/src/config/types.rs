//! Graph document type definitions

use serde::{Deserialize, Serialize};

/// A graph definition file: solver settings plus an edge list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Solver settings
    #[serde(default, skip_serializing_if = "SolverConfig::is_default")]
    pub solver: SolverConfig,

    /// Undirected edges, in insertion order
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Solver section of a graph document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Upper bound on path cost (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost: Option<f64>,
}

impl SolverConfig {
    fn is_default(&self) -> bool {
        self == &SolverConfig::default()
    }
}

/// One `[[edges]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension, defaulting to TOML.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Toml,
        }
    }
}
