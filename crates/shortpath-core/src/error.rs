//! Error types and exit codes for shortpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, invalid weight, bad graph file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the shortpath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid weight, unreadable graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or solving paths
#[derive(Error, Debug)]
pub enum ShortpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown vertex: {label}")]
    UnknownVertex { label: String },

    #[error("no path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    #[error("invalid weight {weight} on edge {from}-{to} (weights must be finite and non-negative)")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { edge: String, vertex: String },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl ShortpathError {
    /// Create an error for a vertex label that is not in the graph
    pub fn unknown_vertex(label: impl Into<String>) -> Self {
        ShortpathError::UnknownVertex {
            label: label.into(),
        }
    }

    /// Create an error for a start/end pair with no connecting path
    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        ShortpathError::NoPathExists {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for a graph document that could not be read or parsed
    pub fn invalid_graph_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ShortpathError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShortpathError::UnknownFormat(_) | ShortpathError::UsageError(_) => ExitCode::Usage,

            ShortpathError::UnknownVertex { .. }
            | ShortpathError::InvalidWeight { .. }
            | ShortpathError::NotAnEndpoint { .. }
            | ShortpathError::InvalidGraphFile { .. } => ExitCode::Data,

            ShortpathError::NoPathExists { .. }
            | ShortpathError::Io(_)
            | ShortpathError::Json(_)
            | ShortpathError::Toml(_)
            | ShortpathError::Yaml(_)
            | ShortpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortpathError::UnknownFormat(_) => "unknown_format",
            ShortpathError::UsageError(_) => "usage_error",
            ShortpathError::UnknownVertex { .. } => "unknown_vertex",
            ShortpathError::NoPathExists { .. } => "no_path_exists",
            ShortpathError::InvalidWeight { .. } => "invalid_weight",
            ShortpathError::NotAnEndpoint { .. } => "not_an_endpoint",
            ShortpathError::InvalidGraphFile { .. } => "invalid_graph_file",
            ShortpathError::Io(_) => "io_error",
            ShortpathError::Json(_) => "json_error",
            ShortpathError::Toml(_) => "toml_error",
            ShortpathError::Yaml(_) => "yaml_error",
            ShortpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for shortpath operations
pub type Result<T> = std::result::Result<T, ShortpathError>;
