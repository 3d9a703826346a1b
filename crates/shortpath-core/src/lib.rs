//! Shortpath Core Library
//!
//! Weighted undirected graph storage and a Dijkstra shortest-path solver,
//! plus the graph document format, error taxonomy and logging setup shared
//! with the `shortpath` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
