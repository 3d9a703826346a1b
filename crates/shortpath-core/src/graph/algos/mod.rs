//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted shortest paths and single-source costs
//! - `path`: predecessor-chain reconstruction shared by the solver

pub mod dijkstra;
pub mod path;

pub use dijkstra::{HeapEntry, ShortestPath, ShortestPathSolver, SolverOptions};
pub use path::Predecessor;
