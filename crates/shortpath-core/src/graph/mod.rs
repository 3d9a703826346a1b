//! Weighted undirected graph and shortest-path search
//!
//! - `store`: vertex/edge storage with label deduplication
//! - `traversal`: the provider trait the solver reads through
//! - `algos`: Dijkstra solver and path reconstruction

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{ShortestPath, ShortestPathSolver, SolverOptions};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{
    Edge, EdgeId, PathLink, PathResult, SearchStats, Vertex, VertexDistance, VertexId, Weight,
};
