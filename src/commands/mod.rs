//! CLI commands for shortpath

pub mod demo;
pub mod dispatch;
pub mod distances;
pub mod dump;
pub mod load;
pub mod path;
