//! In-memory graph operations — the core data structure and its algorithms.

pub mod shortest_path;
pub mod simple_graph;
pub mod traversal;

pub use shortest_path::dijkstra;
pub use simple_graph::SimpleGraph;
pub use traversal::{bfs, dfs};
