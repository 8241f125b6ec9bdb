//! SimpleGraph — in-memory attributed graph with classic traversal algorithms.
//!
//! Stores labeled nodes and edges in adjacency-list form, in either directed or
//! undirected mode, with open attribute bags on both nodes and edges. Three
//! algorithms are layered on top of the container's read surface: depth-first
//! traversal, breadth-first traversal, and single-source shortest paths
//! (Dijkstra).

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, dfs, dijkstra, SimpleGraph};
pub use types::{AttrValue, Attrs, GraphError, GraphResult};
