//! Error types for the SimpleGraph library.

use thiserror::Error;

/// All errors that can occur in the SimpleGraph library.
///
/// The taxonomy is deliberately minimal: every mutation is a total function
/// and every query on an unknown identifier returns an empty default. Only
/// programmer-contract violations surface as errors.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node required by the operation's contract is not in the graph.
    #[error("Node '{0}' not found in graph")]
    NodeNotFound(String),
}

/// Convenience result type for SimpleGraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
