//! Error types for the digraph-visit library.

use thiserror::Error;

/// All errors that can occur in the digraph-visit library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A required argument was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Vertex not found by label.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// No edge between the two vertices.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// The operation makes no sense for this graph or result.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The graph changed after a search result was computed from it.
    #[error("Graph modified since the search result was built (revision {expected}, now {found})")]
    ConcurrentModification { expected: u64, found: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// True for the two not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VertexNotFound(_) | Self::EdgeNotFound { .. })
    }
}

/// Convenience result type for digraph-visit operations.
pub type GraphResult<T> = Result<T, GraphError>;
