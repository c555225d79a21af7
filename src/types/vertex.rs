//! Vertex identity.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};

/// A graph vertex, identified by its label alone.
///
/// Two vertices with the same label are the same vertex, whichever graph
/// they were created for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Create a vertex. Panics on an empty label; use [`Vertex::try_new`]
    /// for untrusted input.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        assert!(!label.is_empty(), "vertex label must not be empty");
        Self { label }
    }

    /// Create a vertex, rejecting empty labels.
    pub fn try_new(label: impl Into<String>) -> GraphResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(GraphError::InvalidArgument(
                "vertex label must not be empty".to_string(),
            ));
        }
        Ok(Self { label })
    }

    /// The vertex label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl TryFrom<String> for Vertex {
    type Error = GraphError;

    fn try_from(label: String) -> GraphResult<Self> {
        Self::try_new(label)
    }
}

impl TryFrom<&str> for Vertex {
    type Error = GraphError;

    fn try_from(label: &str) -> GraphResult<Self> {
        Self::try_new(label)
    }
}

impl From<Vertex> for String {
    fn from(vertex: Vertex) -> Self {
        vertex.label
    }
}
