//! The directed edge value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Vertex, DEFAULT_EDGE_WEIGHT};

fn default_weight() -> f64 {
    DEFAULT_EDGE_WEIGHT
}

/// A directed edge between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Origin of the edge.
    pub source: Vertex,
    /// Destination of the edge.
    pub target: Vertex,
    /// Edge weight; unweighted edges report [`DEFAULT_EDGE_WEIGHT`].
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Edge {
    /// Create an edge with the default weight.
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self::weighted(source, target, DEFAULT_EDGE_WEIGHT)
    }

    /// Create an edge with an explicit weight.
    pub fn weighted(source: Vertex, target: Vertex, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// True when source and target are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight == DEFAULT_EDGE_WEIGHT {
            write!(f, "{} -> {}", self.source, self.target)
        } else {
            write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
        }
    }
}
