//! The serialized shape of a graph store.

use serde::{Deserialize, Serialize};

use crate::graph::{AdjListGraph, AdjMatrixGraph, GraphStore, StorageKind};
use crate::types::{Edge, GraphError, GraphResult, Vertex, DEFAULT_EDGE_WEIGHT};

/// On-disk form of a graph: storage layout, weighting, vertices in store
/// order and edges grouped by source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Snapshot a store.
    pub fn from_store<G: GraphStore + ?Sized>(graph: &G) -> Self {
        Self {
            storage: graph.storage_kind(),
            weighted: graph.is_weighted(),
            vertices: graph.vertices().to_vec(),
            edges: graph.edge_set(),
        }
    }

    /// Build a fresh store of the recorded layout.
    ///
    /// Repeated vertices and edges collapse into one. An unweighted document
    /// may only carry the default weight.
    pub fn into_store(self) -> GraphResult<Box<dyn GraphStore>> {
        let mut graph = empty_store(self.storage, self.weighted);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in &self.edges {
            if self.weighted {
                graph.add_weighted_edge(&edge.source, &edge.target, edge.weight)?;
            } else if edge.weight == DEFAULT_EDGE_WEIGHT {
                graph.add_edge(&edge.source, &edge.target)?;
            } else {
                return Err(GraphError::InvalidArgument(format!(
                    "edge {} carries a weight but the document is unweighted",
                    edge
                )));
            }
        }
        Ok(graph)
    }
}

/// An empty store with the given layout and weighting.
pub fn empty_store(storage: StorageKind, weighted: bool) -> Box<dyn GraphStore> {
    match (storage, weighted) {
        (StorageKind::List, false) => Box::new(AdjListGraph::new()),
        (StorageKind::List, true) => Box::new(AdjListGraph::weighted()),
        (StorageKind::Matrix, false) => Box::new(AdjMatrixGraph::new()),
        (StorageKind::Matrix, true) => Box::new(AdjMatrixGraph::weighted()),
    }
}
