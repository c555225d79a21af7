//! Fluent API for building graph stores.

use crate::types::{GraphResult, Vertex, DEFAULT_EDGE_WEIGHT};

use super::{AdjListGraph, AdjMatrixGraph, GraphStore};

/// Fluent builder for constructing either backend.
///
/// Vertices keep the order in which they were declared. Labels are checked
/// when the graph is built: an empty label fails `build_*` with
/// `InvalidArgument`, and an edge to an undeclared vertex with
/// `VertexNotFound`.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    weighted: bool,
    vertices: Vec<String>,
    edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a builder for an unweighted graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a weighted graph.
    pub fn weighted() -> Self {
        Self {
            weighted: true,
            ..Self::default()
        }
    }

    /// Declare a vertex.
    pub fn vertex(mut self, label: &str) -> Self {
        self.vertices.push(label.to_string());
        self
    }

    /// Declare several vertices in order.
    pub fn vertices<'a>(mut self, labels: impl IntoIterator<Item = &'a str>) -> Self {
        self.vertices.extend(labels.into_iter().map(str::to_string));
        self
    }

    /// Add an edge with the default weight.
    pub fn edge(self, source: &str, target: &str) -> Self {
        self.weighted_edge(source, target, DEFAULT_EDGE_WEIGHT)
    }

    /// Add an edge with an explicit weight. Only meaningful for weighted builders.
    pub fn weighted_edge(mut self, source: &str, target: &str, weight: f64) -> Self {
        self.edges
            .push((source.to_string(), target.to_string(), weight));
        self
    }

    /// Populate an existing (normally empty) store.
    pub fn build_into<G: GraphStore>(self, mut graph: G) -> GraphResult<G> {
        for label in self.vertices {
            graph.add_vertex(Vertex::try_new(label)?);
        }
        for (source, target, weight) in self.edges {
            let source = Vertex::try_new(source)?;
            let target = Vertex::try_new(target)?;
            if graph.is_weighted() {
                graph.add_weighted_edge(&source, &target, weight)?;
            } else {
                graph.add_edge(&source, &target)?;
            }
        }
        Ok(graph)
    }

    /// Build an adjacency-list graph.
    pub fn build_list(self) -> GraphResult<AdjListGraph> {
        let graph = if self.weighted {
            AdjListGraph::weighted()
        } else {
            AdjListGraph::new()
        };
        self.build_into(graph)
    }

    /// Build an adjacency-matrix graph.
    pub fn build_matrix(self) -> GraphResult<AdjMatrixGraph> {
        let graph = if self.weighted {
            AdjMatrixGraph::weighted()
        } else {
            AdjMatrixGraph::new()
        };
        self.build_into(graph)
    }
}
