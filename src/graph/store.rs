//! The storage contract every graph backend implements.

use serde::{Deserialize, Serialize};

use crate::types::{Edge, GraphError, GraphResult, Vertex};

/// Physical layout of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Per-vertex out-lists; neighbors in edge insertion order.
    #[default]
    List,
    /// Dense weight matrix; neighbors in vertex store order.
    Matrix,
}

impl StorageKind {
    /// Return a human-readable name for this storage kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        }
    }

    /// Parse a storage kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" | "adj_list" => Some(Self::List),
            "matrix" | "adj_matrix" => Some(Self::Matrix),
            _ => None,
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A directed graph store: vertex set plus ordered adjacency.
///
/// Vertices are addressed by label at the API surface and by dense index
/// (insertion order) inside the engine. `neighbors` must return the same
/// order for the same index until the store is mutated; every traversal's
/// determinism rests on it.
///
/// The trait is object safe so loaders can hand out `Box<dyn GraphStore>`.
pub trait GraphStore {
    /// All vertices in insertion order.
    fn vertices(&self) -> &[Vertex];

    /// Dense index of a vertex.
    fn index_of(&self, vertex: &Vertex) -> Option<usize>;

    /// Out-neighbors of the vertex at `index` as `(index, weight)` pairs.
    fn neighbors(&self, index: usize) -> Vec<(usize, f64)>;

    /// Weight of the edge between two indices, if present.
    fn weight_at(&self, source: usize, target: usize) -> Option<f64>;

    /// Number of edges entering the vertex at `index`.
    fn in_degree_at(&self, index: usize) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Whether the store accepts explicit edge weights.
    fn is_weighted(&self) -> bool;

    /// Physical layout of the store.
    fn storage_kind(&self) -> StorageKind;

    /// Counter bumped by every mutation.
    fn revision(&self) -> u64;

    /// Add a vertex. Returns false if a vertex with that label exists.
    fn add_vertex(&mut self, vertex: Vertex) -> bool;

    /// Remove a vertex and all its touching edges. Returns false if absent.
    fn remove_vertex(&mut self, vertex: &Vertex) -> bool;

    /// Add an edge with the default weight.
    ///
    /// Returns false (and leaves the graph unchanged) if the edge exists.
    fn add_edge(&mut self, source: &Vertex, target: &Vertex) -> GraphResult<bool>;

    /// Add an edge with an explicit weight. Fails on unweighted stores.
    fn add_weighted_edge(
        &mut self,
        source: &Vertex,
        target: &Vertex,
        weight: f64,
    ) -> GraphResult<bool>;

    /// Remove an edge, returning it if it existed.
    fn remove_edge(&mut self, source: &Vertex, target: &Vertex) -> Option<Edge>;

    /// Change the weight of an existing edge. Fails on unweighted stores.
    fn set_edge_weight(&mut self, source: &Vertex, target: &Vertex, weight: f64)
        -> GraphResult<()>;

    /// Always true: only directed semantics are implemented.
    fn is_directed(&self) -> bool {
        true
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Vertex at a dense index.
    fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices().get(index)
    }

    /// Whether the vertex is in the graph.
    fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Dense index of a vertex, or `VertexNotFound`.
    fn require_index(&self, vertex: &Vertex) -> GraphResult<usize> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.label().to_string()))
    }

    /// Whether an edge `source -> target` exists. False for unknown vertices.
    fn contains_edge(&self, source: &Vertex, target: &Vertex) -> bool {
        match (self.index_of(source), self.index_of(target)) {
            (Some(s), Some(t)) => self.weight_at(s, t).is_some(),
            _ => false,
        }
    }

    /// Weight of the edge `source -> target`.
    fn edge_weight(&self, source: &Vertex, target: &Vertex) -> GraphResult<f64> {
        let s = self.require_index(source)?;
        let t = self.require_index(target)?;
        self.weight_at(s, t)
            .ok_or_else(|| GraphError::edge_not_found(source.label(), target.label()))
    }

    /// Number of edges leaving the vertex.
    fn out_degree_of(&self, vertex: &Vertex) -> GraphResult<usize> {
        let i = self.require_index(vertex)?;
        Ok(self.neighbors(i).len())
    }

    /// Number of edges entering the vertex.
    fn in_degree_of(&self, vertex: &Vertex) -> GraphResult<usize> {
        let i = self.require_index(vertex)?;
        Ok(self.in_degree_at(i))
    }

    /// In-degree plus out-degree. A self-loop counts twice.
    fn degree_of(&self, vertex: &Vertex) -> GraphResult<usize> {
        Ok(self.in_degree_of(vertex)? + self.out_degree_of(vertex)?)
    }

    /// All edges, grouped by source in store order, then neighbor order.
    fn edge_set(&self) -> Vec<Edge> {
        let vertices = self.vertices();
        let mut edges = Vec::with_capacity(self.edge_count());
        for (s, source) in vertices.iter().enumerate() {
            for (t, weight) in self.neighbors(s) {
                edges.push(Edge::weighted(source.clone(), vertices[t].clone(), weight));
            }
        }
        edges
    }
}
