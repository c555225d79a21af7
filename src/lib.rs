//! digraph-visit: traversal engine and structural analyses for directed graphs.
//!
//! Graphs live in a [`GraphStore`] (adjacency list or matrix). A single visit
//! engine runs breadth-first, depth-first, total depth-first and Dijkstra
//! searches and returns a [`SearchResult`] with discovery/finish ticks,
//! parents and distances. Cycle detection, topological sorting, strongly
//! connected components and all-pairs shortest paths are built on it.

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use analysis::{
    all_pairs_shortest_paths, is_cyclic, is_dag, kahn_order, strongly_connected_components,
    topological_sort, Components, DistanceMatrix,
};
pub use engine::{visit, visit_from, Color, SearchResult, VisitEngine, VisitParams};
pub use format::{GraphDocument, GraphReader, GraphWriter};
pub use graph::{AdjListGraph, AdjMatrixGraph, GraphBuilder, GraphStore, StorageKind};
pub use index::VertexIndex;
pub use types::{
    Edge, GraphError, GraphResult, SearchType, Vertex, DEFAULT_EDGE_WEIGHT, FIRST_TICK,
};
