//! Graph stores: the vertex set and adjacency the engine walks.

pub mod adj_list;
pub mod adj_matrix;
pub mod builder;
pub mod ops;
pub mod store;

pub use adj_list::AdjListGraph;
pub use adj_matrix::AdjMatrixGraph;
pub use builder::GraphBuilder;
pub use ops::{render, same_structure, transpose};
pub use store::{GraphStore, StorageKind};
