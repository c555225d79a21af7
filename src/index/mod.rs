//! Index structures for fast lookup.

pub mod vertex_index;

pub use vertex_index::VertexIndex;
