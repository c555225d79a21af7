//! Index by label: maps each vertex to its dense position in insertion order.

use std::collections::HashMap;

use crate::types::Vertex;

/// Insertion-ordered vertex list with O(1) label lookup.
///
/// Positions are dense (`0..len`). Removing a vertex shifts every later
/// vertex down by one, so positions stay aligned with insertion order.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    order: Vec<Vertex>,
    positions: HashMap<Vertex, usize>,
}

impl VertexIndex {
    /// Create a new, empty vertex index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex. Returns its position, or `None` if already present.
    pub fn insert(&mut self, vertex: Vertex) -> Option<usize> {
        if self.positions.contains_key(&vertex) {
            return None;
        }
        let pos = self.order.len();
        self.positions.insert(vertex.clone(), pos);
        self.order.push(vertex);
        Some(pos)
    }

    /// Remove a vertex, returning the position it occupied.
    pub fn remove(&mut self, vertex: &Vertex) -> Option<usize> {
        let pos = self.positions.remove(vertex)?;
        self.order.remove(pos);
        for (i, v) in self.order.iter().enumerate().skip(pos) {
            if let Some(slot) = self.positions.get_mut(v) {
                *slot = i;
            }
        }
        Some(pos)
    }

    /// Position of a vertex.
    pub fn get(&self, vertex: &Vertex) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    /// Position of a vertex by label.
    pub fn get_label(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Vertex at a position.
    pub fn vertex(&self, pos: usize) -> Option<&Vertex> {
        self.order.get(pos)
    }

    /// Whether the vertex is indexed.
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.positions.contains_key(vertex)
    }

    /// All vertices in insertion order.
    pub fn as_slice(&self) -> &[Vertex] {
        &self.order
    }

    /// Number of indexed vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
