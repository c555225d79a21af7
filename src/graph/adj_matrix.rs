//! Adjacency-matrix backend: dense |V| x |V| weight table.

use crate::index::VertexIndex;
use crate::types::{check_weight, Edge, GraphError, GraphResult, Vertex, DEFAULT_EDGE_WEIGHT};

use super::{GraphStore, StorageKind};

/// Directed graph stored as a square matrix of optional weights.
///
/// Neighbors are reported in vertex store order (row scan).
#[derive(Debug, Clone, Default)]
pub struct AdjMatrixGraph {
    index: VertexIndex,
    /// `cells[s][t]` holds the weight of `s -> t`.
    cells: Vec<Vec<Option<f64>>>,
    edge_count: usize,
    weighted: bool,
    revision: u64,
}

impl AdjMatrixGraph {
    /// Create an empty unweighted graph (every edge weighs 1.0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty weighted graph.
    pub fn weighted() -> Self {
        Self {
            weighted: true,
            ..Self::default()
        }
    }

    fn cell_mut(&mut self, source: &Vertex, target: &Vertex) -> GraphResult<&mut Option<f64>> {
        let s = self.require_index(source)?;
        let t = self.require_index(target)?;
        Ok(&mut self.cells[s][t])
    }

    fn insert_edge(&mut self, source: &Vertex, target: &Vertex, weight: f64) -> GraphResult<bool> {
        let cell = self.cell_mut(source, target)?;
        if cell.is_some() {
            return Ok(false);
        }
        *cell = Some(weight);
        self.edge_count += 1;
        self.revision += 1;
        Ok(true)
    }
}

impl GraphStore for AdjMatrixGraph {
    fn vertices(&self) -> &[Vertex] {
        self.index.as_slice()
    }

    fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.index.get(vertex)
    }

    fn neighbors(&self, index: usize) -> Vec<(usize, f64)> {
        match self.cells.get(index) {
            Some(row) => row
                .iter()
                .enumerate()
                .filter_map(|(t, w)| w.map(|w| (t, w)))
                .collect(),
            None => Vec::new(),
        }
    }

    fn weight_at(&self, source: usize, target: usize) -> Option<f64> {
        *self.cells.get(source)?.get(target)?
    }

    fn in_degree_at(&self, index: usize) -> usize {
        self.cells
            .iter()
            .filter(|row| row.get(index).is_some_and(Option::is_some))
            .count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Matrix
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.index.insert(vertex).is_none() {
            return false;
        }
        for row in &mut self.cells {
            row.push(None);
        }
        let n = self.index.len();
        self.cells.push(vec![None; n]);
        self.revision += 1;
        true
    }

    fn remove_vertex(&mut self, vertex: &Vertex) -> bool {
        let Some(pos) = self.index.remove(vertex) else {
            return false;
        };
        let row = self.cells.remove(pos);
        let mut dropped = row.iter().filter(|w| w.is_some()).count();
        for row in &mut self.cells {
            if row.remove(pos).is_some() {
                dropped += 1;
            }
        }
        self.edge_count -= dropped;
        self.revision += 1;
        true
    }

    fn add_edge(&mut self, source: &Vertex, target: &Vertex) -> GraphResult<bool> {
        self.insert_edge(source, target, DEFAULT_EDGE_WEIGHT)
    }

    fn add_weighted_edge(
        &mut self,
        source: &Vertex,
        target: &Vertex,
        weight: f64,
    ) -> GraphResult<bool> {
        if !self.weighted {
            return Err(GraphError::UnsupportedOperation(
                "explicit edge weights on an unweighted graph".to_string(),
            ));
        }
        let weight = check_weight(weight)?;
        self.insert_edge(source, target, weight)
    }

    fn remove_edge(&mut self, source: &Vertex, target: &Vertex) -> Option<Edge> {
        let weight = self.cell_mut(source, target).ok()?.take()?;
        self.edge_count -= 1;
        self.revision += 1;
        Some(Edge::weighted(source.clone(), target.clone(), weight))
    }

    fn set_edge_weight(
        &mut self,
        source: &Vertex,
        target: &Vertex,
        weight: f64,
    ) -> GraphResult<()> {
        if !self.weighted {
            return Err(GraphError::UnsupportedOperation(
                "set_edge_weight on an unweighted graph".to_string(),
            ));
        }
        let weight = check_weight(weight)?;
        match self.cell_mut(source, target)? {
            Some(w) => *w = weight,
            None => return Err(GraphError::edge_not_found(source.label(), target.label())),
        }
        self.revision += 1;
        Ok(())
    }
}
