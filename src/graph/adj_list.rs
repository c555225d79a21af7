//! Adjacency-list backend: one ordered out-list per vertex.

use crate::index::VertexIndex;
use crate::types::{check_weight, Edge, GraphError, GraphResult, Vertex, DEFAULT_EDGE_WEIGHT};

use super::{GraphStore, StorageKind};

/// Directed graph stored as per-vertex out-lists.
///
/// Neighbors are reported in edge insertion order.
#[derive(Debug, Clone, Default)]
pub struct AdjListGraph {
    /// Label -> dense index, insertion ordered.
    index: VertexIndex,
    /// Out-lists: source index -> [(target index, weight)].
    out: Vec<Vec<(usize, f64)>>,
    /// In-degree per vertex index.
    in_degree: Vec<usize>,
    /// Total number of edges.
    edge_count: usize,
    /// Whether explicit weights are accepted.
    weighted: bool,
    /// Mutation counter.
    revision: u64,
}

impl AdjListGraph {
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

    fn insert_edge(&mut self, source: &Vertex, target: &Vertex, weight: f64) -> GraphResult<bool> {
        let s = self.require_index(source)?;
        let t = self.require_index(target)?;
        if self.out[s].iter().any(|&(n, _)| n == t) {
            return Ok(false);
        }
        self.out[s].push((t, weight));
        self.in_degree[t] += 1;
        self.edge_count += 1;
        self.revision += 1;
        Ok(true)
    }
}

impl GraphStore for AdjListGraph {
    fn vertices(&self) -> &[Vertex] {
        self.index.as_slice()
    }

    fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.index.get(vertex)
    }

    fn neighbors(&self, index: usize) -> Vec<(usize, f64)> {
        self.out.get(index).cloned().unwrap_or_default()
    }

    fn weight_at(&self, source: usize, target: usize) -> Option<f64> {
        self.out
            .get(source)?
            .iter()
            .find(|&&(n, _)| n == target)
            .map(|&(_, w)| w)
    }

    fn in_degree_at(&self, index: usize) -> usize {
        self.in_degree.get(index).copied().unwrap_or(0)
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::List
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.index.insert(vertex).is_none() {
            return false;
        }
        self.out.push(Vec::new());
        self.in_degree.push(0);
        self.revision += 1;
        true
    }

    fn remove_vertex(&mut self, vertex: &Vertex) -> bool {
        let Some(pos) = self.index.remove(vertex) else {
            return false;
        };

        let removed = self.out.remove(pos);
        self.in_degree.remove(pos);
        for &(t, _) in &removed {
            if t != pos {
                let t = if t > pos { t - 1 } else { t };
                self.in_degree[t] -= 1;
            }
        }
        self.edge_count -= removed.len();

        // Drop edges into the removed vertex and shift later indices down.
        for list in &mut self.out {
            let before = list.len();
            list.retain(|&(t, _)| t != pos);
            self.edge_count -= before - list.len();
            for entry in list.iter_mut() {
                if entry.0 > pos {
                    entry.0 -= 1;
                }
            }
        }

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
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        let slot = self.out[s].iter().position(|&(n, _)| n == t)?;
        let (_, weight) = self.out[s].remove(slot);
        self.in_degree[t] -= 1;
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
        let s = self.require_index(source)?;
        let t = self.require_index(target)?;
        let entry = self.out[s]
            .iter_mut()
            .find(|(n, _)| *n == t)
            .ok_or_else(|| GraphError::edge_not_found(source.label(), target.label()))?;
        entry.1 = weight;
        self.revision += 1;
        Ok(())
    }
}
