//! Cycle detection.

use std::collections::VecDeque;

use log::debug;

use crate::engine::visit;
use crate::graph::GraphStore;
use crate::types::{GraphResult, SearchType, Vertex};

/// Whether the graph contains a directed cycle (self-loops included).
///
/// Runs a DFS forest and checks for back edges.
pub fn is_cyclic<G: GraphStore + ?Sized>(graph: &G) -> GraphResult<bool> {
    let result = visit(graph, SearchType::DfsTot)?;
    let cyclic = result.has_back_edge();
    debug!(
        "cycle check over {} vertices: {}",
        graph.vertex_count(),
        if cyclic { "cyclic" } else { "acyclic" }
    );
    Ok(cyclic)
}

/// Whether the graph is a directed acyclic graph.
pub fn is_dag<G: GraphStore + ?Sized>(graph: &G) -> GraphResult<bool> {
    Ok(graph.is_directed() && !is_cyclic(graph)?)
}

/// Kahn's algorithm: repeatedly remove in-degree-0 vertices.
///
/// Ready vertices are queued FIFO, initially in store order and then in the
/// neighbor order of the vertex that freed them. Returns `None` when some
/// vertices are never freed, which happens exactly when the graph is cyclic.
pub fn kahn_order<G: GraphStore + ?Sized>(graph: &G) -> Option<Vec<Vertex>> {
    let n = graph.vertex_count();
    let mut in_degree: Vec<usize> = (0..n).map(|i| graph.in_degree_at(i)).collect();
    let mut ready: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = ready.pop_front() {
        order.push(graph.vertices()[u].clone());
        for (v, _) in graph.neighbors(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                ready.push_back(v);
            }
        }
    }

    (order.len() == n).then_some(order)
}
