//! Topological sort.

use log::debug;

use crate::engine::{visit, SearchResult};
use crate::graph::GraphStore;
use crate::types::{GraphError, GraphResult, SearchType, Vertex};

/// Topological order of a DAG: vertices by decreasing DFS finish time.
///
/// For every edge `u -> v`, `u` comes before `v`. Fails with
/// `UnsupportedOperation` if the graph has a cycle.
pub fn topological_sort<G: GraphStore + ?Sized>(graph: &G) -> GraphResult<Vec<Vertex>> {
    let result = visit(graph, SearchType::DfsTot)?;
    if result.has_back_edge() || !graph.is_directed() {
        return Err(GraphError::UnsupportedOperation(
            "topological sort of a graph that is not a DAG".to_string(),
        ));
    }
    let order = reverse_postorder(&result);
    debug!("topological sort of {} vertices", order.len());
    Ok(order)
}

/// Vertices of a finished visit by decreasing finish time.
pub fn reverse_postorder(result: &SearchResult) -> Vec<Vertex> {
    result.finish_order().rev().cloned().collect()
}
