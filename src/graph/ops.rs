//! Whole-graph helpers built on the store contract.

use std::fmt::Write as _;

use super::{AdjListGraph, GraphStore};

/// Build the transposed graph (every edge reversed).
///
/// The vertex order is preserved. Edges are re-added by scanning sources in
/// store order, so the in-list of each vertex of `graph` becomes its
/// out-list here, ordered by source position.
pub fn transpose<G: GraphStore + ?Sized>(graph: &G) -> AdjListGraph {
    let mut reversed = if graph.is_weighted() {
        AdjListGraph::weighted()
    } else {
        AdjListGraph::new()
    };
    for v in graph.vertices() {
        reversed.add_vertex(v.clone());
    }
    for edge in graph.edge_set() {
        // Endpoints were just inserted and weights come from a valid store.
        let _ = if graph.is_weighted() {
            reversed.add_weighted_edge(&edge.target, &edge.source, edge.weight)
        } else {
            reversed.add_edge(&edge.target, &edge.source)
        };
    }
    reversed
}

/// Structural equality across backends: same labels, same edges and weights.
///
/// Vertex insertion order and storage kind are ignored.
pub fn same_structure<A, B>(a: &A, b: &B) -> bool
where
    A: GraphStore + ?Sized,
    B: GraphStore + ?Sized,
{
    if a.vertex_count() != b.vertex_count() || a.edge_count() != b.edge_count() {
        return false;
    }
    if !a.vertices().iter().all(|v| b.contains_vertex(v)) {
        return false;
    }
    a.edge_set()
        .iter()
        .all(|e| matches!(b.edge_weight(&e.source, &e.target), Ok(w) if w == e.weight))
}

/// Render the graph as text:
///
/// ```text
/// Vertices: A, B, C
/// A -> B
/// B -> C
/// ```
pub fn render<G: GraphStore + ?Sized>(graph: &G) -> String {
    let labels: Vec<&str> = graph.vertices().iter().map(|v| v.label()).collect();
    let mut out = format!("Vertices: {}", labels.join(", "));
    for edge in graph.edge_set() {
        let _ = write!(out, "\n{edge}");
    }
    out
}
