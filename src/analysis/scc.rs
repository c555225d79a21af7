//! Strongly connected components (Kosaraju).

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::engine::{visit, SearchResult, VisitEngine};
use crate::graph::{transpose, GraphStore};
use crate::types::{GraphError, GraphResult, SearchType, Vertex};

/// The strongly connected components of a graph.
///
/// Components appear in the order they were found; the vertices of each
/// component appear in the order they were visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Components {
    components: Vec<Vec<Vertex>>,
}

impl Components {
    /// All components.
    pub fn as_slice(&self) -> &[Vec<Vertex>] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for a graph without vertices.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The component containing `v`.
    pub fn component_of(&self, v: &Vertex) -> Option<&[Vertex]> {
        self.components
            .iter()
            .find(|c| c.contains(v))
            .map(Vec::as_slice)
    }

    /// Iterate over the components.
    pub fn iter(&self) -> impl Iterator<Item = &Vec<Vertex>> {
        self.components.iter()
    }

    /// Brace-delimited rendering, same as `Display`.
    pub fn to_string_scc(&self) -> String {
        self.to_string()
    }

    /// Consume into the raw component lists.
    pub fn into_inner(self) -> Vec<Vec<Vertex>> {
        self.components
    }
}

/// `{{A,B,C},{D},{E}}`
impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, v) in component.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

/// Strongly connected components by Kosaraju's two-pass method.
///
/// Fails with `UnsupportedOperation` on an undirected store.
pub fn strongly_connected_components<G: GraphStore + ?Sized>(
    graph: &G,
) -> GraphResult<Components> {
    if !graph.is_directed() {
        return Err(GraphError::UnsupportedOperation(
            "strongly connected components of an undirected graph".to_string(),
        ));
    }
    let first_pass = visit(graph, SearchType::DfsTot)?;
    components_from_finish_order(graph, &first_pass)
}

/// Second Kosaraju pass over a precomputed DFS forest of `graph`.
///
/// Fails with `ConcurrentModification` if `graph` changed after
/// `first_pass` was computed (or `first_pass` came from another graph), and with `UnsupportedOperation` if
/// `first_pass` is not a full depth-first forest.
pub fn components_from_finish_order<G: GraphStore + ?Sized>(
    graph: &G,
    first_pass: &SearchResult,
) -> GraphResult<Components> {
    first_pass.ensure_current(graph)?;
    if first_pass.search_type() != SearchType::DfsTot {
        return Err(GraphError::UnsupportedOperation(format!(
            "component assignment needs a dfs_tot result, got {}",
            first_pass.search_type()
        )));
    }

    let reversed = transpose(graph);
    let roots: Vec<Vertex> = first_pass.finish_order().rev().cloned().collect();
    let second_pass = VisitEngine::new().dfs_forest(&reversed, &roots)?;
    let components: Vec<Vec<Vertex>> = second_pass
        .trees()
        .into_iter()
        .map(|tree| tree.into_iter().cloned().collect())
        .collect();

    debug!(
        "{} strongly connected components over {} vertices",
        components.len(),
        graph.vertex_count()
    );
    Ok(Components { components })
}
