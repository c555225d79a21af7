//! All-pairs shortest paths (Floyd-Warshall).

use log::debug;
use serde::Serialize;

use crate::graph::GraphStore;
use crate::index::VertexIndex;
use crate::types::{GraphError, GraphResult, Vertex};

/// Shortest-path weights between every ordered pair of vertices.
///
/// Rows and columns follow vertex store order. Unreachable pairs hold
/// `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    index: VertexIndex,
    dist: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Shortest-path weight from `from` to `to`.
    pub fn get(&self, from: &Vertex, to: &Vertex) -> GraphResult<f64> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Ok(self.dist[i][j])
    }

    /// Shortest-path weights from `from` to every vertex, in store order.
    pub fn row(&self, from: &Vertex) -> GraphResult<&[f64]> {
        Ok(&self.dist[self.position(from)?])
    }

    /// The vertices labelling rows and columns.
    pub fn vertices(&self) -> &[Vertex] {
        self.index.as_slice()
    }

    /// The raw matrix.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.dist
    }

    fn position(&self, v: &Vertex) -> GraphResult<usize> {
        self.index
            .get(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.label().to_string()))
    }
}

/// JSON-friendly form: `{"vertices": [...], "distances": [[...]]}` with
/// unreachable entries as `null`.
impl Serialize for DistanceMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let rows: Vec<Vec<Option<f64>>> = self
            .dist
            .iter()
            .map(|row| row.iter().map(|&d| d.is_finite().then_some(d)).collect())
            .collect();
        let mut state = serializer.serialize_struct("DistanceMatrix", 2)?;
        state.serialize_field("vertices", self.index.as_slice())?;
        state.serialize_field("distances", &rows)?;
        state.end()
    }
}

/// Floyd-Warshall over the whole graph.
///
/// Negative weights are allowed; a negative cycle fails with
/// `UnsupportedOperation`. Unweighted stores use weight 1.0 per edge.
pub fn all_pairs_shortest_paths<G: GraphStore + ?Sized>(
    graph: &G,
) -> GraphResult<DistanceMatrix> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
        for (j, w) in graph.neighbors(i) {
            if w < row[j] {
                row[j] = w;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let via = dist[i][k];
            if via == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let candidate = via + dist[k][j];
                if candidate < dist[i][j] {
                    dist[i][j] = candidate;
                }
            }
        }
    }

    if let Some(i) = (0..n).find(|&i| dist[i][i] < 0.0) {
        return Err(GraphError::UnsupportedOperation(format!(
            "shortest paths undefined: negative cycle through {}",
            graph.vertices()[i]
        )));
    }

    let mut index = VertexIndex::new();
    for v in graph.vertices() {
        index.insert(v.clone());
    }
    debug!("all-pairs shortest paths over {n} vertices");
    Ok(DistanceMatrix { index, dist })
}
