//! The per-visit record: colors, timestamps, parents and distances.

use log::trace;
use serde::Serialize;

use crate::graph::GraphStore;
use crate::index::VertexIndex;
use crate::types::{Edge, GraphError, GraphResult, SearchType, Vertex, FIRST_TICK};

/// Visit state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    /// Not reached.
    White,
    /// Discovered, not finished.
    Gray,
    /// Finished.
    Black,
}

/// Outcome of one visit.
///
/// Built by exactly one engine call and handed back only once the visit has
/// completed, so every query sees a consistent snapshot. The result keeps a
/// copy of the vertex index it was built over and never touches the graph
/// again; [`SearchResult::ensure_current`] tells whether the graph has moved
/// on since.
#[derive(Debug, Clone)]
pub struct SearchResult {
    search_type: SearchType,
    source: Option<usize>,
    index: VertexIndex,
    color: Vec<Color>,
    discovery: Vec<Option<u32>>,
    finish: Vec<Option<u32>>,
    parent: Vec<Option<usize>>,
    /// Weight of the tree edge `parent[v] -> v`.
    tree_weight: Vec<Option<f64>>,
    distance: Vec<f64>,
    discovery_order: Vec<usize>,
    finish_order: Vec<usize>,
    back_edges: Vec<(usize, usize)>,
    /// Offsets into `discovery_order` where each tree of the forest starts.
    tree_starts: Vec<usize>,
    next_tick: u32,
    revision: u64,
}

impl SearchResult {
    pub(crate) fn new<G: GraphStore + ?Sized>(search_type: SearchType, graph: &G) -> Self {
        let mut index = VertexIndex::new();
        for v in graph.vertices() {
            index.insert(v.clone());
        }
        let n = index.len();
        Self {
            search_type,
            source: None,
            index,
            color: vec![Color::White; n],
            discovery: vec![None; n],
            finish: vec![None; n],
            parent: vec![None; n],
            tree_weight: vec![None; n],
            distance: vec![f64::INFINITY; n],
            discovery_order: Vec::with_capacity(n),
            finish_order: Vec::with_capacity(n),
            back_edges: Vec::new(),
            tree_starts: Vec::new(),
            next_tick: FIRST_TICK,
            revision: graph.revision(),
        }
    }

    // ==================== Engine-side mutation ====================

    fn tick(&mut self) -> u32 {
        let t = self.next_tick;
        self.next_tick += 1;
        t
    }

    pub(crate) fn set_source(&mut self, source: usize) {
        self.source = Some(source);
    }

    pub(crate) fn begin_tree(&mut self) {
        self.tree_starts.push(self.discovery_order.len());
    }

    pub(crate) fn color_at(&self, v: usize) -> Color {
        self.color[v]
    }

    pub(crate) fn distance_at(&self, v: usize) -> f64 {
        self.distance[v]
    }

    /// Discovery tick of `v`, or 0 while it is still White.
    pub(crate) fn discovery_at(&self, v: usize) -> u32 {
        self.discovery[v].unwrap_or(0)
    }

    /// White -> Gray. `via` is the tree edge `(parent, weight)`, if any.
    pub(crate) fn discover(&mut self, v: usize, via: Option<(usize, f64)>) {
        debug_assert_eq!(self.color[v], Color::White);
        let t = self.tick();
        self.color[v] = Color::Gray;
        self.discovery[v] = Some(t);
        if let Some((p, w)) = via {
            self.parent[v] = Some(p);
            self.tree_weight[v] = Some(w);
        }
        self.discovery_order.push(v);
        trace!("discover {} at {}", self.index.as_slice()[v], t);
    }

    /// Gray -> Black.
    pub(crate) fn finish(&mut self, v: usize) {
        debug_assert_eq!(self.color[v], Color::Gray);
        let t = self.tick();
        self.color[v] = Color::Black;
        self.finish[v] = Some(t);
        self.finish_order.push(v);
        trace!("finish {} at {}", self.index.as_slice()[v], t);
    }

    pub(crate) fn set_distance(&mut self, v: usize, distance: f64) {
        self.distance[v] = distance;
    }

    /// Re-parent a Gray vertex after a shorter path was found.
    pub(crate) fn reparent(&mut self, v: usize, parent: usize, weight: f64) {
        self.parent[v] = Some(parent);
        self.tree_weight[v] = Some(weight);
    }

    pub(crate) fn record_back_edge(&mut self, from: usize, to: usize) {
        self.back_edges.push((from, to));
    }

    // ==================== Queries ====================

    fn position(&self, v: &Vertex) -> GraphResult<usize> {
        self.index
            .get(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.label().to_string()))
    }

    fn vertex(&self, pos: usize) -> &Vertex {
        &self.index.as_slice()[pos]
    }

    /// The search type that produced this result.
    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// The first root of the visit; `None` for a visit over an empty graph.
    pub fn source(&self) -> Option<&Vertex> {
        self.source.map(|s| self.vertex(s))
    }

    /// Length (BFS) or weight (Dijkstra) of the shortest path from the source.
    ///
    /// `f64::INFINITY` when `v` was not reached. Fails with
    /// `UnsupportedOperation` on depth-first results.
    pub fn distance(&self, v: &Vertex) -> GraphResult<f64> {
        let pos = self.position(v)?;
        if !self.search_type.has_distances() {
            return Err(GraphError::UnsupportedOperation(format!(
                "distances are not defined for {} results",
                self.search_type
            )));
        }
        Ok(self.distance[pos])
    }

    /// Parent of `v` in the search tree/forest; `None` for roots and unreached vertices.
    pub fn parent_of(&self, v: &Vertex) -> GraphResult<Option<&Vertex>> {
        let pos = self.position(v)?;
        Ok(self.parent[pos].map(|p| self.vertex(p)))
    }

    /// Tick at which `v` turned gray; `None` if never reached.
    pub fn start_time(&self, v: &Vertex) -> GraphResult<Option<u32>> {
        Ok(self.discovery[self.position(v)?])
    }

    /// Tick at which `v` turned black; `None` if never reached.
    pub fn end_time(&self, v: &Vertex) -> GraphResult<Option<u32>> {
        Ok(self.finish[self.position(v)?])
    }

    /// Final color of `v`.
    pub fn color(&self, v: &Vertex) -> GraphResult<Color> {
        Ok(self.color[self.position(v)?])
    }

    /// Whether the visit reached `v`.
    pub fn reached(&self, v: &Vertex) -> GraphResult<bool> {
        Ok(self.color(v)? != Color::White)
    }

    /// Weight of the tree edge `v1 -> v2` recorded by this visit.
    ///
    /// Fails with `EdgeNotFound` when `v1` is not the parent of `v2`.
    pub fn edge_weight(&self, v1: &Vertex, v2: &Vertex) -> GraphResult<f64> {
        let p = self.position(v1)?;
        let c = self.position(v2)?;
        match (self.parent[c], self.tree_weight[c]) {
            (Some(parent), Some(w)) if parent == p => Ok(w),
            _ => Err(GraphError::edge_not_found(v1.label(), v2.label())),
        }
    }

    /// Vertices from the root of `v`'s tree down to `v`; `None` if unreached.
    pub fn path_to(&self, v: &Vertex) -> GraphResult<Option<Vec<Vertex>>> {
        let mut pos = self.position(v)?;
        if self.color[pos] == Color::White {
            return Ok(None);
        }
        let mut path = vec![self.vertex(pos).clone()];
        while let Some(p) = self.parent[pos] {
            path.push(self.vertex(p).clone());
            pos = p;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Tree edges `parent -> child`, in discovery order of the child.
    pub fn tree_edges(&self) -> Vec<Edge> {
        self.discovery_order
            .iter()
            .filter_map(|&c| {
                let p = self.parent[c]?;
                let w = self.tree_weight[c]?;
                Some(Edge::weighted(self.vertex(p).clone(), self.vertex(c).clone(), w))
            })
            .collect()
    }

    /// Edges found from a gray vertex to a gray ancestor (depth-first visits only).
    pub fn back_edges(&self) -> Vec<(&Vertex, &Vertex)> {
        self.back_edges
            .iter()
            .map(|&(from, to)| (self.vertex(from), self.vertex(to)))
            .collect()
    }

    /// Whether any back edge was seen.
    pub fn has_back_edge(&self) -> bool {
        !self.back_edges.is_empty()
    }

    /// Vertices of each search tree, trees in the order they were grown,
    /// vertices in discovery order.
    pub fn trees(&self) -> Vec<Vec<&Vertex>> {
        let mut bounds = self.tree_starts.clone();
        bounds.push(self.discovery_order.len());
        bounds
            .windows(2)
            .map(|w| {
                self.discovery_order[w[0]..w[1]]
                    .iter()
                    .map(|&v| self.vertex(v))
                    .collect()
            })
            .collect()
    }

    /// Reached vertices in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.discovery_order.iter().map(move |&v| self.vertex(v))
    }

    /// Finished vertices in increasing finish time.
    pub fn finish_order(&self) -> impl DoubleEndedIterator<Item = &Vertex> + '_ {
        self.finish_order.iter().map(move |&v| self.vertex(v))
    }

    /// Number of vertices reached.
    pub fn reached_count(&self) -> usize {
        self.discovery_order.len()
    }

    /// Number of vertices in the visited graph.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Whether nothing was reached (empty graph).
    pub fn is_empty(&self) -> bool {
        self.discovery_order.is_empty()
    }

    /// Number of ticks consumed.
    pub fn ticks(&self) -> u32 {
        self.next_tick - FIRST_TICK
    }

    /// Revision of the graph this result was built from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fail with `ConcurrentModification` if `graph` changed since this visit,
    /// or is not the graph it was computed on.
    pub fn ensure_current<G: GraphStore + ?Sized>(&self, graph: &G) -> GraphResult<()> {
        if graph.revision() != self.revision || graph.vertices() != self.index.as_slice() {
            return Err(GraphError::ConcurrentModification {
                expected: self.revision,
                found: graph.revision(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a Vertex;
    type IntoIter = Box<dyn Iterator<Item = &'a Vertex> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
