//! The generalized visit: one walk, parameterized by frontier discipline.

use log::debug;

use crate::graph::GraphStore;
use crate::types::{GraphError, GraphResult, SearchType, Vertex};

use super::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use super::result::{Color, SearchResult};

/// Parameters for a visit.
#[derive(Debug, Clone)]
pub struct VisitParams {
    /// Which search to run.
    pub search_type: SearchType,
    /// Explicit first root. `None` picks the default root (see [`default_root`]).
    pub source: Option<Vertex>,
}

impl VisitParams {
    /// Visit from the default root.
    pub fn new(search_type: SearchType) -> Self {
        Self {
            search_type,
            source: None,
        }
    }

    /// Visit from an explicit source.
    pub fn from_source(search_type: SearchType, source: Vertex) -> Self {
        Self {
            search_type,
            source: Some(source),
        }
    }
}

/// Default root: the first vertex in store order with in-degree 0, or the
/// first vertex when every vertex has an incoming edge.
pub fn default_root<G: GraphStore + ?Sized>(graph: &G) -> Option<usize> {
    let n = graph.vertex_count();
    (0..n)
        .find(|&i| graph.in_degree_at(i) == 0)
        .or((n > 0).then_some(0))
}

/// The traversal engine.
///
/// Stateless: every call builds and returns its own [`SearchResult`].
/// The graph is borrowed immutably for the whole call.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitEngine;

impl VisitEngine {
    /// Create a new visit engine.
    pub fn new() -> Self {
        Self
    }

    /// Run a visit.
    ///
    /// Fails before building any state if the request is invalid: unknown
    /// source, or Dijkstra over an unweighted store or a negative weight.
    /// An empty graph yields an empty result.
    pub fn visit<G: GraphStore + ?Sized>(
        &self,
        graph: &G,
        params: VisitParams,
    ) -> GraphResult<SearchResult> {
        let search_type = params.search_type;
        if search_type == SearchType::Dijkstra {
            check_dijkstra(graph)?;
        }

        let root = match &params.source {
            Some(v) => Some(graph.require_index(v)?),
            None => default_root(graph),
        };

        let mut state = SearchResult::new(search_type, graph);
        let Some(root) = root else {
            debug!("{search_type} visit over an empty graph");
            return Ok(state);
        };
        state.set_source(root);
        debug!(
            "{search_type} visit from {} over {} vertices",
            graph.vertices()[root],
            graph.vertex_count()
        );

        match search_type {
            SearchType::Bfs => walk(graph, &mut state, FifoFrontier::default(), root),
            SearchType::Dfs => walk(graph, &mut state, LifoFrontier::default(), root),
            SearchType::DfsTot => grow_forest(graph, &mut state, std::iter::once(root)),
            SearchType::Dijkstra => walk(graph, &mut state, PriorityFrontier::default(), root),
        }

        debug!(
            "{search_type} visit reached {} of {} vertices in {} ticks",
            state.reached_count(),
            state.vertex_count(),
            state.ticks()
        );
        Ok(state)
    }

    /// Depth-first forest trying `roots` first, in the given order, then
    /// every remaining vertex in store order.
    ///
    /// Produces a `DfsTot` result whose source is the first root tried.
    pub fn dfs_forest<G: GraphStore + ?Sized>(
        &self,
        graph: &G,
        roots: &[Vertex],
    ) -> GraphResult<SearchResult> {
        let roots = roots
            .iter()
            .map(|v| graph.require_index(v))
            .collect::<GraphResult<Vec<usize>>>()?;

        let mut state = SearchResult::new(SearchType::DfsTot, graph);
        let first = roots.first().copied().or_else(|| default_root(graph));
        if let Some(first) = first {
            state.set_source(first);
        }
        grow_forest(graph, &mut state, roots);
        debug!(
            "dfs forest grew {} trees over {} vertices",
            state.trees().len(),
            state.vertex_count()
        );
        Ok(state)
    }
}

/// Grow DFS trees from each still-white vertex of `roots`, then from each
/// still-white vertex in store order.
fn grow_forest<G, I>(graph: &G, state: &mut SearchResult, roots: I)
where
    G: GraphStore + ?Sized,
    I: IntoIterator<Item = usize>,
{
    let candidates = roots.into_iter().chain(0..graph.vertex_count());
    for v in candidates {
        if state.color_at(v) == Color::White {
            walk(graph, state, LifoFrontier::default(), v);
        }
    }
}

/// Discover `root`, seed the frontier, and drain it.
fn walk<G, F>(graph: &G, state: &mut SearchResult, mut frontier: F, root: usize)
where
    G: GraphStore + ?Sized,
    F: Frontier,
{
    state.begin_tree();
    state.discover(root, None);
    state.set_distance(root, 0.0);
    frontier.seed(graph, root);
    while frontier.step(graph, state) {}
}

fn check_dijkstra<G: GraphStore + ?Sized>(graph: &G) -> GraphResult<()> {
    if !graph.is_weighted() {
        return Err(GraphError::UnsupportedOperation(
            "Dijkstra visit on an unweighted graph".to_string(),
        ));
    }
    for (s, source) in graph.vertices().iter().enumerate() {
        for (t, w) in graph.neighbors(s) {
            if w < 0.0 {
                return Err(GraphError::UnsupportedOperation(format!(
                    "Dijkstra visit with negative edge weight {w} on {source} -> {}",
                    graph.vertices()[t]
                )));
            }
        }
    }
    Ok(())
}

/// Visit from the default root.
pub fn visit<G: GraphStore + ?Sized>(graph: &G, search_type: SearchType) -> GraphResult<SearchResult> {
    VisitEngine::new().visit(graph, VisitParams::new(search_type))
}

/// Visit from an explicit source.
pub fn visit_from<G: GraphStore + ?Sized>(
    graph: &G,
    search_type: SearchType,
    source: &Vertex,
) -> GraphResult<SearchResult> {
    VisitEngine::new().visit(graph, VisitParams::from_source(search_type, source.clone()))
}
