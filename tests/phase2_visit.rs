//! Phase 2 tests: Visit engine (BFS, DFS, DFS forest, Dijkstra).

use digraph_visit::engine::{default_root, visit, visit_from, Color, VisitEngine, VisitParams};
use digraph_visit::graph::{AdjListGraph, AdjMatrixGraph, GraphBuilder, GraphStore};
use digraph_visit::types::{GraphError, SearchType, Vertex};
use digraph_visit::SearchResult;

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn v(label: &str) -> Vertex {
    Vertex::new(label)
}

/// A, B, C, D with A->B, A->C, B->C, B->D, C->D.
fn bfs_scenario() -> GraphBuilder {
    GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "C")
        .edge("B", "D")
        .edge("C", "D")
}

/// Two weighted routes from A to D; the short one runs through B and C.
fn dijkstra_scenario() -> GraphBuilder {
    GraphBuilder::weighted()
        .vertices(["A", "B", "C", "D", "F", "G", "H"])
        .weighted_edge("A", "B", 2.0)
        .weighted_edge("A", "F", 6.0)
        .weighted_edge("B", "C", 1.0)
        .weighted_edge("C", "D", 1.0)
        .weighted_edge("C", "H", 3.0)
        .weighted_edge("F", "D", 7.0)
        .weighted_edge("F", "G", 3.0)
        .weighted_edge("G", "H", 3.0)
}

fn times(result: &SearchResult, label: &str) -> (Option<u32>, Option<u32>) {
    (
        result.start_time(&v(label)).unwrap(),
        result.end_time(&v(label)).unwrap(),
    )
}

/// Invariants every completed visit must satisfy.
fn check_invariants<G: GraphStore>(graph: &G, result: &SearchResult) {
    let reached = result.reached_count() as u32;
    for vertex in graph.vertices() {
        match result.color(vertex).unwrap() {
            Color::Black => {
                let start = result.start_time(vertex).unwrap().unwrap();
                let end = result.end_time(vertex).unwrap().unwrap();
                assert!(start < end, "{} finished before discovery", vertex);
                assert!(start >= 1 && end <= 2 * reached);
            }
            Color::White => {
                assert_eq!(result.start_time(vertex).unwrap(), None);
                assert_eq!(result.end_time(vertex).unwrap(), None);
                assert!(result.parent_of(vertex).unwrap().is_none());
            }
            Color::Gray => panic!("{} left gray after the visit", vertex),
        }
        if let Some(parent) = result.parent_of(vertex).unwrap() {
            assert!(graph.contains_edge(parent, vertex));
            let w = result.edge_weight(parent, vertex).unwrap();
            assert_eq!(graph.edge_weight(parent, vertex).unwrap(), w);
        }
    }
    assert_eq!(result.ticks(), 2 * reached);
}

// ==================== Root Selection ====================

#[test]
fn test_default_root_prefers_in_degree_zero() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("C", "A")
        .build_list()
        .unwrap();
    assert_eq!(default_root(&graph), Some(2));

    let cyclic = GraphBuilder::new()
        .vertices(["A", "B"])
        .edge("A", "B")
        .edge("B", "A")
        .build_list()
        .unwrap();
    assert_eq!(default_root(&cyclic), Some(0));

    assert_eq!(default_root(&AdjListGraph::new()), None);
}

// ==================== BFS ====================

#[test]
fn test_bfs_distance_scenario() {
    init_logger();
    let graph = bfs_scenario().build_list().unwrap();
    let result = visit(&graph, SearchType::Bfs).unwrap();

    assert_eq!(result.search_type(), SearchType::Bfs);
    assert_eq!(result.source(), Some(&v("A")));
    assert_eq!(result.distance(&v("A")).unwrap(), 0.0);
    assert_eq!(result.distance(&v("B")).unwrap(), 1.0);
    assert_eq!(result.distance(&v("C")).unwrap(), 1.0);
    assert_eq!(result.distance(&v("D")).unwrap(), 2.0);
    check_invariants(&graph, &result);
}

#[test]
fn test_bfs_timestamps_and_parents() {
    let graph = bfs_scenario().build_list().unwrap();
    let result = visit(&graph, SearchType::Bfs).unwrap();

    assert_eq!(times(&result, "A"), (Some(1), Some(4)));
    assert_eq!(times(&result, "B"), (Some(2), Some(6)));
    assert_eq!(times(&result, "C"), (Some(3), Some(7)));
    assert_eq!(times(&result, "D"), (Some(5), Some(8)));

    assert_eq!(result.parent_of(&v("A")).unwrap(), None);
    assert_eq!(result.parent_of(&v("C")).unwrap(), Some(&v("A")));
    assert_eq!(result.parent_of(&v("D")).unwrap(), Some(&v("B")));

    let order: Vec<&str> = result.iter().map(Vertex::label).collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_bfs_from_explicit_source() {
    let graph = bfs_scenario().build_matrix().unwrap();
    let result = visit_from(&graph, SearchType::Bfs, &v("B")).unwrap();

    assert_eq!(result.source(), Some(&v("B")));
    assert_eq!(result.distance(&v("D")).unwrap(), 1.0);
    assert_eq!(result.distance(&v("A")).unwrap(), f64::INFINITY);
    assert_eq!(result.color(&v("A")).unwrap(), Color::White);
    assert_eq!(result.reached_count(), 3);
    check_invariants(&graph, &result);
}

// ==================== DFS ====================

#[test]
fn test_dfs_timestamps() {
    let graph = bfs_scenario().build_list().unwrap();
    let result = visit(&graph, SearchType::Dfs).unwrap();

    assert_eq!(times(&result, "A"), (Some(1), Some(8)));
    assert_eq!(times(&result, "B"), (Some(2), Some(7)));
    assert_eq!(times(&result, "C"), (Some(3), Some(6)));
    assert_eq!(times(&result, "D"), (Some(4), Some(5)));
    let path = result.path_to(&v("D")).unwrap().unwrap();
    assert_eq!(path, vec![v("A"), v("B"), v("C"), v("D")]);

    let finished: Vec<&str> = result.finish_order().map(Vertex::label).collect();
    assert_eq!(finished, vec!["D", "C", "B", "A"]);
    assert!(!result.has_back_edge());
    check_invariants(&graph, &result);
}

#[test]
fn test_dfs_parenthesis_structure() {
    let graph = bfs_scenario().build_matrix().unwrap();
    let result = visit(&graph, SearchType::Dfs).unwrap();

    // Intervals of any two vertices are either nested or disjoint.
    let intervals: Vec<(u32, u32)> = graph
        .vertices()
        .iter()
        .map(|x| {
            (
                result.start_time(x).unwrap().unwrap(),
                result.end_time(x).unwrap().unwrap(),
            )
        })
        .collect();
    for &(s1, e1) in &intervals {
        for &(s2, e2) in &intervals {
            let nested = (s1 <= s2 && e2 <= e1) || (s2 <= s1 && e1 <= e2);
            let disjoint = e1 < s2 || e2 < s1;
            assert!(nested || disjoint);
        }
    }
}

#[test]
fn test_dfs_single_source_leaves_unreachable_white() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("C", "D")
        .build_list()
        .unwrap();
    let result = visit(&graph, SearchType::Dfs).unwrap();

    assert_eq!(result.reached_count(), 2);
    assert!(!result.reached(&v("C")).unwrap());
    assert_eq!(times(&result, "C"), (None, None));
    check_invariants(&graph, &result);
}

#[test]
fn test_dfs_tot_covers_every_vertex() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("C", "D")
        .build_list()
        .unwrap();
    let result = visit(&graph, SearchType::DfsTot).unwrap();

    assert_eq!(result.reached_count(), 4);
    assert_eq!(times(&result, "A"), (Some(1), Some(4)));
    assert_eq!(times(&result, "B"), (Some(2), Some(3)));
    assert_eq!(times(&result, "C"), (Some(5), Some(8)));
    assert_eq!(times(&result, "D"), (Some(6), Some(7)));
    assert_eq!(result.parent_of(&v("C")).unwrap(), None);

    let trees: Vec<Vec<&str>> = result
        .trees()
        .into_iter()
        .map(|t| t.into_iter().map(Vertex::label).collect())
        .collect();
    assert_eq!(trees, vec![vec!["A", "B"], vec!["C", "D"]]);
    check_invariants(&graph, &result);
}

#[test]
fn test_dfs_tot_starts_from_default_root() {
    // C is the only vertex without incoming edges.
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("C", "A")
        .build_matrix()
        .unwrap();
    let result = visit(&graph, SearchType::DfsTot).unwrap();
    assert_eq!(result.source(), Some(&v("C")));
    assert_eq!(times(&result, "C"), (Some(1), Some(6)));
    assert_eq!(result.trees().len(), 1);
}

#[test]
fn test_dfs_records_back_edges() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("B", "C")
        .edge("C", "A")
        .edge("C", "C")
        .build_list()
        .unwrap();
    let result = visit(&graph, SearchType::DfsTot).unwrap();
    let back: Vec<(&str, &str)> = result
        .back_edges()
        .into_iter()
        .map(|(a, b)| (a.label(), b.label()))
        .collect();
    assert_eq!(back, vec![("C", "A"), ("C", "C")]);
}

#[test]
fn test_dfs_forest_with_explicit_roots() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B")
        .edge("B", "C")
        .build_list()
        .unwrap();
    let result = VisitEngine::new()
        .dfs_forest(&graph, &[v("C"), v("B")])
        .unwrap();

    assert_eq!(result.search_type(), SearchType::DfsTot);
    assert_eq!(result.source(), Some(&v("C")));
    let trees: Vec<Vec<&str>> = result
        .trees()
        .into_iter()
        .map(|t| t.into_iter().map(Vertex::label).collect())
        .collect();
    assert_eq!(trees, vec![vec!["C"], vec!["B"], vec!["A"]]);

    match VisitEngine::new().dfs_forest(&graph, &[v("Z")]) {
        Err(GraphError::VertexNotFound(_)) => {}
        other => panic!("Expected VertexNotFound, got {:?}", other.map(|r| r.ticks())),
    }
}

#[test]
fn test_dfs_deep_chain_without_recursion() {
    let mut graph = AdjListGraph::new();
    let n = 100_000;
    for i in 0..n {
        graph.add_vertex(Vertex::new(format!("v{}", i)));
    }
    for i in 0..n - 1 {
        graph
            .add_edge(&Vertex::new(format!("v{}", i)), &Vertex::new(format!("v{}", i + 1)))
            .unwrap();
    }
    let result = visit(&graph, SearchType::Dfs).unwrap();
    assert_eq!(result.reached_count(), n);
    let last = Vertex::new(format!("v{}", n - 1));
    assert_eq!(result.start_time(&last).unwrap(), Some(n as u32));
    assert_eq!(result.end_time(&last).unwrap(), Some(n as u32 + 1));
}

// ==================== Dijkstra ====================

#[test]
fn test_dijkstra_scenario() {
    init_logger();
    for graph in [
        Box::new(dijkstra_scenario().build_list().unwrap()) as Box<dyn GraphStore>,
        Box::new(dijkstra_scenario().build_matrix().unwrap()) as Box<dyn GraphStore>,
    ] {
        let result = visit(&*graph, SearchType::Dijkstra).unwrap();
        assert_eq!(result.distance(&v("D")).unwrap(), 4.0);
        assert_eq!(result.distance(&v("H")).unwrap(), 6.0);
        assert_eq!(result.distance(&v("G")).unwrap(), 9.0);
        assert_eq!(result.parent_of(&v("D")).unwrap(), Some(&v("C")));
        assert_eq!(result.parent_of(&v("H")).unwrap(), Some(&v("C")));
    }
}

#[test]
fn test_dijkstra_ticks_follow_pop_order() {
    let graph = dijkstra_scenario().build_matrix().unwrap();
    let result = visit(&graph, SearchType::Dijkstra).unwrap();

    assert_eq!(times(&result, "A"), (Some(1), Some(2)));
    assert_eq!(times(&result, "B"), (Some(3), Some(5)));
    assert_eq!(times(&result, "F"), (Some(4), Some(11)));
    assert_eq!(times(&result, "C"), (Some(6), Some(7)));
    assert_eq!(times(&result, "D"), (Some(8), Some(10)));
    assert_eq!(times(&result, "H"), (Some(9), Some(13)));
    assert_eq!(times(&result, "G"), (Some(12), Some(14)));

    // Finish order is non-decreasing in distance.
    let distances: Vec<f64> = result
        .finish_order()
        .map(|x| result.distance(x).unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    check_invariants(&graph, &result);
}

#[test]
fn test_dijkstra_parents_are_tight() {
    let graph = dijkstra_scenario().build_list().unwrap();
    let result = visit(&graph, SearchType::Dijkstra).unwrap();
    for vertex in graph.vertices() {
        if let Some(parent) = result.parent_of(vertex).unwrap() {
            let w = graph.edge_weight(parent, vertex).unwrap();
            assert_eq!(
                result.distance(vertex).unwrap(),
                result.distance(parent).unwrap() + w
            );
        }
    }
}

#[test]
fn test_dijkstra_reparents_on_shorter_path() {
    let graph = GraphBuilder::weighted()
        .vertices(["A", "B", "C"])
        .weighted_edge("A", "B", 5.0)
        .weighted_edge("A", "C", 1.0)
        .weighted_edge("C", "B", 1.0)
        .build_list()
        .unwrap();
    let result = visit(&graph, SearchType::Dijkstra).unwrap();

    assert_eq!(result.distance(&v("B")).unwrap(), 2.0);
    assert_eq!(result.parent_of(&v("B")).unwrap(), Some(&v("C")));
    assert_eq!(result.edge_weight(&v("C"), &v("B")).unwrap(), 1.0);
    match result.edge_weight(&v("A"), &v("B")) {
        Err(GraphError::EdgeNotFound { .. }) => {}
        other => panic!("Expected EdgeNotFound, got {:?}", other),
    }
    // B was discovered once, finished once.
    assert_eq!(times(&result, "B"), (Some(3), Some(6)));
}

#[test]
fn test_dijkstra_ties_follow_discovery_order() {
    init_logger();
    // Y is stored after X but reached first from A on the list backend.
    let build = || {
        GraphBuilder::weighted()
            .vertices(["A", "X", "Y"])
            .weighted_edge("A", "Y", 1.0)
            .weighted_edge("A", "X", 1.0)
    };

    let list = build().build_list().unwrap();
    let result = visit(&list, SearchType::Dijkstra).unwrap();
    assert_eq!(times(&result, "A"), (Some(1), Some(2)));
    assert_eq!(times(&result, "Y"), (Some(3), Some(5)));
    assert_eq!(times(&result, "X"), (Some(4), Some(6)));
    check_invariants(&list, &result);

    // The matrix backend reaches X first, so X finishes first.
    let matrix = build().build_matrix().unwrap();
    let result = visit(&matrix, SearchType::Dijkstra).unwrap();
    assert_eq!(times(&result, "X"), (Some(3), Some(5)));
    assert_eq!(times(&result, "Y"), (Some(4), Some(6)));
    check_invariants(&matrix, &result);
}

#[test]
fn test_dijkstra_tie_key_survives_improvement() {
    let graph = GraphBuilder::weighted()
        .vertices(["A", "B", "D", "C"])
        .weighted_edge("A", "C", 5.0)
        .weighted_edge("A", "B", 1.0)
        .weighted_edge("A", "D", 2.0)
        .weighted_edge("B", "C", 1.0)
        .build_list()
        .unwrap();
    let result = visit(&graph, SearchType::Dijkstra).unwrap();

    // C and D both settle at 2; C was discovered first and keeps that rank
    // after its distance drops from 5.
    assert_eq!(result.distance(&v("C")).unwrap(), 2.0);
    assert_eq!(result.distance(&v("D")).unwrap(), 2.0);
    assert_eq!(result.parent_of(&v("C")).unwrap(), Some(&v("B")));
    assert_eq!(times(&result, "B"), (Some(4), Some(6)));
    assert_eq!(times(&result, "C"), (Some(3), Some(7)));
    assert_eq!(times(&result, "D"), (Some(5), Some(8)));
    assert_eq!(result.ticks(), 8);
}

#[test]
fn test_dijkstra_rejects_unweighted_graph() {
    let graph = bfs_scenario().build_list().unwrap();
    match visit(&graph, SearchType::Dijkstra) {
        Err(GraphError::UnsupportedOperation(_)) => {}
        other => panic!("Expected UnsupportedOperation, got {:?}", other.map(|r| r.ticks())),
    }
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let graph = GraphBuilder::weighted()
        .vertices(["A", "B"])
        .weighted_edge("A", "B", -1.0)
        .build_matrix()
        .unwrap();
    match visit(&graph, SearchType::Dijkstra) {
        Err(GraphError::UnsupportedOperation(_)) => {}
        other => panic!("Expected UnsupportedOperation, got {:?}", other.map(|r| r.ticks())),
    }
}

// ==================== Result Queries + Errors ====================

#[test]
fn test_distance_undefined_for_depth_first() {
    let graph = bfs_scenario().build_list().unwrap();
    for st in [SearchType::Dfs, SearchType::DfsTot] {
        let result = visit(&graph, st).unwrap();
        match result.distance(&v("D")) {
            Err(GraphError::UnsupportedOperation(_)) => {}
            other => panic!("Expected UnsupportedOperation, got {:?}", other),
        }
        // Membership is checked first.
        match result.distance(&v("Z")) {
            Err(GraphError::VertexNotFound(_)) => {}
            other => panic!("Expected VertexNotFound, got {:?}", other),
        }
    }
}

#[test]
fn test_unknown_vertex_queries() {
    let graph = bfs_scenario().build_list().unwrap();
    let result = visit(&graph, SearchType::Bfs).unwrap();
    assert!(result.start_time(&v("Z")).unwrap_err().is_not_found());
    assert!(result.end_time(&v("Z")).unwrap_err().is_not_found());
    assert!(result.parent_of(&v("Z")).unwrap_err().is_not_found());
    assert!(result.color(&v("Z")).unwrap_err().is_not_found());
}

#[test]
fn test_unknown_source_rejected() {
    let graph = bfs_scenario().build_list().unwrap();
    let params = VisitParams::from_source(SearchType::Bfs, v("Z"));
    match VisitEngine::new().visit(&graph, params) {
        Err(GraphError::VertexNotFound(label)) => assert_eq!(label, "Z"),
        other => panic!("Expected VertexNotFound, got {:?}", other.map(|r| r.ticks())),
    }
}

#[test]
fn test_visit_empty_graph() {
    let graph = AdjMatrixGraph::weighted();
    for st in SearchType::ALL {
        let result = visit(&graph, st).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.source(), None);
        assert_eq!(result.ticks(), 0);
        assert_eq!(result.iter().count(), 0);
    }
}

#[test]
fn test_single_vertex() {
    let mut graph = AdjListGraph::new();
    graph.add_vertex(v("A"));
    let result = visit(&graph, SearchType::Bfs).unwrap();
    assert_eq!(times(&result, "A"), (Some(1), Some(2)));
    assert_eq!(result.distance(&v("A")).unwrap(), 0.0);
}

#[test]
fn test_visits_are_idempotent() {
    let graph = dijkstra_scenario().build_list().unwrap();
    for st in SearchType::ALL {
        let first = visit(&graph, st).unwrap();
        let second = visit(&graph, st).unwrap();
        let a: Vec<&Vertex> = first.iter().collect();
        let b: Vec<&Vertex> = second.iter().collect();
        assert_eq!(a, b);
        for vertex in graph.vertices() {
            assert_eq!(first.start_time(vertex).unwrap(), second.start_time(vertex).unwrap());
            assert_eq!(first.end_time(vertex).unwrap(), second.end_time(vertex).unwrap());
            assert_eq!(first.parent_of(vertex).unwrap(), second.parent_of(vertex).unwrap());
        }
    }
}

#[test]
fn test_result_iterates_in_discovery_order() {
    let graph = dijkstra_scenario().build_list().unwrap();
    let result = visit(&graph, SearchType::Dijkstra).unwrap();
    let labels: Vec<&str> = (&result).into_iter().map(Vertex::label).collect();
    assert_eq!(labels, vec!["A", "B", "F", "C", "D", "H", "G"]);
    assert_eq!(result.tree_edges().len(), 6);
}
