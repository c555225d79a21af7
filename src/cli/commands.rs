//! CLI command implementations.

use std::path::Path;

use crate::analysis::{
    all_pairs_shortest_paths, is_cyclic, kahn_order, strongly_connected_components,
    topological_sort,
};
use crate::engine::{default_root, SearchResult, VisitEngine, VisitParams};
use crate::format::document::empty_store;
use crate::format::{GraphReader, GraphWriter};
use crate::graph::StorageKind;
use crate::types::{GraphError, GraphResult, SearchType, Vertex};

/// Create a new empty graph document.
pub fn cmd_create(path: &Path, storage: StorageKind, weighted: bool) -> GraphResult<()> {
    let graph = empty_store(storage, weighted);
    GraphWriter::default().write_to_file(graph.as_ref(), path)?;
    println!(
        "Created {} ({}, {})",
        path.display(),
        storage,
        if weighted { "weighted" } else { "unweighted" }
    );
    Ok(())
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let root = default_root(graph.as_ref()).and_then(|i| graph.vertex_at(i));
    let cyclic = is_cyclic(graph.as_ref())?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "storage": graph.storage_kind(),
            "weighted": graph.is_weighted(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "root": root,
            "cyclic": cyclic,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Storage: {}", graph.storage_kind());
        println!("Weighted: {}", graph.is_weighted());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        match root {
            Some(root) => println!("Root: {}", root),
            None => println!("Root: (empty graph)"),
        }
        println!("Cyclic: {}", cyclic);
    }
    Ok(())
}

/// Add a vertex to the graph.
pub fn cmd_add(path: &Path, label: &str, json: bool) -> GraphResult<()> {
    let vertex = Vertex::try_new(label)?;
    let mut graph = GraphReader::read_from_file(path)?;
    let added = graph.add_vertex(vertex.clone());
    if added {
        GraphWriter::default().write_to_file(graph.as_ref(), path)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": vertex, "added": added})
        );
    } else if added {
        println!("Added vertex {} to {}", vertex, path.display());
    } else {
        println!("Vertex {} already present", vertex);
    }
    Ok(())
}

/// Add an edge between two vertices.
pub fn cmd_link(
    path: &Path,
    source: &str,
    target: &str,
    weight: Option<f64>,
    json: bool,
) -> GraphResult<()> {
    let source = Vertex::try_new(source)?;
    let target = Vertex::try_new(target)?;
    let mut graph = GraphReader::read_from_file(path)?;
    let added = match weight {
        Some(w) => graph.add_weighted_edge(&source, &target, w)?,
        None => graph.add_edge(&source, &target)?,
    };
    if added {
        GraphWriter::default().write_to_file(graph.as_ref(), path)?;
    }
    let weight = graph.edge_weight(&source, &target)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "source": source,
                "target": target,
                "weight": weight,
                "added": added,
            })
        );
    } else if added {
        println!("Linked {} -> {} (weight {})", source, target, weight);
    } else {
        println!("Edge {} -> {} already present", source, target);
    }
    Ok(())
}

/// Run a visit and print the per-vertex bookkeeping.
pub fn cmd_visit(
    path: &Path,
    search_type: SearchType,
    source: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let params = match source {
        Some(label) => VisitParams::from_source(search_type, Vertex::try_new(label)?),
        None => VisitParams::new(search_type),
    };
    let result = VisitEngine::new().visit(graph.as_ref(), params)?;

    if json {
        let rows: Vec<serde_json::Value> = result
            .iter()
            .map(|v| visit_row(&result, v))
            .collect::<GraphResult<_>>()?;
        let out = serde_json::json!({
            "type": search_type,
            "source": result.source(),
            "reached": result.reached_count(),
            "vertices": rows,
            "back_edges": result
                .back_edges()
                .iter()
                .map(|(from, to)| serde_json::json!([from, to]))
                .collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        match result.source() {
            Some(s) => println!("{} from {}", search_type, s),
            None => println!("{} over an empty graph", search_type),
        }
        for v in result.iter() {
            let parent = result
                .parent_of(v)?
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| "-".to_string());
            let start = result.start_time(v)?.unwrap_or(0);
            let end = result.end_time(v)?.unwrap_or(0);
            if search_type.has_distances() {
                println!(
                    "  {:<12} parent {:<12} [{:>3}, {:>3}] distance {}",
                    v.label(),
                    parent,
                    start,
                    end,
                    result.distance(v)?
                );
            } else {
                println!(
                    "  {:<12} parent {:<12} [{:>3}, {:>3}]",
                    v.label(),
                    parent,
                    start,
                    end
                );
            }
        }
        let unreached = result.vertex_count() - result.reached_count();
        if unreached > 0 {
            println!("  ({} vertices not reached)", unreached);
        }
    }
    Ok(())
}

fn visit_row(result: &SearchResult, v: &Vertex) -> GraphResult<serde_json::Value> {
    let mut row = serde_json::json!({
        "vertex": v,
        "parent": result.parent_of(v)?,
        "start": result.start_time(v)?,
        "end": result.end_time(v)?,
    });
    if result.search_type().has_distances() {
        let d = result.distance(v)?;
        row["distance"] = if d.is_finite() {
            serde_json::json!(d)
        } else {
            serde_json::Value::Null
        };
    }
    Ok(row)
}

/// Report whether the graph contains a directed cycle.
pub fn cmd_cycle(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let cyclic = is_cyclic(graph.as_ref())?;

    if json {
        println!("{}", serde_json::json!({"cyclic": cyclic}));
    } else if cyclic {
        println!("Graph is cyclic");
    } else {
        println!("Graph is acyclic");
    }
    Ok(())
}

/// Print a topological order. `kahn` selects the in-degree peeling order.
pub fn cmd_topo(path: &Path, kahn: bool, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let order = if kahn {
        kahn_order(graph.as_ref()).ok_or_else(|| {
            GraphError::UnsupportedOperation("topological sort of a cyclic graph".to_string())
        })?
    } else {
        topological_sort(graph.as_ref())?
    };

    if json {
        println!("{}", serde_json::json!({"order": order}));
    } else {
        let labels: Vec<&str> = order.iter().map(Vertex::label).collect();
        println!("{}", labels.join(" "));
    }
    Ok(())
}

/// Print the strongly connected components.
pub fn cmd_scc(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let components = strongly_connected_components(graph.as_ref())?;

    if json {
        println!(
            "{}",
            serde_json::json!({"count": components.len(), "components": components})
        );
    } else {
        println!("{}", components);
    }
    Ok(())
}

/// Print the all-pairs shortest-path matrix.
pub fn cmd_paths(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let matrix = all_pairs_shortest_paths(graph.as_ref())?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&matrix).unwrap_or_default()
        );
    } else {
        let width = matrix
            .vertices()
            .iter()
            .map(|v| v.label().len())
            .max()
            .unwrap_or(1)
            .max(4);
        print!("{:width$}", "", width = width);
        for v in matrix.vertices() {
            print!(" {:>width$}", v.label(), width = width);
        }
        println!();
        for (v, row) in matrix.vertices().iter().zip(matrix.as_rows()) {
            print!("{:width$}", v.label(), width = width);
            for d in row {
                print!(" {:>width$}", format_distance(*d), width = width);
            }
            println!();
        }
    }
    Ok(())
}

fn format_distance(d: f64) -> String {
    if d.is_infinite() {
        "inf".to_string()
    } else {
        format!("{}", d)
    }
}
