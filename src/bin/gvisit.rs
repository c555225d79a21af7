//! CLI entry point for the `gvisit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use digraph_visit::cli::commands;
use digraph_visit::graph::StorageKind;
use digraph_visit::types::SearchType;
use digraph_visit::GraphError;

#[derive(Parser)]
#[command(
    name = "gvisit",
    about = "gvisit: traversals and structural analysis over directed graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph document
    Create {
        /// Path to the document to create
        file: PathBuf,
        /// Accept explicit edge weights
        #[arg(long)]
        weighted: bool,
        /// Storage layout: list or matrix
        #[arg(long, default_value = "list")]
        storage: String,
    },
    /// Display information about a graph document
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Add a vertex
    Add {
        /// Path to the graph document
        file: PathBuf,
        /// Vertex label
        label: String,
    },
    /// Add an edge between two vertices
    Link {
        /// Path to the graph document
        file: PathBuf,
        /// Source vertex label
        source: String,
        /// Target vertex label
        target: String,
        /// Edge weight (weighted graphs only)
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Run a traversal: bfs, dfs, dfs_tot or dijkstra
    Visit {
        /// Path to the graph document
        file: PathBuf,
        /// Search type
        #[arg(name = "type")]
        search_type: String,
        /// Start vertex (defaults to the first vertex with in-degree 0)
        #[arg(long)]
        source: Option<String>,
    },
    /// Report whether the graph has a directed cycle
    Cycle {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Print a topological order
    Topo {
        /// Path to the graph document
        file: PathBuf,
        /// Use in-degree peeling instead of reverse postorder
        #[arg(long)]
        kahn: bool,
    },
    /// Print the strongly connected components
    Scc {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Print all-pairs shortest-path distances
    Paths {
        /// Path to the graph document
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Create {
            file,
            weighted,
            storage,
        } => {
            let kind = match StorageKind::from_name(&storage) {
                Some(kind) => kind,
                None => {
                    eprintln!("Invalid storage: {}", storage);
                    process::exit(3);
                }
            };
            commands::cmd_create(&file, kind, weighted)
        }
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Add { file, label } => commands::cmd_add(&file, &label, json),
        Commands::Link {
            file,
            source,
            target,
            weight,
        } => commands::cmd_link(&file, &source, &target, weight, json),
        Commands::Visit {
            file,
            search_type,
            source,
        } => {
            let st = match SearchType::from_name(&search_type) {
                Some(st) => st,
                None => {
                    eprintln!("Invalid search type: {}", search_type);
                    process::exit(3);
                }
            };
            commands::cmd_visit(&file, st, source.as_deref(), json)
        }
        Commands::Cycle { file } => commands::cmd_cycle(&file, json),
        Commands::Topo { file, kahn } => commands::cmd_topo(&file, kahn, json),
        Commands::Scc { file } => commands::cmd_scc(&file, json),
        Commands::Paths { file } => commands::cmd_paths(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::InvalidArgument(_) => 3,
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
