//! Analyses derived from the traversal engine.

pub mod cycle;
pub mod paths;
pub mod scc;
pub mod topo;

pub use cycle::{is_cyclic, is_dag, kahn_order};
pub use paths::{all_pairs_shortest_paths, DistanceMatrix};
pub use scc::{components_from_finish_order, strongly_connected_components, Components};
pub use topo::{reverse_postorder, topological_sort};
