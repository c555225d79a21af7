//! All data types for the digraph-visit library.

pub mod edge;
pub mod error;
pub mod search_type;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use search_type::SearchType;
pub use vertex::Vertex;

/// Weight reported by every edge of an unweighted store.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Value of the first discovery/finish tick of a visit.
pub const FIRST_TICK: u32 = 1;

/// Reject weights that would poison distance arithmetic.
pub(crate) fn check_weight(weight: f64) -> GraphResult<f64> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(GraphError::InvalidArgument(format!(
            "edge weight must be finite, got {weight}"
        )))
    }
}
