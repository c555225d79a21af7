//! Traversal engine: the generalized visit and its result model.

mod frontier;
pub mod result;
pub mod visit;

pub use result::{Color, SearchResult};
pub use visit::{default_root, visit, visit_from, VisitEngine, VisitParams};
