//! The kinds of visit the engine can perform.

use serde::Serialize;

/// Search discipline of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Breadth-first search from a single source (FIFO frontier).
    Bfs,
    /// Depth-first search from a single source (LIFO frontier).
    Dfs,
    /// Depth-first search covering every vertex (DFS forest).
    DfsTot,
    /// Dijkstra shortest paths (priority frontier keyed by distance).
    Dijkstra,
}

impl SearchType {
    /// All search types, in declaration order.
    pub const ALL: [SearchType; 4] = [Self::Bfs, Self::Dfs, Self::DfsTot, Self::Dijkstra];

    /// Return a human-readable name for this search type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::DfsTot => "dfs_tot",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Parse a search type from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" => Some(Self::Bfs),
            "dfs" => Some(Self::Dfs),
            "dfs_tot" | "dfstot" | "dfs-tot" => Some(Self::DfsTot),
            "dijkstra" => Some(Self::Dijkstra),
            _ => None,
        }
    }

    /// Whether results of this type carry meaningful distances.
    pub fn has_distances(&self) -> bool {
        matches!(self, Self::Bfs | Self::Dijkstra)
    }

    /// Whether this visit uses the depth-first (LIFO) discipline.
    pub fn is_depth_first(&self) -> bool {
        matches!(self, Self::Dfs | Self::DfsTot)
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
