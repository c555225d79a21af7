//! Frontier disciplines: the only thing that differs between search types.
//!
//! The engine discovers a root, seeds a frontier with it, then calls
//! [`Frontier::step`] until it reports exhaustion. Each discipline decides
//! which discovered-but-unfinished vertex to work on next and when to
//! finish it.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::GraphStore;

use super::result::{Color, SearchResult};

/// A frontier of discovered-but-unfinished vertices.
pub(crate) trait Frontier {
    /// Place an already discovered root on the frontier.
    fn seed<G: GraphStore + ?Sized>(&mut self, graph: &G, root: usize);

    /// Perform one unit of work. Returns false once the frontier is empty.
    fn step<G: GraphStore + ?Sized>(&mut self, graph: &G, state: &mut SearchResult) -> bool;
}

// ==================== FIFO (BFS) ====================

/// FIFO queue: a vertex is expanded completely, then finished.
#[derive(Default)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<usize>,
}

impl Frontier for FifoFrontier {
    fn seed<G: GraphStore + ?Sized>(&mut self, _graph: &G, root: usize) {
        self.queue.push_back(root);
    }

    fn step<G: GraphStore + ?Sized>(&mut self, graph: &G, state: &mut SearchResult) -> bool {
        let Some(u) = self.queue.pop_front() else {
            return false;
        };
        let next_distance = state.distance_at(u) + 1.0;
        for (v, w) in graph.neighbors(u) {
            if state.color_at(v) == Color::White {
                state.discover(v, Some((u, w)));
                state.set_distance(v, next_distance);
                self.queue.push_back(v);
            }
        }
        state.finish(u);
        true
    }
}

// ==================== LIFO (DFS) ====================

/// One suspended vertex on the explicit DFS stack.
struct Frame {
    vertex: usize,
    neighbors: Vec<(usize, f64)>,
    cursor: usize,
}

impl Frame {
    fn new<G: GraphStore + ?Sized>(graph: &G, vertex: usize) -> Self {
        Self {
            vertex,
            neighbors: graph.neighbors(vertex),
            cursor: 0,
        }
    }
}

/// LIFO stack of frames with neighbor cursors.
///
/// Each step examines a single edge of the top frame, which reproduces the
/// visitation order of recursive DFS without recursion depth limits.
#[derive(Default)]
pub(crate) struct LifoFrontier {
    stack: Vec<Frame>,
}

impl Frontier for LifoFrontier {
    fn seed<G: GraphStore + ?Sized>(&mut self, graph: &G, root: usize) {
        self.stack.push(Frame::new(graph, root));
    }

    fn step<G: GraphStore + ?Sized>(&mut self, graph: &G, state: &mut SearchResult) -> bool {
        let Some(top) = self.stack.last_mut() else {
            return false;
        };
        let u = top.vertex;
        let next = top.neighbors.get(top.cursor).copied();
        top.cursor += 1;

        match next {
            Some((v, w)) => match state.color_at(v) {
                Color::White => {
                    state.discover(v, Some((u, w)));
                    self.stack.push(Frame::new(graph, v));
                }
                Color::Gray => state.record_back_edge(u, v),
                Color::Black => {}
            },
            None => {
                self.stack.pop();
                state.finish(u);
            }
        }
        true
    }
}

// ==================== Priority (Dijkstra) ====================

/// Heap entry: tentative distance, ties broken by discovery order.
#[derive(Debug, Clone, Copy)]
struct Entry {
    distance: f64,
    /// Discovery tick of `vertex`; stamped once, so it survives re-pushes.
    discovered: u32,
    vertex: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.discovered.cmp(&other.discovered))
            .then(self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-heap keyed by tentative distance, with lazy decrease-key.
///
/// An improved vertex is pushed again; the older entry is discarded when it
/// surfaces because the vertex is already black by then.
#[derive(Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl Frontier for PriorityFrontier {
    fn seed<G: GraphStore + ?Sized>(&mut self, _graph: &G, root: usize) {
        // The root is alone on the heap; it needs no tie-break key.
        self.heap.push(Reverse(Entry {
            distance: 0.0,
            discovered: 0,
            vertex: root,
        }));
    }

    fn step<G: GraphStore + ?Sized>(&mut self, graph: &G, state: &mut SearchResult) -> bool {
        let Some(Reverse(entry)) = self.heap.pop() else {
            return false;
        };
        let u = entry.vertex;
        if state.color_at(u) == Color::Black {
            return true;
        }
        state.finish(u);

        let base = state.distance_at(u);
        for (v, w) in graph.neighbors(u) {
            let color = state.color_at(v);
            if color == Color::Black {
                continue;
            }
            let candidate = base + w;
            if candidate < state.distance_at(v) {
                if color == Color::White {
                    state.discover(v, Some((u, w)));
                } else {
                    state.reparent(v, u, w);
                }
                state.set_distance(v, candidate);
                self.heap.push(Reverse(Entry {
                    distance: candidate,
                    discovered: state.discovery_at(v),
                    vertex: v,
                }));
            }
        }
        true
    }
}
