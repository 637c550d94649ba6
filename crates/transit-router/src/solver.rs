//! Shortest-path capability and the default Dijkstra implementation.
//!
//! # Pluggability
//!
//! [`TransitRouter`](crate::TransitRouter) only builds the graph and
//! interprets results; finding the minimum-weight path is delegated to a
//! [`PathSolver`], so applications can swap in A*, contraction hierarchies or
//! a precomputed all-pairs table without touching the graph encoding.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use transit_core::{EdgeId, Minutes, VertexId};

use crate::graph::TransitGraph;

// ── SolvedPath ────────────────────────────────────────────────────────────────

/// A minimum-weight path: the edges to traverse in order and their total
/// weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedPath {
    pub edges: Vec<EdgeId>,
    pub weight: Minutes,
}

// ── PathSolver trait ──────────────────────────────────────────────────────────

/// Minimum-weight path search over a [`TransitGraph`] with non-negative
/// weights.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: a built router is shared read-only
/// between concurrent queries.
pub trait PathSolver: Send + Sync {
    /// Minimum-weight path from `from` to `to`, or `None` if `to` is
    /// unreachable.  `from == to` yields an empty path of weight zero.
    fn solve(&self, graph: &TransitGraph, from: VertexId, to: VertexId) -> Option<SolvedPath>;
}

// ── DijkstraSolver ────────────────────────────────────────────────────────────

/// Binary-heap Dijkstra over the CSR adjacency.  Stateless; every query
/// allocates its own `O(V)` scratch arrays.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraSolver;

impl PathSolver for DijkstraSolver {
    fn solve(&self, graph: &TransitGraph, from: VertexId, to: VertexId) -> Option<SolvedPath> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap key with a total order over non-negative weights.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(Minutes);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra(graph: &TransitGraph, from: VertexId, to: VertexId) -> Option<SolvedPath> {
    let n = graph.vertex_count();
    if from.index() >= n || to.index() >= n {
        return None;
    }
    if from == to {
        return Some(SolvedPath { edges: vec![], weight: 0.0 });
    }

    // dist[v] = best known weight to reach v.
    let mut dist = vec![Minutes::INFINITY; n];
    // prev_edge[v] = edge that reached v; None for unreached vertices and the source.
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];

    dist[from.index()] = 0.0;

    // Reverse turns the max-heap into a min-heap; VertexId breaks ties
    // deterministically.
    let mut heap: BinaryHeap<Reverse<(Cost, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), vertex))) = heap.pop() {
        if vertex == to {
            return Some(reconstruct(graph, &prev_edge, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for edge in graph.out_edges(vertex) {
            let next = graph.edge_to[edge.index()];
            let next_cost = cost + graph.edge_weight[edge.index()];

            if next_cost < dist[next.index()] {
                dist[next.index()] = next_cost;
                prev_edge[next.index()] = Some(edge);
                heap.push(Reverse((Cost(next_cost), next)));
            }
        }
    }

    None
}

fn reconstruct(
    graph: &TransitGraph,
    prev_edge: &[Option<EdgeId>],
    to: VertexId,
    weight: Minutes,
) -> SolvedPath {
    let mut edges = Vec::new();
    let mut cur = to;
    while let Some(e) = prev_edge[cur.index()] {
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();
    SolvedPath { edges, weight }
}
