//! Directed weighted graph and builder.
//!
//! # Data layout
//!
//! Edge ids are assigned in insertion order and never change, because the
//! router keys its itinerary side table by `EdgeId`.  Outgoing adjacency is
//! stored in **Compressed Sparse Row (CSR)** form as a permutation of edge
//! ids grouped by source vertex:
//!
//! ```text
//! out_edges[ vertex_out_start[v] .. vertex_out_start[v+1] ]
//! ```
//!
//! Iteration over a vertex's outgoing edges is therefore a contiguous scan.

use transit_core::{EdgeId, Minutes, VertexId};

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Immutable directed graph with non-negative edge weights in minutes.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Debug)]
pub struct TransitGraph {
    /// CSR row pointer into `out_edges`.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    /// Edge ids grouped by source vertex.
    pub out_edges: Vec<EdgeId>,

    /// Source vertex of each edge, indexed by `EdgeId`.
    pub edge_from: Vec<VertexId>,

    /// Destination vertex of each edge.
    pub edge_to: Vec<VertexId>,

    /// Weight of each edge.
    pub edge_weight: Vec<Minutes>,
}

impl TransitGraph {
    pub fn vertex_count(&self) -> usize {
        self.vertex_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Outgoing edges of `vertex`, in insertion order.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end   = self.vertex_out_start[vertex.index() + 1] as usize;
        self.out_edges[start..end].iter().copied()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`TransitGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use transit_router::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_vertex();
/// let c = b.add_vertex();
/// let e = b.add_edge(a, c, 1.5);
/// let g = b.build();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_to[e.index()], c);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertex_count: u32,
    edge_from:    Vec<VertexId>,
    edge_to:      Vec<VertexId>,
    edge_weight:  Vec<Minutes>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate edge storage; the router knows its edge count up front.
    pub fn with_edge_capacity(edges: usize) -> Self {
        Self {
            vertex_count: 0,
            edge_from:    Vec::with_capacity(edges),
            edge_to:      Vec::with_capacity(edges),
            edge_weight:  Vec::with_capacity(edges),
        }
    }

    /// Allocate a vertex and return its id (sequential from 0).
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertex_count);
        self.vertex_count += 1;
        id
    }

    /// Add a directed edge and return its id (sequential from 0).
    ///
    /// # Panics
    /// Panics in debug mode on a negative or non-finite weight.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Minutes) -> EdgeId {
        debug_assert!(weight.is_finite() && weight >= 0.0, "bad edge weight {weight}");
        debug_assert!(from.0 < self.vertex_count && to.0 < self.vertex_count);
        let id = EdgeId(self.edge_to.len() as u32);
        self.edge_from.push(from);
        self.edge_to.push(to);
        self.edge_weight.push(weight);
        id
    }

    pub fn vertex_count(&self) -> usize { self.vertex_count as usize }
    pub fn edge_count(&self) -> usize { self.edge_to.len() }

    /// Consume the builder and produce a [`TransitGraph`].
    pub fn build(self) -> TransitGraph {
        let vertex_count = self.vertex_count as usize;

        // Stable sort keeps insertion order among edges sharing a source.
        let mut out_edges: Vec<EdgeId> = (0..self.edge_to.len() as u32).map(EdgeId).collect();
        out_edges.sort_by_key(|e| self.edge_from[e.index()].0);

        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for from in &self.edge_from {
            vertex_out_start[from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, out_edges.len());

        TransitGraph {
            vertex_out_start,
            out_edges,
            edge_from:   self.edge_from,
            edge_to:     self.edge_to,
            edge_weight: self.edge_weight,
        }
    }
}
