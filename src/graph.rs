/*!
The directed graph holding the epsilon transitions of an automaton.
*/

use crate::nfa::StateId;

/// A directed graph over a fixed number of vertices, stored as adjacency
/// lists.
///
/// Vertices are named `0..vertex_count`. Edges can be added but never
/// removed, and parallel edges are kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<StateId>>,
    edges: usize,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self { adj: vec![Vec::new(); vertex_count], edges: 0 }
    }

    /// Add the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// When either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, from: StateId, to: StateId) {
        assert!(
            to < self.adj.len(),
            "edge target {} out of range for {} vertices",
            to,
            self.adj.len(),
        );
        self.adj[from].push(to);
        self.edges += 1;
    }

    /// The out-neighbors of `v`, in insertion order.
    ///
    /// # Panics
    ///
    /// When `v` is not a vertex of this graph.
    pub fn adj(&self, v: StateId) -> &[StateId] {
        &self.adj[v]
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// The number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
