//! An adjacency-list undirected graph with removal and lazy traversals.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::{Bfs, Dfs, GraphError, Vertex};

/// An adjacency-list graph with symmetric edges.
///
/// Every edge is stored on both endpoints: if vertex A lists B, then B lists
/// A. All mutation goes through the graph so the symmetry invariant cannot
/// be broken from outside.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | O(1) | idempotent |
/// | `add_edge` | O(1) amortized | both directions |
/// | `remove_edge` | O(degree) | one occurrence per side |
/// | `remove_vertex` | O(V + E) | scrubs every former neighbor |
/// | traversals | O(V + E) total | lazy iterators |
pub struct UndirectedGraph<K> {
    vertices: HashMap<K, Vertex<K>>,
}

impl<K: Eq + Hash + Clone> UndirectedGraph<K> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex with the given name, if present.
    pub fn vertex(&self, name: &K) -> Option<&Vertex<K>> {
        self.vertices.get(name)
    }

    /// Inserts a vertex with no connections if absent and returns it.
    ///
    /// Idempotent: re-adding an existing name leaves its connections alone.
    pub fn add_vertex(&mut self, name: K) -> &Vertex<K> {
        &*self
            .vertices
            .entry(name.clone())
            .or_insert_with(|| Vertex::new(name))
    }

    /// Adds the symmetric edge `source - destination`.
    ///
    /// Both endpoints are created if absent; each is appended to the other's
    /// connection list. Repeated calls add a parallel edge each time. A
    /// self-edge appears twice on its single endpoint.
    pub fn add_edge(&mut self, source: K, destination: K) {
        self.add_vertex(source.clone());
        self.add_vertex(destination.clone());

        if let Some(vertex) = self.vertices.get_mut(&source) {
            vertex.connect(destination.clone());
        }
        if let Some(vertex) = self.vertices.get_mut(&destination) {
            vertex.connect(source);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertices.len(), "edge added");
    }

    /// Removes one occurrence of the symmetric edge `source - destination`.
    ///
    /// Exactly one entry is removed from each endpoint's connection list;
    /// parallel edges between the same pair survive. Nothing is mutated if
    /// either endpoint is missing.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] naming whichever endpoint is absent.
    pub fn remove_edge(&mut self, source: &K, destination: &K) -> Result<(), GraphError<K>> {
        if !self.vertices.contains_key(source) {
            return Err(GraphError::VertexNotFound(source.clone()));
        }
        if !self.vertices.contains_key(destination) {
            return Err(GraphError::VertexNotFound(destination.clone()));
        }

        if let Some(vertex) = self.vertices.get_mut(source) {
            vertex.remove_connection(destination);
        }
        if let Some(vertex) = self.vertices.get_mut(destination) {
            vertex.remove_connection(source);
        }
        Ok(())
    }

    /// Removes a vertex along with every edge incident to it, returning the
    /// removed vertex.
    ///
    /// Each connection is popped off the target and its mirror entry is
    /// removed from the neighbor, so no former neighbor keeps a dangling
    /// reference.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex does not exist; the
    /// graph is left untouched.
    pub fn remove_vertex(&mut self, name: &K) -> Result<Vertex<K>, GraphError<K>> {
        if !self.vertices.contains_key(name) {
            return Err(GraphError::VertexNotFound(name.clone()));
        }

        while let Some(neighbor) = self
            .vertices
            .get_mut(name)
            .and_then(Vertex::pop_connection)
        {
            // Mirror entry; for a self-edge this strips the duplicate from
            // the vertex being removed.
            if let Some(other) = self.vertices.get_mut(&neighbor) {
                other.remove_connection(name);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertices.len() - 1, "vertex removed");
        self.vertices
            .remove(name)
            .ok_or_else(|| GraphError::VertexNotFound(name.clone()))
    }

    /// Returns a lazy breadth-first traversal of the component containing
    /// `start`, ordered by distance with ties broken by connection
    /// insertion order.
    ///
    /// An absent `start` yields an empty sequence. The traversal owns its
    /// frontier and seen-set, so every call starts fresh.
    pub fn breadth_first_traversal(&self, start: &K) -> Bfs<'_, K> {
        Bfs::new(self, start)
    }

    /// Returns a lazy depth-first pre-order traversal of the component
    /// containing `start`, descending into neighbors in connection
    /// insertion order.
    ///
    /// An absent `start` yields an empty sequence. The traversal owns its
    /// stack and seen-set, so every call starts fresh.
    pub fn depth_first_traversal(&self, start: &K) -> Dfs<'_, K> {
        Dfs::new(self, start)
    }
}

impl<K: Eq + Hash + Clone> Default for UndirectedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}
