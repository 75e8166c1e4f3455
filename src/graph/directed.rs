//! An adjacency-list directed graph with cycle detection.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::graph::Vertex;

/// An adjacency-list directed graph.
///
/// Vertices are created implicitly by [`add_edge`](Self::add_edge) and the
/// structure is write-append-only: there is no removal API. The one query is
/// [`has_cycle`](Self::has_cycle), the three-color reachability check.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | O(1) | idempotent |
/// | `add_edge` | O(1) amortized | endpoints auto-created |
/// | `has_cycle` | O(V + E) | short-circuits on first cycle |
pub struct DirectedGraph<K> {
    vertices: HashMap<K, Vertex<K>>,
}

impl<K: Eq + Hash + Clone> DirectedGraph<K> {
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

    /// Inserts a vertex with no connections if one is not already present.
    ///
    /// Idempotent: re-adding an existing name leaves its connections alone.
    pub fn add_vertex(&mut self, name: K) {
        self.vertices
            .entry(name.clone())
            .or_insert_with(|| Vertex::new(name));
        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertices.len(), "vertex ensured");
    }

    /// Adds the directed edge `source -> destination`.
    ///
    /// Both endpoints are created if absent. The reverse edge is not added,
    /// and repeated calls append a parallel edge each time.
    pub fn add_edge(&mut self, source: K, destination: K) {
        self.add_vertex(source.clone());
        self.add_vertex(destination.clone());
        if let Some(vertex) = self.vertices.get_mut(&source) {
            vertex.connect(destination);
        }
    }

    /// Returns `true` if any directed cycle exists anywhere in the graph,
    /// including in disconnected components.
    ///
    /// Three-color DFS: every vertex is `unvisited` until a component scan
    /// reaches it, `visiting` while it sits on the active DFS path, and
    /// `visited` once proven cycle-free. An edge into a `visiting` vertex is
    /// a back-edge to an ancestor on the current path, which closes a cycle
    /// and short-circuits the whole check. The DFS runs over an explicit
    /// stack of `(vertex, connection-cursor)` frames, so arbitrarily deep
    /// graphs cannot overflow the call stack.
    pub fn has_cycle(&self) -> bool {
        let mut visiting: HashSet<&K> = HashSet::new();
        let mut visited: HashSet<&K> = HashSet::new();
        let mut stack: Vec<(&K, usize)> = Vec::new();

        for start in self.vertices.keys() {
            if visited.contains(start) {
                continue;
            }

            visiting.insert(start);
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (name, cursor) = (frame.0, frame.1);
                let connections = self.vertices[name].connections();

                if cursor < connections.len() {
                    frame.1 += 1;
                    let neighbor = &connections[cursor];

                    if visited.contains(neighbor) {
                        continue;
                    }
                    if visiting.contains(neighbor) {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(
                            checked = visited.len(),
                            "back-edge found, cycle detected"
                        );
                        return true;
                    }
                    visiting.insert(neighbor);
                    stack.push((neighbor, 0));
                } else {
                    // All neighbors proven safe from here.
                    stack.pop();
                    visiting.remove(name);
                    visited.insert(name);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(checked = visited.len(), "no cycle found");
        false
    }
}

impl<K: Eq + Hash + Clone> Default for DirectedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}
