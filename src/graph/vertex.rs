//! A named graph vertex holding its adjacency list.

use core::fmt;

/// A vertex in an adjacency-list graph.
///
/// The connection list stores neighbor *identifiers*, never owned links:
/// the surrounding graph owns every vertex through its map, so cyclic
/// structures need no reference counting. Insertion order is preserved and
/// duplicates are permitted (parallel edges are not deduplicated).
///
/// Mutation is restricted to the owning graph: exposing `connect` and
/// friends publicly would let callers break the undirected symmetry
/// invariant.
#[derive(Clone, PartialEq, Eq)]
pub struct Vertex<K> {
    name: K,
    connections: Vec<K>,
}

impl<K> Vertex<K> {
    pub(crate) fn new(name: K) -> Self {
        Self {
            name,
            connections: Vec::new(),
        }
    }

    /// Returns the vertex identifier.
    pub fn name(&self) -> &K {
        &self.name
    }

    /// Returns the neighbor identifiers in insertion order.
    pub fn connections(&self) -> &[K] {
        &self.connections
    }

    /// Returns the number of connections (counting duplicates).
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` if the vertex has at least one connection.
    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }

    /// Appends a neighbor identifier.
    pub(crate) fn connect(&mut self, neighbor: K) {
        self.connections.push(neighbor);
    }

    /// Removes and returns the most recently added connection.
    pub(crate) fn pop_connection(&mut self) -> Option<K> {
        self.connections.pop()
    }
}

impl<K: PartialEq> Vertex<K> {
    /// Removes one occurrence of `neighbor` from the connection list.
    ///
    /// Returns `true` if a connection was removed. Other connections,
    /// including further duplicates of `neighbor`, are left intact.
    pub(crate) fn remove_connection(&mut self, neighbor: &K) -> bool {
        match self.connections.iter().position(|c| c == neighbor) {
            Some(index) => {
                self.connections.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Vertex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("name", &self.name)
            .field("connections", &self.connections)
            .finish()
    }
}
