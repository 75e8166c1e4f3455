//! Adjacency-list graphs.
//!
//! Two variants share the [`Vertex`] leaf type:
//! - [`DirectedGraph`]: one-directional edges, cycle detection via
//!   three-color DFS.
//! - [`UndirectedGraph`]: symmetric edges, vertex/edge removal, lazy
//!   [`Bfs`]/[`Dfs`] traversals.

use thiserror::Error;

pub mod directed;
pub mod traversal;
pub mod undirected;
pub mod vertex;

pub use directed::DirectedGraph;
pub use traversal::{Bfs, Dfs};
pub use undirected::UndirectedGraph;
pub use vertex::Vertex;

/// Errors returned by graph removal operations.
///
/// Insertion (`add_vertex`, `add_edge`) and queries (`has_cycle`,
/// traversals) are total and never produce an error; only removal has a
/// precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<K> {
    /// The named vertex is not present in the graph.
    #[error("vertex {0:?} not found")]
    VertexNotFound(K),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_the_missing_vertex() {
        let error = GraphError::VertexNotFound(7);
        assert_eq!(error.to_string(), "vertex 7 not found");
    }
}
