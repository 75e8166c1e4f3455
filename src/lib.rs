//! # `trellis`: classic data structures with lazy traversals
//!
//! A small library of the canonical data structures (singly linked list,
//! stack, queue, binary search tree, and adjacency-list graphs), each with
//! its textbook traversal and mutation algorithms.
//!
//! The graph subsystem is the core of the crate:
//!
//! - [`DirectedGraph`]: adjacency-list directed graph with cycle detection
//!   via the three-color (unvisited/visiting/visited) DFS, driven by an
//!   explicit frame stack so deep or cyclic graphs cannot overflow the call
//!   stack.
//! - [`UndirectedGraph`]: adjacency-list graph with symmetric edges,
//!   edge/vertex removal, and lazy breadth-first and depth-first traversal
//!   iterators ([`Bfs`], [`Dfs`]).
//!
//! Traversals are exposed as plain [`Iterator`]s carrying their own frontier
//! and seen-set. Each `next()` call runs purely local computation; dropping
//! the iterator is cancellation. Because an in-flight traversal borrows the
//! graph, mutating the graph while a traversal is live is a compile error
//! rather than a runtime hazard.
//!
//! Vertex identifiers are generic: any `Eq + Hash + Clone` type works
//! (integers and strings being the usual choices).
//!
//! ## Example
//!
//! ```rust
//! use trellis::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(1, 4);
//! graph.add_edge(2, 3);
//!
//! let order: Vec<i32> = graph
//!     .breadth_first_traversal(&1)
//!     .map(|vertex| *vertex.name())
//!     .collect();
//! assert_eq!(order, [1, 2, 4, 3]);
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit `tracing` events from graph mutations and the cycle
//!   check. Off by default.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{BinarySearchTree, LinkedList, Queue, Stack};
pub use graph::{Bfs, Dfs, DirectedGraph, GraphError, UndirectedGraph, Vertex};
