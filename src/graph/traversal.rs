//! Lazy traversal iterators for [`UndirectedGraph`].
//!
//! Both traversals are explicit state machines: the frontier (FIFO queue
//! for BFS, frame stack for DFS) and the seen-set live inside the iterator
//! value, so every traversal starts fresh and dropping the iterator is
//! cancellation. `next()` runs purely local computation.

use std::collections::HashSet;
use std::hash::Hash;

use crate::collections::Queue;
use crate::graph::{UndirectedGraph, Vertex};

/// Breadth-first traversal over an [`UndirectedGraph`].
///
/// Vertices are yielded by distance from the start, ties broken by
/// connection insertion order. A vertex is marked seen when it is yielded;
/// its unseen neighbors enter the frontier at that moment. The frontier may
/// briefly hold the same vertex twice; duplicates are dropped at dequeue.
pub struct Bfs<'a, K> {
    graph: &'a UndirectedGraph<K>,
    frontier: Queue<K>,
    seen: HashSet<K>,
    current: Option<K>,
}

impl<'a, K: Eq + Hash + Clone> Bfs<'a, K> {
    pub(crate) fn new(graph: &'a UndirectedGraph<K>, start: &K) -> Self {
        Self {
            graph,
            frontier: Queue::new(),
            seen: HashSet::new(),
            current: graph.vertex(start).map(|vertex| vertex.name().clone()),
        }
    }
}

impl<'a, K: Eq + Hash + Clone> Iterator for Bfs<'a, K> {
    type Item = &'a Vertex<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let name = match self.current.take() {
                Some(name) => name,
                None => self.frontier.dequeue()?,
            };

            if self.seen.insert(name.clone()) {
                let vertex = graph.vertex(&name)?;
                for neighbor in vertex.connections() {
                    if !self.seen.contains(neighbor) {
                        self.frontier.enqueue(neighbor.clone());
                    }
                }
                return Some(vertex);
            }
        }
    }
}

/// Depth-first pre-order traversal over an [`UndirectedGraph`].
///
/// Yields a vertex the moment it is discovered, then descends into its
/// connections in insertion order, the same order recursion would produce,
/// but driven by an explicit stack of
/// `(vertex, connection-cursor)` frames so deep components cannot overflow
/// the call stack.
pub struct Dfs<'a, K> {
    graph: &'a UndirectedGraph<K>,
    stack: Vec<(K, usize)>,
    seen: HashSet<K>,
    start: Option<K>,
}

impl<'a, K: Eq + Hash + Clone> Dfs<'a, K> {
    pub(crate) fn new(graph: &'a UndirectedGraph<K>, start: &K) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            seen: HashSet::new(),
            start: graph.vertex(start).map(|vertex| vertex.name().clone()),
        }
    }
}

impl<'a, K: Eq + Hash + Clone> Iterator for Dfs<'a, K> {
    type Item = &'a Vertex<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        if let Some(start) = self.start.take() {
            self.seen.insert(start.clone());
            let vertex = graph.vertex(&start)?;
            self.stack.push((start, 0));
            return Some(vertex);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let connections = graph.vertex(&frame.0)?.connections();

            if frame.1 < connections.len() {
                let neighbor = connections[frame.1].clone();
                frame.1 += 1;

                if self.seen.insert(neighbor.clone()) {
                    let vertex = graph.vertex(&neighbor)?;
                    self.stack.push((neighbor, 0));
                    return Some(vertex);
                }
            } else {
                self.stack.pop();
            }
        }
    }
}
