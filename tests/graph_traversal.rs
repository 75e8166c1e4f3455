//! End-to-end checks of the graph subsystem against the reference
//! adjacency, traversal orders, and removal behaviors.

use trellis::{DirectedGraph, GraphError, UndirectedGraph};

/// The shared fixture:
///
/// ```text
///    2         6
///  /  \      /
/// 1    3 -- 5
///  \  /      \
///   4         7
/// ```
fn reference_graph() -> UndirectedGraph<i32> {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(1, 2);
    graph.add_edge(1, 4);
    graph.add_edge(2, 3);
    graph.add_edge(4, 3);
    graph.add_edge(3, 5);
    graph.add_edge(5, 6);
    graph.add_edge(5, 7);
    graph
}

fn bfs_names(graph: &UndirectedGraph<i32>, start: i32) -> Vec<i32> {
    graph
        .breadth_first_traversal(&start)
        .map(|v| *v.name())
        .collect()
}

fn dfs_names(graph: &UndirectedGraph<i32>, start: i32) -> Vec<i32> {
    graph
        .depth_first_traversal(&start)
        .map(|v| *v.name())
        .collect()
}

#[test]
fn reference_bfs_orders() {
    let graph = reference_graph();
    assert_eq!(bfs_names(&graph, 1), [1, 2, 4, 3, 5, 6, 7]);
    assert_eq!(bfs_names(&graph, 6), [6, 5, 3, 7, 2, 4, 1]);
}

#[test]
fn reference_dfs_orders() {
    let graph = reference_graph();
    assert_eq!(dfs_names(&graph, 1), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(dfs_names(&graph, 6), [6, 5, 3, 2, 1, 4, 7]);
}

#[test]
fn traversal_length_equals_component_size() {
    let mut graph = reference_graph();
    graph.add_edge(100, 101);
    graph.add_vertex(200);

    assert_eq!(bfs_names(&graph, 1).len(), 7);
    assert_eq!(dfs_names(&graph, 100).len(), 2);
    assert_eq!(bfs_names(&graph, 200), [200]);
}

#[test]
fn removed_vertex_never_appears_again() {
    let mut graph = reference_graph();
    graph.remove_vertex(&3).unwrap();

    for start in [1, 2, 4, 5, 6, 7] {
        assert!(
            !bfs_names(&graph, start).contains(&3),
            "vertex 3 reachable from {start} after removal"
        );
        assert!(!dfs_names(&graph, start).contains(&3));
    }

    // 3 was the bridge: the two halves are now separate components.
    let mut left = bfs_names(&graph, 1);
    left.sort_unstable();
    assert_eq!(left, [1, 2, 4]);

    let mut right = bfs_names(&graph, 6);
    right.sort_unstable();
    assert_eq!(right, [5, 6, 7]);
}

#[test]
fn remove_edge_splits_only_that_edge() {
    let mut graph = reference_graph();
    graph.remove_edge(&3, &5).unwrap();

    let mut left = bfs_names(&graph, 1);
    left.sort_unstable();
    assert_eq!(left, [1, 2, 3, 4]);

    let mut right = dfs_names(&graph, 5);
    right.sort_unstable();
    assert_eq!(right, [5, 6, 7]);
}

#[test]
fn removal_errors_name_the_missing_vertex() {
    let mut graph = reference_graph();

    assert_eq!(graph.remove_vertex(&99), Err(GraphError::VertexNotFound(99)));
    assert_eq!(
        graph.remove_edge(&99, &1),
        Err(GraphError::VertexNotFound(99))
    );
    assert_eq!(
        graph.remove_edge(&1, &99),
        Err(GraphError::VertexNotFound(99))
    );
    // The graph is untouched by failed removals.
    assert_eq!(bfs_names(&graph, 1), [1, 2, 4, 3, 5, 6, 7]);
}

#[test]
fn directed_cycle_fixture() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(1, 2);
    graph.add_edge(4, 1);
    graph.add_edge(4, 5);
    graph.add_edge(5, 6);
    graph.add_edge(6, 4);

    // Back-edge 6 -> 4 closes the cycle 4 -> 5 -> 6 -> 4.
    assert!(graph.has_cycle());
}

#[test]
fn directed_fresh_vertices_are_acyclic() {
    let mut graph = DirectedGraph::new();
    for i in 0..100 {
        graph.add_edge(2 * i, 2 * i + 1);
    }
    assert!(!graph.has_cycle());
}

#[test]
fn mixed_identifier_types() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("ore", "ingot");
    graph.add_edge("ingot", "plate");

    let order: Vec<&str> = graph
        .breadth_first_traversal(&"ore")
        .map(|v| *v.name())
        .collect();
    assert_eq!(order, ["ore", "ingot", "plate"]);
}
