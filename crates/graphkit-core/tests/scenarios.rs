//! End-to-end checks of the public structures and solvers

use graphkit_core::disjoint_sets::{DisjointSets, UnionBySizeCompressingDisjointSets};
use graphkit_core::error::GraphError;
use graphkit_core::graph::{
    dijkstra_shortest_path, kruskal_minimum_spanning_tree, AdjacencyListDirectedGraph,
    AdjacencyListUndirectedGraph, MinimumSpanningTree, ShortestPath, WeightedEdge,
};
use graphkit_core::priority_queue::{ArrayHeapMinPq, ExtrinsicMinPq};

#[test]
fn test_priority_queue_change_priority_reorders() {
    let mut pq = ArrayHeapMinPq::new();
    pq.add("A", 5.0).unwrap();
    pq.add("B", 3.0).unwrap();
    pq.add("C", 8.0).unwrap();

    assert_eq!(pq.remove_min().unwrap(), "B");
    assert!(!pq.contains(&"B"));
    pq.change_priority(&"C", 1.0).unwrap();
    assert_eq!(pq.remove_min().unwrap(), "C");
    assert_eq!(pq.remove_min().unwrap(), "A");
    assert!(matches!(pq.remove_min(), Err(GraphError::Empty { .. })));
}

#[test]
fn test_disjoint_sets_merge_and_repeat_union() {
    let mut sets = UnionBySizeCompressingDisjointSets::new();
    for item in 1..=5 {
        sets.make_set(item).unwrap();
    }

    assert!(sets.union(&1, &2).unwrap());
    assert!(sets.union(&3, &4).unwrap());
    assert!(sets.union(&2, &3).unwrap());
    assert_eq!(sets.find_set(&1).unwrap(), sets.find_set(&4).unwrap());
    assert!(sets.union(&1, &5).unwrap());
    assert!(!sets.union(&1, &2).unwrap());
    assert_eq!(sets.set_count(), 1);
}

#[test]
fn test_shortest_path_and_unreachable_target() {
    let edges = [
        WeightedEdge::new('S', 'A', 1.0),
        WeightedEdge::new('S', 'B', 4.0),
        WeightedEdge::new('A', 'B', 1.0),
        WeightedEdge::new('A', 'T', 5.0),
        WeightedEdge::new('B', 'T', 1.0),
    ];
    let graph = AdjacencyListDirectedGraph::new(edges.clone());
    let path = dijkstra_shortest_path(&graph, &'S', &'T').unwrap();
    assert_eq!(path.vertices(), vec!['S', 'A', 'B', 'T']);
    assert_eq!(path.total_weight(), 3.0);

    let isolated = AdjacencyListDirectedGraph::with_vertices(['T'], edges[..3].to_vec());
    assert_eq!(
        dijkstra_shortest_path(&isolated, &'S', &'T').unwrap(),
        ShortestPath::Failure
    );
}

#[test]
fn test_spanning_tree_of_cycle_with_diagonal() {
    let graph = AdjacencyListUndirectedGraph::new([
        WeightedEdge::new(1, 2, 1.0),
        WeightedEdge::new(2, 3, 2.0),
        WeightedEdge::new(3, 4, 3.0),
        WeightedEdge::new(4, 1, 4.0),
        WeightedEdge::new(1, 3, 5.0),
    ]);

    let mst = kruskal_minimum_spanning_tree(&graph).unwrap();
    assert_eq!(mst.edges().len(), 3);
    assert_eq!(mst.total_weight(), 6.0);
}

#[test]
fn test_spanning_tree_of_two_components_is_failure() {
    let graph = AdjacencyListUndirectedGraph::new([
        WeightedEdge::new(1, 2, 1.0),
        WeightedEdge::new(3, 4, 1.0),
    ]);

    assert_eq!(
        kruskal_minimum_spanning_tree(&graph).unwrap(),
        MinimumSpanningTree::Failure
    );
}
