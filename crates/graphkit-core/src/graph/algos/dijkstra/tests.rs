use super::*;
use crate::graph::types::{
    AdjacencyListDirectedGraph, AdjacencyListUndirectedGraph, WeightedEdge,
};
use crate::priority_queue::NaiveMinPq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type CharGraph = AdjacencyListDirectedGraph<char, WeightedEdge<char>>;

fn diamond() -> CharGraph {
    AdjacencyListDirectedGraph::new([
        WeightedEdge::new('S', 'A', 1.0),
        WeightedEdge::new('S', 'B', 4.0),
        WeightedEdge::new('A', 'B', 1.0),
        WeightedEdge::new('A', 'T', 5.0),
        WeightedEdge::new('B', 'T', 1.0),
    ])
}

fn pairs(path: &ShortestPath<char, WeightedEdge<char>>) -> Vec<(char, char)> {
    path.edges().iter().map(|e| (e.from, e.to)).collect()
}

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    let path = dijkstra_shortest_path(&diamond(), &'S', &'T').unwrap();

    assert_eq!(pairs(&path), vec![('S', 'A'), ('A', 'B'), ('B', 'T')]);
    assert_eq!(path.total_weight(), 3.0);
}

#[test]
fn test_dijkstra_isolated_target_is_failure() {
    let graph = AdjacencyListDirectedGraph::with_vertices(
        ['T'],
        [
            WeightedEdge::new('S', 'A', 1.0),
            WeightedEdge::new('A', 'B', 1.0),
        ],
    );

    let path = dijkstra_shortest_path(&graph, &'S', &'T').unwrap();
    assert_eq!(path, ShortestPath::Failure);
}

#[test]
fn test_dijkstra_start_is_end() {
    let path = dijkstra_shortest_path(&diamond(), &'A', &'A').unwrap();
    assert_eq!(path, ShortestPath::SingleVertex('A'));
}

#[test]
fn test_dijkstra_respects_edge_direction() {
    let path = dijkstra_shortest_path(&diamond(), &'T', &'S').unwrap();
    assert!(!path.exists());
}

#[test]
fn test_dijkstra_undirected_graph() {
    let graph = AdjacencyListUndirectedGraph::new([
        WeightedEdge::new(1, 2, 2.0),
        WeightedEdge::new(2, 3, 2.0),
        WeightedEdge::new(1, 3, 5.0),
    ]);

    let path = dijkstra_shortest_path(&graph, &3, &1).unwrap();
    assert_eq!(path.vertices(), vec![3, 2, 1]);
    assert_eq!(path.total_weight(), 4.0);
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let graph = AdjacencyListDirectedGraph::new([
        WeightedEdge::new('S', 'A', 1.0),
        WeightedEdge::new('A', 'T', -2.0),
    ]);

    let err = dijkstra_shortest_path(&graph, &'S', &'T').unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { weight } if weight == -2.0));
}

#[test]
fn test_dijkstra_rejects_infinite_weight() {
    let graph = AdjacencyListDirectedGraph::new([WeightedEdge::new('S', 'T', f64::INFINITY)]);
    assert!(dijkstra_shortest_path(&graph, &'S', &'T').is_err());
}

#[test]
fn test_dijkstra_tree_stops_once_end_settled() {
    let finder = DijkstraShortestPathFinder::<ArrayHeapMinPq<char>>::new();
    let graph = AdjacencyListDirectedGraph::new([
        WeightedEdge::new('S', 'T', 1.0),
        WeightedEdge::new('S', 'X', 2.0),
        WeightedEdge::new('X', 'Y', 1.0),
    ]);

    let tree = finder
        .construct_shortest_paths_tree(&graph, &'S', &'T')
        .unwrap();
    // X was discovered from S but never expanded
    assert!(tree.contains_key(&'X'));
    assert!(!tree.contains_key(&'Y'));
}

#[test]
fn test_dijkstra_with_injected_queue() {
    let finder = DijkstraShortestPathFinder::<NaiveMinPq<char>>::new();
    let path = finder.find_shortest_path(&diamond(), &'S', &'T').unwrap();
    assert_eq!(path.total_weight(), 3.0);
}

fn bellman_ford(vertices: usize, edges: &[WeightedEdge<usize>], start: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; vertices];
    dist[start] = 0.0;
    for _ in 1..vertices {
        for edge in edges {
            if dist[edge.from] + edge.weight < dist[edge.to] {
                dist[edge.to] = dist[edge.from] + edge.weight;
            }
        }
    }
    dist
}

/// Random small graphs checked against Bellman-Ford distances
#[test]
fn test_dijkstra_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let vertices = rng.gen_range(1..8);
        let edge_count = rng.gen_range(0..20);
        let edges: Vec<_> = (0..edge_count)
            .map(|_| {
                WeightedEdge::new(
                    rng.gen_range(0..vertices),
                    rng.gen_range(0..vertices),
                    f64::from(rng.gen_range(0..10u32)),
                )
            })
            .collect();
        let graph = AdjacencyListDirectedGraph::with_vertices(0..vertices, edges.clone());
        let start = rng.gen_range(0..vertices);
        let expected = bellman_ford(vertices, &edges, start);

        for (end, &distance) in expected.iter().enumerate() {
            let path = dijkstra_shortest_path(&graph, &start, &end).unwrap();
            if distance.is_infinite() {
                assert_eq!(path, ShortestPath::Failure);
            } else {
                assert!(path.exists());
                assert_eq!(path.total_weight(), distance);
                let visited = path.vertices();
                assert_eq!(visited.first(), Some(&start));
                assert_eq!(visited.last(), Some(&end));
            }
        }
    }
}
