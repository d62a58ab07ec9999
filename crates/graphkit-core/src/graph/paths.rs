//! Shortest path results and the two-phase finder traits
//!
//! A finder first builds a shortest-paths tree (vertex -> edge used to reach
//! it), then walks that tree backwards from the target. Only the first phase
//! differs between strategies, so extraction is provided here.

use crate::error::Result;
use crate::graph::traits::{Edge, Graph};
use serde::Serialize;
use std::collections::HashMap;

/// Maps each reached vertex to the edge used to reach it from the start
pub type ShortestPathsTree<V, E> = HashMap<V, E>;

/// Outcome of a single-source, single-target shortest path query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ShortestPath<V, E> {
    /// Edges in order from start to end
    Success(Vec<E>),
    /// The end vertex cannot be reached from the start
    Failure,
    /// Start and end are the same vertex
    SingleVertex(V),
}

impl<V, E> ShortestPath<V, E>
where
    V: Clone,
    E: Edge<Vertex = V>,
{
    /// Whether a path (possibly of zero edges) exists
    pub fn exists(&self) -> bool {
        !matches!(self, ShortestPath::Failure)
    }

    pub fn edges(&self) -> &[E] {
        match self {
            ShortestPath::Success(edges) => edges,
            ShortestPath::Failure | ShortestPath::SingleVertex(_) => &[],
        }
    }

    /// Vertices visited by the path, start and end included
    pub fn vertices(&self) -> Vec<V> {
        match self {
            ShortestPath::Success(edges) => edges
                .first()
                .map(|first| first.from().clone())
                .into_iter()
                .chain(edges.iter().map(|edge| edge.to().clone()))
                .collect(),
            ShortestPath::Failure => Vec::new(),
            ShortestPath::SingleVertex(vertex) => vec![vertex.clone()],
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }
}

/// Anything that answers shortest path queries on `G`
pub trait ShortestPathFinder<G: Graph> {
    fn find_shortest_path(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<ShortestPath<G::Vertex, G::Edge>>;
}

/// A finder split into tree construction and path extraction hooks
pub trait SptShortestPathFinder<G: Graph> {
    /// Build the shortest-paths tree rooted at `start`.
    ///
    /// Construction may stop early once `end` is settled.
    fn construct_shortest_paths_tree(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<ShortestPathsTree<G::Vertex, G::Edge>>;

    /// Walk `tree` backwards from `end` to `start`
    fn extract_shortest_path(
        &self,
        tree: &ShortestPathsTree<G::Vertex, G::Edge>,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> ShortestPath<G::Vertex, G::Edge> {
        if start == end {
            return ShortestPath::SingleVertex(start.clone());
        }

        let mut path = Vec::new();
        let mut at = end;
        while at != start {
            // Also bounds the walk if the tree is malformed
            let Some(edge) = tree.get(at).filter(|_| path.len() < tree.len()) else {
                return ShortestPath::Failure;
            };
            path.push(edge.clone());
            at = edge.from();
        }
        path.reverse();
        ShortestPath::Success(path)
    }
}

impl<G, T> ShortestPathFinder<G> for T
where
    G: Graph,
    T: SptShortestPathFinder<G>,
{
    fn find_shortest_path(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<ShortestPath<G::Vertex, G::Edge>> {
        let tree = self.construct_shortest_paths_tree(graph, start, end)?;
        Ok(self.extract_shortest_path(&tree, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{AdjacencyListDirectedGraph, WeightedEdge};

    type TestGraph = AdjacencyListDirectedGraph<char, WeightedEdge<char>>;

    /// Returns a fixed tree regardless of the graph
    struct FixedTree(ShortestPathsTree<char, WeightedEdge<char>>);

    impl SptShortestPathFinder<TestGraph> for FixedTree {
        fn construct_shortest_paths_tree(
            &self,
            _graph: &TestGraph,
            _start: &char,
            _end: &char,
        ) -> Result<ShortestPathsTree<char, WeightedEdge<char>>> {
            Ok(self.0.clone())
        }
    }

    fn tree(edges: &[(char, char, f64)]) -> FixedTree {
        FixedTree(
            edges
                .iter()
                .map(|&(from, to, w)| (to, WeightedEdge::new(from, to, w)))
                .collect(),
        )
    }

    #[test]
    fn test_extract_walks_back_to_start() {
        let finder = tree(&[('s', 'a', 1.0), ('a', 'b', 2.0), ('b', 't', 3.0)]);
        let graph = TestGraph::new([]);

        let path = finder.find_shortest_path(&graph, &'s', &'t').unwrap();
        assert!(path.exists());
        assert_eq!(path.vertices(), vec!['s', 'a', 'b', 't']);
        assert_eq!(path.total_weight(), 6.0);
    }

    #[test]
    fn test_extract_start_equals_end() {
        let finder = tree(&[]);
        let graph = TestGraph::new([]);

        let path = finder.find_shortest_path(&graph, &'s', &'s').unwrap();
        assert_eq!(path, ShortestPath::SingleVertex('s'));
        assert_eq!(path.vertices(), vec!['s']);
        assert!(path.edges().is_empty());
    }

    #[test]
    fn test_extract_missing_end_is_failure() {
        let finder = tree(&[('s', 'a', 1.0)]);
        let graph = TestGraph::new([]);

        let path = finder.find_shortest_path(&graph, &'s', &'t').unwrap();
        assert_eq!(path, ShortestPath::Failure);
        assert!(!path.exists());
        assert_eq!(path.total_weight(), 0.0);
    }

    #[test]
    fn test_extract_stops_on_cyclic_tree() {
        let finder = tree(&[('b', 'a', 1.0), ('a', 'b', 1.0)]);
        let graph = TestGraph::new([]);

        let path = finder.find_shortest_path(&graph, &'s', &'a').unwrap();
        assert_eq!(path, ShortestPath::Failure);
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let path: ShortestPath<char, WeightedEdge<char>> = ShortestPath::Failure;
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["status"], "failure");
    }
}
