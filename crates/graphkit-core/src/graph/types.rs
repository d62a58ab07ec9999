use crate::graph::traits::{Edge, Graph, KruskalGraph, UndirectedEdge};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Plain weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<V> Edge for WeightedEdge<V> {
    type Vertex = V;

    fn from(&self) -> &V {
        &self.from
    }

    fn to(&self) -> &V {
        &self.to
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: Clone> UndirectedEdge for WeightedEdge<V> {
    fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone(), self.weight)
    }
}

/// Weighted edge carrying a caller payload (e.g. the wall a maze edge crosses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeWithData<V, D> {
    pub from: V,
    pub to: V,
    pub weight: f64,
    pub data: D,
}

impl<V, D> EdgeWithData<V, D> {
    pub fn new(from: V, to: V, weight: f64, data: D) -> Self {
        Self {
            from,
            to,
            weight,
            data,
        }
    }

    pub fn data(&self) -> &D {
        &self.data
    }
}

impl<V, D> Edge for EdgeWithData<V, D> {
    type Vertex = V;

    fn from(&self) -> &V {
        &self.from
    }

    fn to(&self) -> &V {
        &self.to
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: Clone, D: Clone> UndirectedEdge for EdgeWithData<V, D> {
    fn reversed(&self) -> Self {
        Self::new(
            self.to.clone(),
            self.from.clone(),
            self.weight,
            self.data.clone(),
        )
    }
}

/// Directed graph backed by per-vertex adjacency lists
#[derive(Debug, Clone)]
pub struct AdjacencyListDirectedGraph<V, E> {
    vertices: HashSet<V>,
    edges: Vec<E>,
    adjacency: HashMap<V, Vec<E>>,
}

impl<V, E> AdjacencyListDirectedGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    /// Build a graph whose vertices are the edges' endpoints
    pub fn new(edges: impl IntoIterator<Item = E>) -> Self {
        Self::with_vertices(std::iter::empty(), edges)
    }

    /// Build a graph that also contains `vertices`, even ones no edge touches
    pub fn with_vertices(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self {
        let mut graph = Self {
            vertices: vertices.into_iter().collect(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
        };
        for edge in edges {
            graph.vertices.insert(edge.from().clone());
            graph.vertices.insert(edge.to().clone());
            graph
                .adjacency
                .entry(edge.from().clone())
                .or_default()
                .push(edge.clone());
            graph.edges.push(edge);
        }
        graph
    }
}

impl<V, E> Graph for AdjacencyListDirectedGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    type Vertex = V;
    type Edge = E;

    fn outgoing_edges_from(&self, vertex: &V) -> &[E] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<V, E> KruskalGraph for AdjacencyListDirectedGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    fn all_vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    fn all_edges(&self) -> &[E] {
        &self.edges
    }
}

/// Undirected graph: every edge is listed once by `all_edges` and is outgoing
/// from both of its endpoints.
#[derive(Debug, Clone)]
pub struct AdjacencyListUndirectedGraph<V, E> {
    inner: AdjacencyListDirectedGraph<V, E>,
    edges: Vec<E>,
}

impl<V, E> AdjacencyListUndirectedGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: UndirectedEdge<Vertex = V>,
{
    pub fn new(edges: impl IntoIterator<Item = E>) -> Self {
        Self::with_vertices(std::iter::empty(), edges)
    }

    pub fn with_vertices(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self {
        let edges: Vec<E> = edges.into_iter().collect();
        let both_directions = edges
            .iter()
            .flat_map(|edge| [edge.clone(), edge.reversed()]);
        Self {
            inner: AdjacencyListDirectedGraph::with_vertices(vertices, both_directions),
            edges,
        }
    }
}

impl<V, E> Graph for AdjacencyListUndirectedGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: UndirectedEdge<Vertex = V>,
{
    type Vertex = V;
    type Edge = E;

    fn outgoing_edges_from(&self, vertex: &V) -> &[E] {
        self.inner.outgoing_edges_from(vertex)
    }
}

impl<V, E> KruskalGraph for AdjacencyListUndirectedGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: UndirectedEdge<Vertex = V>,
{
    fn all_vertices(&self) -> &HashSet<V> {
        self.inner.all_vertices()
    }

    fn all_edges(&self) -> &[E] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_adjacency() {
        let graph = AdjacencyListDirectedGraph::with_vertices(
            ["iso"],
            [
                WeightedEdge::new("a", "b", 1.0),
                WeightedEdge::new("a", "c", 2.0),
                WeightedEdge::new("b", "c", 3.0),
            ],
        );

        assert_eq!(graph.outgoing_edges_from(&"a").len(), 2);
        assert!(graph.outgoing_edges_from(&"c").is_empty());
        assert!(graph.outgoing_edges_from(&"missing").is_empty());
        assert_eq!(graph.all_vertices().len(), 4);
        assert_eq!(graph.all_edges().len(), 3);
    }

    #[test]
    fn test_undirected_lists_both_directions() {
        let graph = AdjacencyListUndirectedGraph::new([
            EdgeWithData::new(1, 2, 0.5, "wall-a"),
            EdgeWithData::new(2, 3, 0.7, "wall-b"),
        ]);

        assert_eq!(graph.all_edges().len(), 2);
        let from_two: Vec<_> = graph
            .outgoing_edges_from(&2)
            .iter()
            .map(|e| (e.to, *e.data()))
            .collect();
        assert_eq!(from_two, vec![(1, "wall-a"), (3, "wall-b")]);
    }

    #[test]
    fn test_reversed_keeps_weight() {
        let edge = WeightedEdge::new('x', 'y', 4.5);
        let back = edge.reversed();
        assert_eq!((back.from, back.to, back.weight), ('y', 'x', 4.5));
    }
}
