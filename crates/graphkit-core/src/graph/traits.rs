use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed, weighted connection between two vertices
pub trait Edge {
    type Vertex;

    fn from(&self) -> &Self::Vertex;
    fn to(&self) -> &Self::Vertex;

    /// Traversal cost; solvers expect a finite, nonnegative value
    fn weight(&self) -> f64;
}

/// An edge that can also be walked in the opposite direction
pub trait UndirectedEdge: Edge + Clone {
    /// The same edge with `from` and `to` exchanged
    fn reversed(&self) -> Self;
}

/// Trait for providing graph adjacency to the shortest path solvers
pub trait Graph {
    type Vertex: Eq + Hash + Clone + Debug;
    type Edge: Edge<Vertex = Self::Vertex> + Clone;

    /// Edges leaving `vertex`; empty for unknown vertices
    fn outgoing_edges_from(&self, vertex: &Self::Vertex) -> &[Self::Edge];
}

/// A graph that can enumerate everything it contains, as Kruskal needs
pub trait KruskalGraph: Graph {
    fn all_vertices(&self) -> &HashSet<Self::Vertex>;

    /// Every edge exactly once
    fn all_edges(&self) -> &[Self::Edge];
}
