use crate::error::Result;
use crate::graph::traits::{Edge, KruskalGraph};
use serde::Serialize;

/// Outcome of a minimum spanning tree computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "edges", rename_all = "snake_case")]
pub enum MinimumSpanningTree<E> {
    /// Edges of a minimum spanning tree; empty for an empty graph
    Success(Vec<E>),
    /// The graph is not connected
    Failure,
}

impl<E: Edge> MinimumSpanningTree<E> {
    pub fn exists(&self) -> bool {
        matches!(self, MinimumSpanningTree::Success(_))
    }

    pub fn edges(&self) -> &[E] {
        match self {
            MinimumSpanningTree::Success(edges) => edges,
            MinimumSpanningTree::Failure => &[],
        }
    }

    pub fn into_edges(self) -> Option<Vec<E>> {
        match self {
            MinimumSpanningTree::Success(edges) => Some(edges),
            MinimumSpanningTree::Failure => None,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }
}

/// Anything that computes minimum spanning trees of `G`
pub trait MinimumSpanningTreeFinder<G: KruskalGraph> {
    fn find_minimum_spanning_tree(&self, graph: &G) -> Result<MinimumSpanningTree<G::Edge>>;
}
