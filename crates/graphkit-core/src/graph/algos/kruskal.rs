use crate::disjoint_sets::{DisjointSets, UnionBySizeCompressingDisjointSets};
use crate::error::Result;
use crate::graph::spanning::{MinimumSpanningTree, MinimumSpanningTreeFinder};
use crate::graph::traits::{Edge, KruskalGraph};
use std::marker::PhantomData;

/// Kruskal's algorithm, using a fresh `D` forest per run.
///
/// Edges with equal weights keep their `all_edges` order (stable sort), which
/// decides between equally light spanning trees. Every edge is visited, so an
/// endpoint missing from the vertex set fails with `NotFound` wherever it sorts.
#[derive(Debug)]
pub struct KruskalMinimumSpanningTreeFinder<D> {
    _sets: PhantomData<fn() -> D>,
}

impl<D> KruskalMinimumSpanningTreeFinder<D> {
    pub fn new() -> Self {
        Self { _sets: PhantomData }
    }
}

impl<D> Default for KruskalMinimumSpanningTreeFinder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for KruskalMinimumSpanningTreeFinder<D> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<G, D> MinimumSpanningTreeFinder<G> for KruskalMinimumSpanningTreeFinder<D>
where
    G: KruskalGraph,
    D: DisjointSets<G::Vertex> + Default,
{
    #[tracing::instrument(
        skip_all,
        fields(vertices = graph.all_vertices().len(), edges = graph.all_edges().len())
    )]
    fn find_minimum_spanning_tree(&self, graph: &G) -> Result<MinimumSpanningTree<G::Edge>> {
        let vertices = graph.all_vertices();
        let mut sets = D::default();
        for vertex in vertices {
            sets.make_set(vertex.clone())?;
        }

        if vertices.is_empty() {
            return Ok(MinimumSpanningTree::Success(Vec::new()));
        }

        let mut edges: Vec<&G::Edge> = graph.all_edges().iter().collect();
        edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        let target = vertices.len() - 1;
        let mut accepted = Vec::with_capacity(target);
        for edge in edges {
            // `union` is false when both endpoints already share a set
            if sets.union(edge.from(), edge.to())? {
                accepted.push(edge.clone());
            }
        }

        tracing::debug!(accepted = accepted.len(), target, "kruskal");
        if accepted.len() == target {
            Ok(MinimumSpanningTree::Success(accepted))
        } else {
            Ok(MinimumSpanningTree::Failure)
        }
    }
}

/// Minimum spanning tree using the union-by-size forest
pub fn kruskal_minimum_spanning_tree<G: KruskalGraph>(
    graph: &G,
) -> Result<MinimumSpanningTree<G::Edge>> {
    KruskalMinimumSpanningTreeFinder::<UnionBySizeCompressingDisjointSets<G::Vertex>>::new()
        .find_minimum_spanning_tree(graph)
}
