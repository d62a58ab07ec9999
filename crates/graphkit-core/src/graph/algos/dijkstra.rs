use crate::error::{GraphError, Result};
use crate::graph::paths::{
    ShortestPath, ShortestPathFinder, ShortestPathsTree, SptShortestPathFinder,
};
use crate::graph::traits::{Edge, Graph};
use crate::priority_queue::{ArrayHeapMinPq, ExtrinsicMinPq};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Dijkstra's algorithm over any `Graph`, using a fresh `Q` queue per query.
///
/// Requires finite, nonnegative edge weights; anything else fails with
/// `GraphError::InvalidWeight` as soon as the edge is relaxed.
#[derive(Debug)]
pub struct DijkstraShortestPathFinder<Q> {
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> DijkstraShortestPathFinder<Q> {
    pub fn new() -> Self {
        Self {
            _queue: PhantomData,
        }
    }
}

impl<Q> Default for DijkstraShortestPathFinder<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for DijkstraShortestPathFinder<Q> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight { weight })
    }
}

impl<G, Q> SptShortestPathFinder<G> for DijkstraShortestPathFinder<Q>
where
    G: Graph,
    Q: ExtrinsicMinPq<G::Vertex> + Default,
{
    #[tracing::instrument(skip_all, fields(start = ?start, end = ?end))]
    fn construct_shortest_paths_tree(
        &self,
        graph: &G,
        start: &G::Vertex,
        end: &G::Vertex,
    ) -> Result<ShortestPathsTree<G::Vertex, G::Edge>> {
        let mut edge_to: ShortestPathsTree<G::Vertex, G::Edge> = HashMap::new();
        let mut dist_to: HashMap<G::Vertex, f64> = HashMap::new();
        let mut queue = Q::default();

        dist_to.insert(start.clone(), 0.0);
        queue.add(start.clone(), 0.0)?;

        let mut settled = 0usize;
        while !queue.is_empty() {
            let current = queue.remove_min()?;
            settled += 1;
            if current == *end {
                break;
            }

            let current_dist = *dist_to
                .get(&current)
                .ok_or_else(|| GraphError::not_found("dijkstra distance", &current))?;

            for edge in graph.outgoing_edges_from(&current) {
                check_weight(edge.weight())?;
                let next = edge.to();
                let candidate = current_dist + edge.weight();
                if dist_to.get(next).is_some_and(|&known| candidate >= known) {
                    continue;
                }

                tracing::trace!(vertex = ?next, distance = candidate, "relax");
                dist_to.insert(next.clone(), candidate);
                edge_to.insert(next.clone(), edge.clone());
                if queue.contains(next) {
                    queue.change_priority(next, candidate)?;
                } else {
                    queue.add(next.clone(), candidate)?;
                }
            }
        }

        tracing::debug!(settled, reached = dist_to.len(), "shortest_paths_tree");
        Ok(edge_to)
    }
}

/// Shortest path from `start` to `end` using the binary-heap queue
pub fn dijkstra_shortest_path<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> Result<ShortestPath<G::Vertex, G::Edge>> {
    DijkstraShortestPathFinder::<ArrayHeapMinPq<G::Vertex>>::new()
        .find_shortest_path(graph, start, end)
}

#[cfg(test)]
mod tests;
