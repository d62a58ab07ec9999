use crate::disjoint_sets::UnionBySizeCompressingDisjointSets;
use crate::error::{GraphError, Result};
use crate::graph::{
    AdjacencyListUndirectedGraph, EdgeWithData, KruskalMinimumSpanningTreeFinder,
    MinimumSpanningTree, MinimumSpanningTreeFinder,
};
use crate::maze::grid::{MazeGrid, Room, Wall};
use crate::maze::CarvedMaze;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Rooms as vertices, walls as randomly weighted undirected edges
pub type MazeGraph = AdjacencyListUndirectedGraph<Room, EdgeWithData<Room, Wall>>;

type DefaultFinder = KruskalMinimumSpanningTreeFinder<UnionBySizeCompressingDisjointSets<Room>>;

/// Carves a maze by removing the walls of a minimum spanning tree over
/// randomly weighted walls.
#[derive(Debug, Clone)]
pub struct KruskalMazeCarver<F = DefaultFinder> {
    finder: F,
    rng: StdRng,
    seed: u64,
}

impl KruskalMazeCarver {
    pub fn new(seed: u64) -> Self {
        Self::with_finder(DefaultFinder::new(), seed)
    }
}

impl<F> KruskalMazeCarver<F>
where
    F: MinimumSpanningTreeFinder<MazeGraph>,
{
    pub fn with_finder(finder: F, seed: u64) -> Self {
        Self {
            finder,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick which of `walls` to knock down so every room in `grid` is reachable.
    ///
    /// Fails with `MazeNotConnected` when `walls` cannot join all rooms.
    #[tracing::instrument(
        skip_all,
        fields(rooms = grid.room_count(), walls = walls.len(), seed = self.seed)
    )]
    pub fn choose_walls_to_remove(
        &mut self,
        grid: &MazeGrid,
        walls: &[Wall],
    ) -> Result<Vec<Wall>> {
        let edges: Vec<_> = walls
            .iter()
            .map(|&wall| {
                let weight = self.rng.gen::<f64>();
                EdgeWithData::new(wall.room1, wall.room2, weight, wall)
            })
            .collect();
        let graph = MazeGraph::with_vertices(grid.rooms(), edges);

        match self.finder.find_minimum_spanning_tree(&graph)? {
            MinimumSpanningTree::Success(edges) => {
                Ok(edges.into_iter().map(|edge| edge.data).collect())
            }
            MinimumSpanningTree::Failure => Err(GraphError::MazeNotConnected),
        }
    }

    /// Carve a perfect maze out of the full grid.
    ///
    /// The RNG restarts from the seed on every call, so each maze is
    /// reproducible from the seed it reports.
    pub fn carve(&mut self, grid: &MazeGrid) -> Result<CarvedMaze> {
        let start = Instant::now();
        self.rng = StdRng::seed_from_u64(self.seed);
        let removed = self.choose_walls_to_remove(grid, &grid.walls())?;
        tracing::debug!(removed = removed.len(), "carved");
        crate::trace_time!(start, "carve", rooms = grid.room_count());
        Ok(CarvedMaze::new(*grid, self.seed, removed))
    }
}

/// Use `seed` if given, otherwise draw one from the thread RNG
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
