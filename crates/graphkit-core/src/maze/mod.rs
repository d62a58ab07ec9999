//! Kruskal maze carving on top of the graph algorithms
//!
//! A grid of rooms starts with every wall standing. Each wall becomes an edge
//! with a random weight; the minimum spanning tree of that graph is the set
//! of walls to knock down, which leaves exactly one passage between any two
//! rooms. The carved maze is solved with Dijkstra over its open passages.

pub mod carver;
pub mod grid;
pub mod render;

pub use carver::{resolve_seed, KruskalMazeCarver, MazeGraph};
pub use grid::{MazeGrid, Room, Wall, MAX_ROOMS};
pub use render::render_ascii;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{
    dijkstra_shortest_path, AdjacencyListUndirectedGraph, ShortestPath, WeightedEdge,
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Graph of open passages, one unit-weight edge per removed wall
pub type PassageGraph = AdjacencyListUndirectedGraph<Room, WeightedEdge<Room>>;

/// A grid together with the walls that were knocked down
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarvedMaze {
    grid: MazeGrid,
    seed: u64,
    removed_walls: BTreeSet<Wall>,
}

impl CarvedMaze {
    pub fn new(grid: MazeGrid, seed: u64, removed_walls: impl IntoIterator<Item = Wall>) -> Self {
        Self {
            grid,
            seed,
            removed_walls: removed_walls.into_iter().collect(),
        }
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn removed_walls(&self) -> &BTreeSet<Wall> {
        &self.removed_walls
    }

    /// Whether the wall between two adjacent rooms has been removed
    pub fn is_open(&self, a: Room, b: Room) -> bool {
        self.removed_walls.contains(&Wall::between(a, b))
    }

    pub fn passages(&self) -> PassageGraph {
        PassageGraph::with_vertices(
            self.grid.rooms(),
            self.removed_walls
                .iter()
                .map(|wall| WeightedEdge::new(wall.room1, wall.room2, 1.0)),
        )
    }

    /// Shortest walk between two rooms through open passages
    #[tracing::instrument(skip_all, fields(from = %from, to = %to))]
    pub fn solve(&self, from: Room, to: Room) -> Result<ShortestPath<Room, WeightedEdge<Room>>> {
        for room in [from, to] {
            if !self.grid.contains(room) {
                bail_invalid!("room", room);
            }
        }
        dijkstra_shortest_path(&self.passages(), &from, &to)
    }

    /// Solve from the top-left room to the bottom-right room
    pub fn solve_corners(&self) -> Result<ShortestPath<Room, WeightedEdge<Room>>> {
        self.solve(self.grid.entrance(), self.grid.exit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn corridor() -> CarvedMaze {
        // 3x1 maze with both walls removed
        let grid = MazeGrid::new(3, 1).unwrap();
        CarvedMaze::new(grid, 0, grid.walls())
    }

    #[test]
    fn test_solve_corridor() {
        let path = corridor().solve_corners().unwrap();
        assert_eq!(
            path.vertices(),
            vec![Room::new(0, 0), Room::new(0, 1), Room::new(0, 2)]
        );
        assert_eq!(path.total_weight(), 2.0);
    }

    #[test]
    fn test_solve_blocked_is_failure() {
        let grid = MazeGrid::new(3, 1).unwrap();
        let maze = CarvedMaze::new(grid, 0, [Wall::between(Room::new(0, 0), Room::new(0, 1))]);
        assert_eq!(maze.solve_corners().unwrap(), ShortestPath::Failure);
    }

    #[test]
    fn test_solve_rejects_rooms_outside_grid() {
        let err = corridor().solve(Room::new(0, 0), Room::new(4, 4)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_carved_maze_is_always_solvable() {
        for seed in 0..20 {
            let grid = MazeGrid::new(7, 5).unwrap();
            let maze = KruskalMazeCarver::new(seed).carve(&grid).unwrap();
            let path = maze.solve_corners().unwrap();
            assert!(path.exists());
            for pair in path.vertices().windows(2) {
                assert!(maze.is_open(pair[0], pair[1]));
            }
        }
    }
}
