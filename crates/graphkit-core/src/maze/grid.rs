use crate::bail_invalid;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the maze grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Room {
    pub row: usize,
    pub col: usize,
}

impl Room {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The wall separating two adjacent rooms; `room1` always sorts before `room2`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Wall {
    pub room1: Room,
    pub room2: Room,
}

impl Wall {
    pub fn between(a: Room, b: Room) -> Self {
        if a <= b {
            Self { room1: a, room2: b }
        } else {
            Self { room1: b, room2: a }
        }
    }
}

/// Largest grid accepted (`width * height`)
pub const MAX_ROOMS: usize = 1_000_000;

/// Rectangular grid of rooms, every adjacent pair separated by a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MazeGrid {
    width: usize,
    height: usize,
}

impl MazeGrid {
    /// Fails with `InvalidValue` for a zero dimension or more than `MAX_ROOMS` rooms
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            bail_invalid!("width", width);
        }
        if height == 0 {
            bail_invalid!("height", height);
        }
        match width.checked_mul(height) {
            Some(rooms) if rooms <= MAX_ROOMS => Ok(Self { width, height }),
            _ => Err(GraphError::invalid_value(
                "grid size",
                format!("{}x{} (at most {} rooms)", width, height, MAX_ROOMS),
            )),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn room_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, room: Room) -> bool {
        room.row < self.height && room.col < self.width
    }

    /// Top-left room
    pub fn entrance(&self) -> Room {
        Room::new(0, 0)
    }

    /// Bottom-right room
    pub fn exit(&self) -> Room {
        Room::new(self.height - 1, self.width - 1)
    }

    /// Rooms in row-major order
    pub fn rooms(&self) -> impl Iterator<Item = Room> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Room::new(row, col)))
    }

    /// Every interior wall, in row-major order of its first room
    pub fn walls(&self) -> Vec<Wall> {
        let mut walls = Vec::with_capacity(2 * self.room_count());
        for room in self.rooms() {
            if room.col + 1 < self.width {
                walls.push(Wall::between(room, Room::new(room.row, room.col + 1)));
            }
            if room.row + 1 < self.height {
                walls.push(Wall::between(room, Room::new(room.row + 1, room.col)));
            }
        }
        walls
    }
}
