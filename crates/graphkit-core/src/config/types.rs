//! Configuration type definitions

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Maze generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Rooms per row
    #[serde(default = "default_width")]
    pub width: usize,

    /// Rooms per column
    #[serde(default = "default_height")]
    pub height: usize,

    /// RNG seed for wall weights; a random seed is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
        }
    }
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}
