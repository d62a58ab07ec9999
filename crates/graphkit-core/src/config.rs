//! Maze configuration for graphkit
//!
//! Configuration is read from an optional TOML file; command-line flags
//! override whatever the file sets.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::maze::MazeGrid;

pub use crate::maze::MAX_ROOMS;
pub use types::{MazeConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

impl MazeConfig {
    /// Load configuration from a file.
    ///
    /// Unreadable files, bad TOML and out-of-range values all fail with
    /// `InvalidConfig`.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| GraphError::invalid_config(path.display(), e))?;
        let config: MazeConfig =
            toml::from_str(&content).map_err(|e| GraphError::invalid_config(path.display(), e))?;
        config
            .validate()
            .map_err(|e| GraphError::invalid_config(path.display(), e))?;
        tracing::debug!(path = %path.display(), ?config, "loaded_config");
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        width: Option<usize>,
        height: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Reject grids the carver cannot build
    pub fn validate(&self) -> Result<()> {
        MazeGrid::new(self.width, self.height).map(|_| ())
    }
}
