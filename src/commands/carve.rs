//! `graphkit carve` command

use graphkit_core::config::MazeConfig;
use graphkit_core::error::Result;
use graphkit_core::maze::{render_ascii, resolve_seed, CarvedMaze, KruskalMazeCarver, MazeGrid};
use tracing::debug;

use crate::cli::Cli;
use crate::commands::format::{maze_json, output_by_format_result, print_json};

/// Carve a maze from the merged settings
pub fn carve_maze(config: &MazeConfig) -> Result<CarvedMaze> {
    let grid = MazeGrid::new(config.width, config.height)?;
    let seed = resolve_seed(config.seed);
    debug!(width = grid.width(), height = grid.height(), seed, "carve_maze");
    KruskalMazeCarver::new(seed).carve(&grid)
}

/// Execute the carve command
pub fn execute(cli: &Cli, config: &MazeConfig) -> Result<()> {
    let maze = carve_maze(config)?;

    output_by_format_result!(cli.format,
        json => print_json(&maze_json(&maze)),
        human => {
            print!("{}", render_ascii(&maze, &[]));
            if !cli.quiet {
                println!(
                    "{}x{} maze, {} walls removed (seed {})",
                    maze.grid().width(),
                    maze.grid().height(),
                    maze.removed_walls().len(),
                    maze.seed()
                );
            }
        }
    )
}
