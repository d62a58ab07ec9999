//! `graphkit solve` command

use graphkit_core::config::MazeConfig;
use graphkit_core::error::{GraphError, Result};
use graphkit_core::maze::render_ascii;

use crate::cli::Cli;
use crate::commands::carve::carve_maze;
use crate::commands::format::{maze_json, output_by_format_result, path_json, print_json};

/// Execute the solve command
pub fn execute(cli: &Cli, config: &MazeConfig) -> Result<()> {
    let maze = carve_maze(config)?;
    let path = maze.solve_corners()?;
    if !path.exists() {
        // Carved mazes are spanning trees over every room
        return Err(GraphError::MazeNotConnected);
    }
    let rooms = path.vertices();
    let length = path.edges().len();

    output_by_format_result!(cli.format,
        json => {
            let mut output = maze_json(&maze);
            output["path"] = path_json(&rooms);
            output["length"] = serde_json::json!(length);
            print_json(&output)
        },
        human => {
            print!("{}", render_ascii(&maze, &rooms));
            if !cli.quiet {
                println!(
                    "path from {} to {}: {} steps (seed {})",
                    maze.grid().entrance(),
                    maze.grid().exit(),
                    length,
                    maze.seed()
                );
            }
        }
    )
}
