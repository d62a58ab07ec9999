//! Format output dispatch helpers

/// Dispatch output by format; the json branch returns a `Result`, human returns `()`.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&value) },
///     human => { println!("{}", art); }
/// )
/// ```
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format_result;

use graphkit_core::error::Result;
use graphkit_core::maze::{CarvedMaze, Room, Wall};
use serde_json::json;

/// Print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn room_json(room: &Room) -> serde_json::Value {
    json!({ "row": room.row, "col": room.col })
}

fn wall_json(wall: &Wall) -> serde_json::Value {
    json!({ "room1": room_json(&wall.room1), "room2": room_json(&wall.room2) })
}

/// Common JSON fields describing a carved maze
pub fn maze_json(maze: &CarvedMaze) -> serde_json::Value {
    json!({
        "width": maze.grid().width(),
        "height": maze.grid().height(),
        "seed": maze.seed(),
        "removed_walls": maze.removed_walls().iter().map(wall_json).collect::<Vec<_>>(),
    })
}

/// Rooms along a path as `{row, col}` objects
pub fn path_json(rooms: &[Room]) -> serde_json::Value {
    serde_json::Value::Array(rooms.iter().map(room_json).collect())
}
