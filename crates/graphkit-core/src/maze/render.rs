use crate::maze::grid::Room;
use crate::maze::CarvedMaze;
use std::collections::HashSet;

const CORNER: char = '+';
const CLOSED_ROW: &str = "---";
const OPEN: &str = "   ";
const ON_PATH: &str = " * ";

/// Draw the maze as ASCII art, marking the rooms of `path` with `*`.
///
/// Each room is three characters wide; the output has `2 * height + 1` lines.
pub fn render_ascii(maze: &CarvedMaze, path: &[Room]) -> String {
    let grid = maze.grid();
    let on_path: HashSet<Room> = path.iter().copied().collect();
    let mut out = String::new();

    out.push(CORNER);
    for _ in 0..grid.width() {
        out.push_str(CLOSED_ROW);
        out.push(CORNER);
    }
    out.push('\n');

    for row in 0..grid.height() {
        out.push('|');
        for col in 0..grid.width() {
            let room = Room::new(row, col);
            out.push_str(if on_path.contains(&room) { ON_PATH } else { OPEN });
            let east_open =
                col + 1 < grid.width() && maze.is_open(room, Room::new(row, col + 1));
            out.push(if east_open { ' ' } else { '|' });
        }
        out.push('\n');

        out.push(CORNER);
        for col in 0..grid.width() {
            let room = Room::new(row, col);
            let south_open =
                row + 1 < grid.height() && maze.is_open(room, Room::new(row + 1, col));
            out.push_str(if south_open { OPEN } else { CLOSED_ROW });
            out.push(CORNER);
        }
        out.push('\n');
    }

    out
}
