//! CLI argument parsing for graphkit
//!
//! Supports global flags: --config, --format, --quiet, --verbose

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::MazeArgs;
pub use output::OutputFormat;

/// Graphkit - carve and solve mazes with Kruskal and Dijkstra
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Maze config file (TOML)
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Carve a random maze by removing a minimum spanning tree of walls
    Carve(MazeArgs),

    /// Carve a maze and find the shortest path between opposite corners
    Solve(MazeArgs),
}
