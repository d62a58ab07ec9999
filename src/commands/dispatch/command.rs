//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands, MazeArgs};
use crate::commands;
use graphkit_core::config::MazeConfig;
use graphkit_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Config file values (or defaults) with command-line overrides applied
    pub fn maze_config(&self, args: &MazeArgs) -> Result<MazeConfig> {
        let base = match &self.cli.config {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::default(),
        };
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(base.with_overrides(args.width, args.height, args.seed))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Carve(args) => commands::carve::execute(ctx.cli, &ctx.maze_config(args)?),
            Commands::Solve(args) => commands::solve::execute(ctx.cli, &ctx.maze_config(args)?),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Carve and solve mazes with Kruskal and Dijkstra.");
        println!();
        println!("Run `graphkit --help` for usage information.");
        Ok(())
    }
}
