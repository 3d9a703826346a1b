//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{demo, distances, dump, path};
use shortpath_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("shortpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over weighted undirected graphs.");
        println!();
        println!("Run `shortpath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => path::execute(ctx.cli, args, ctx.start),
            Commands::Distances(args) => distances::execute(ctx.cli, args, ctx.start),
            Commands::Dump(args) => dump::execute(ctx.cli, args, ctx.start),
            Commands::Demo => demo::execute(ctx.cli),
        }
    }
}
