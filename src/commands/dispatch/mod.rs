//! Command dispatch logic for shortpath

use std::time::Instant;

use crate::cli::Cli;
use shortpath_core::error::Result;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
