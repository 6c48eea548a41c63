//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{algorithms, generate, replay, run};
use graphtrace_core::config::TraceConfig;
use graphtrace_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a TraceConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a TraceConfig, start: Instant) -> Self {
        Self { cli, config, start }
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
        println!("graphtrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step traces of graph traversal and shortest-path algorithms.");
        println!();
        println!("Run `graphtrace --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Run(args) => run::execute(ctx, args),
            Commands::Replay { run, at } => replay::execute(ctx, run, *at),
            Commands::Generate {
                nodes,
                probability,
                seed,
                matrix,
            } => generate::execute(
                ctx,
                generate::GenerateOptions {
                    nodes: *nodes,
                    probability: *probability,
                    seed: *seed,
                    matrix: *matrix,
                },
            ),
            Commands::Algorithms => algorithms::execute(ctx),
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
