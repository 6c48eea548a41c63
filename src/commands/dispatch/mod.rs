//! Command dispatch logic for graphtrace

use std::time::Instant;

use crate::cli::Cli;
use graphtrace_core::config::TraceConfig;
use graphtrace_core::error::Result;
use tracing::debug;

mod command;

use command::{Command, NoCommand};
pub use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Explicit `--config` wins; otherwise `graphtrace.toml` in the working
/// directory, falling back to defaults
fn load_config(cli: &Cli) -> Result<TraceConfig> {
    match &cli.config {
        Some(path) => TraceConfig::load(path),
        None => TraceConfig::load_or_default(&std::env::current_dir()?),
    }
}
