//! CLI argument parsing for graphtrace
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use graphtrace_core::format::OutputFormat;
use graphtrace_core::Algorithm;
use parse::{parse_algorithm, parse_format, parse_probability};

/// Graphtrace - step-by-step traces of graph algorithms
#[derive(Parser, Debug)]
#[command(name = "graphtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (a level like `trace`, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./graphtrace.toml when present)
    #[arg(long, global = true, env = "GRAPHTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an algorithm and print its trace
    Run(RunArgs),

    /// Show node and edge statuses after replaying part of a trace
    Replay {
        #[command(flatten)]
        run: RunArgs,

        /// Number of steps to apply (clamped to the trace length)
        #[arg(long)]
        at: Option<usize>,
    },

    /// Generate a random graph on a circular layout
    Generate {
        /// Number of nodes
        #[arg(long, short)]
        nodes: usize,

        /// Probability of each candidate edge (overrides config)
        #[arg(long, short, value_parser = parse_probability)]
        probability: Option<f64>,

        /// Seed for reproducible output (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,

        /// Print an adjacency matrix instead of graph JSON
        #[arg(long)]
        matrix: bool,
    },

    /// List supported algorithms
    Algorithms,
}

/// Algorithm and graph input shared by `run` and `replay`
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Algorithm identifier (defaults to `run.algorithm` from config)
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Graph JSON file
    #[arg(long, short, conflicts_with = "matrix", required_unless_present = "matrix")]
    pub graph: Option<PathBuf>,

    /// Adjacency matrix file, one whitespace-separated row per line
    #[arg(long, short)]
    pub matrix: Option<PathBuf>,

    /// Start node id (defaults to the first node)
    #[arg(long, short)]
    pub start: Option<String>,

    /// End node id (required for a-star)
    #[arg(long, short)]
    pub end: Option<String>,

    /// Read the matrix as directed (graph JSON carries its own flag)
    #[arg(long)]
    pub directed: bool,
}
