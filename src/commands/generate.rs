//! `graphtrace generate` command - random graphs for experiments

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphtrace_core::error::Result;
use graphtrace_core::graph::random_graph;
use graphtrace_core::records::{format_edge, format_graph_header, format_node};

pub struct GenerateOptions {
    pub nodes: usize,
    pub probability: Option<f64>,
    pub seed: Option<u64>,
    pub matrix: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Execute the generate command
pub fn execute(ctx: &CommandContext, options: GenerateOptions) -> Result<()> {
    let mut random = ctx.config.random;
    if let Some(p) = options.probability {
        random.edge_probability = p;
    }
    let seed = options.seed.unwrap_or_else(clock_seed);

    let graph = random_graph(options.nodes, &random, &ctx.config.layout, seed)?;

    if options.matrix {
        let matrix = graph.to_adjacency_matrix();
        match ctx.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&matrix)?);
            }
            OutputFormat::Human | OutputFormat::Records => {
                if !ctx.cli.quiet {
                    println!("# seed {}", seed);
                }
                for row in &matrix {
                    let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
                    println!("{}", cells.join(" "));
                }
            }
        }
        return Ok(());
    }

    match ctx.cli.format {
        OutputFormat::Json | OutputFormat::Human => {
            if ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet {
                eprintln!("seed: {}", seed);
            }
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        OutputFormat::Records => {
            println!("{} seed={}", format_graph_header(&graph), seed);
            for node in graph.nodes() {
                println!("{}", format_node(node));
            }
            for edge in graph.edges() {
                println!("{}", format_edge(edge));
            }
        }
    }

    Ok(())
}
