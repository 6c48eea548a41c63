//! `graphtrace replay` command - statuses after part of a trace

use crate::cli::{OutputFormat, RunArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::input;
use graphtrace_core::error::Result;
use graphtrace_core::records::{format_edge, format_node, format_replay_header};
use graphtrace_core::trace::{Replay, StatusPolicy};
use graphtrace_core::{run_algorithm, Graph};

/// Execute the replay command
pub fn execute(ctx: &CommandContext, args: &RunArgs, at: Option<usize>) -> Result<()> {
    let algorithm = input::resolve_algorithm(args, ctx.config)?;
    let graph = input::load_graph(args, ctx.config)?;
    let (start, end) = input::resolve_endpoints(
        &graph,
        algorithm,
        args.start.as_deref(),
        args.end.as_deref(),
    )?;

    let trace = run_algorithm(&graph, algorithm, &start, end.as_deref())?;
    let policy = StatusPolicy::for_algorithm(algorithm);

    let mut replay = Replay::new(&graph, &trace, policy);
    replay.seek(at.unwrap_or(trace.len()));
    let snapshot = replay.snapshot();
    let last_step = replay.current_step();

    tracing::debug!(
        %algorithm,
        %policy,
        at = replay.cursor(),
        steps = trace.len(),
        "replayed trace"
    );

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": algorithm,
                "policy": policy,
                "at": replay.cursor(),
                "steps": trace.len(),
                "lastStep": last_step,
                "graph": snapshot,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} after {} of {} steps ({} policy)",
                    algorithm,
                    replay.cursor(),
                    trace.len(),
                    policy
                );
                if let Some(step) = last_step {
                    println!("last: {}", step.description);
                }
                println!();
            }
            print_statuses(&snapshot);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_replay_header(algorithm.as_str(), replay.cursor(), &trace)
            );
            for node in snapshot.nodes() {
                println!("{}", format_node(node));
            }
            for edge in snapshot.edges() {
                println!("{}", format_edge(edge));
            }
        }
    }

    Ok(())
}

fn print_statuses(graph: &Graph) {
    for node in graph.nodes() {
        println!("  {:<8} {}", node.id, node.status);
    }
    for edge in graph.edges() {
        let arrow = if graph.is_directed() { "->" } else { "--" };
        println!(
            "  {:<8} {} {} {}  {}",
            edge.id, edge.source, arrow, edge.target, edge.status
        );
    }
}
