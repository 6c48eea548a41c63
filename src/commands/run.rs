//! `graphtrace run` command - print an algorithm's trace
//!
//! Shortest-path algorithms also report their final distances; the trace is
//! the same one the dispatcher would return.

use serde::Serialize;

use crate::cli::{OutputFormat, RunArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::input;
use graphtrace_core::algos::{self, DistanceMatrix, Distances};
use graphtrace_core::error::Result;
use graphtrace_core::records::{format_step, format_trace_header};
use graphtrace_core::{run_algorithm, Algorithm, Graph, Trace};

/// Final values computed alongside the trace
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Distances>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<DistanceMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<bool>,
}

/// Run `algorithm`, keeping whatever final values it produces
pub fn trace_with_summary(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    end: Option<&str>,
) -> Result<(Trace, Option<RunSummary>)> {
    let summary = |distances, matrix, negative_cycle| RunSummary {
        distances,
        matrix,
        negative_cycle,
    };
    Ok(match (algorithm, end) {
        (Algorithm::Dijkstra, _) => {
            let run = algos::dijkstra_run(graph, start, end);
            (run.trace, Some(summary(Some(run.distances), None, None)))
        }
        (Algorithm::AStar, Some(goal)) => {
            let run = algos::a_star_run(graph, start, goal);
            (run.trace, Some(summary(Some(run.distances), None, None)))
        }
        (Algorithm::BellmanFord, _) => {
            let run = algos::bellman_ford_run(graph, start);
            let negative_cycle = Some(run.negative_cycle);
            (run.trace, Some(summary(Some(run.distances), None, negative_cycle)))
        }
        (Algorithm::FloydWarshall, _) => {
            let run = algos::floyd_warshall_run(graph);
            (run.trace, Some(summary(None, Some(run.matrix), None)))
        }
        // bfs, dfs, and a-star without a goal go through the dispatcher contract
        _ => (run_algorithm(graph, algorithm, start, end)?, None),
    })
}

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let algorithm = input::resolve_algorithm(args, ctx.config)?;
    let graph = input::load_graph(args, ctx.config)?;
    let (start, end) = input::resolve_endpoints(
        &graph,
        algorithm,
        args.start.as_deref(),
        args.end.as_deref(),
    )?;

    let (trace, summary) = trace_with_summary(&graph, algorithm, &start, end.as_deref())?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": algorithm,
                "start": algorithm.uses_start().then_some(&start),
                "end": end,
                "steps": trace,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                if algorithm.uses_start() {
                    println!("{} from {}: {} steps", algorithm, start, trace.len());
                } else {
                    println!("{}: {} steps", algorithm, trace.len());
                }
            }
            for (index, step) in trace.iter().enumerate() {
                let target = step
                    .node_id
                    .as_deref()
                    .or(step.edge_id.as_deref())
                    .unwrap_or("-");
                println!(
                    "{:>4}  {:<13} {:<8} {}",
                    index, step.kind, target, step.description
                );
            }
            if let (Some(summary), false) = (&summary, ctx.cli.quiet) {
                print_summary(summary);
            }
        }
        OutputFormat::Records => {
            println!("{}", format_trace_header(algorithm.as_str(), &trace));
            for (index, step) in trace.iter().enumerate() {
                println!("{}", format_step(index, step));
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    if let Some(distances) = &summary.distances {
        println!();
        println!("distances:");
        for (id, distance) in distances.iter() {
            println!("  {:<8} {}", id, distance);
        }
    }
    if let Some(true) = summary.negative_cycle {
        println!("negative weight cycle detected");
    }
    if let Some(matrix) = &summary.matrix {
        println!();
        println!("{:<8} {}", "", matrix.ids().join("\t"));
        for (id, row) in matrix.ids().iter().zip(matrix.rows()) {
            let cells: Vec<String> = row.iter().map(|d| d.to_string()).collect();
            println!("{:<8} {}", id, cells.join("\t"));
        }
    }
}
