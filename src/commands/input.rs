//! Graph input and endpoint resolution shared by `run` and `replay`

use std::fs;
use std::path::Path;

use crate::cli::RunArgs;
use graphtrace_core::config::TraceConfig;
use graphtrace_core::error::{Result, TraceError};
use graphtrace_core::{bail_usage, Algorithm, Graph};

/// Algorithm from the command line, or `run.algorithm` from config
pub fn resolve_algorithm(args: &RunArgs, config: &TraceConfig) -> Result<Algorithm> {
    match args.algorithm {
        Some(algorithm) => Ok(algorithm),
        None => config.run.algorithm.parse(),
    }
}

/// Load the graph named by `--graph` or `--matrix`
pub fn load_graph(args: &RunArgs, config: &TraceConfig) -> Result<Graph> {
    match (&args.graph, &args.matrix) {
        (Some(path), _) => load_graph_json(path),
        (None, Some(path)) => {
            let content = read(path)?;
            let rows = parse_matrix(&content)?;
            let directed = args.directed || config.run.directed;
            Graph::from_adjacency_matrix(&rows, directed, &config.layout)
        }
        (None, None) => bail_usage!("either --graph or --matrix is required"),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TraceError::io_operation("read", path.display(), e))
}

fn load_graph_json(path: &Path) -> Result<Graph> {
    let content = read(path)?;
    let graph: Graph = serde_json::from_str(&content).map_err(|e| TraceError::InvalidGraph {
        reason: format!("{}: {}", path.display(), e),
    })?;
    graph.validate()?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "loaded graph"
    );
    Ok(graph)
}

/// Parse an adjacency matrix: one row per line, values separated by
/// whitespace or commas. Blank lines and `#` comments are skipped.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| TraceError::InvalidMatrix {
                    reason: format!("line {}: '{}' is not a number", line_no + 1, token),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Start and end ids checked against the graph.
///
/// Start defaults to the first node. A blank end id counts as absent.
pub fn resolve_endpoints(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(String, Option<String>)> {
    let start = match start {
        Some(id) => {
            require_node(graph, id)?;
            id.to_string()
        }
        None => match graph.nodes().first() {
            Some(node) => node.id.clone(),
            None if !algorithm.uses_start() => String::new(),
            None => {
                return Err(TraceError::InvalidGraph {
                    reason: "graph has no nodes".to_string(),
                })
            }
        },
    };

    let end = match end.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => {
            require_node(graph, id)?;
            Some(id.to_string())
        }
        None => None,
    };

    if end.is_some() && !algorithm.uses_end() {
        tracing::warn!(%algorithm, "end node is ignored by this algorithm");
    }

    Ok((start, end))
}

fn require_node(graph: &Graph, id: &str) -> Result<()> {
    if graph.find_node(id).is_some() {
        Ok(())
    } else {
        Err(TraceError::node_not_found(id))
    }
}
