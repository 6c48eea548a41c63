//! Algorithm selection by name
//!
//! The dispatcher forwards to one of the algorithms in [`crate::algos`]. It
//! does not validate the graph or the node ids; only the A* contract (an end
//! node is required) is enforced here.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::algos;
use crate::error::{Result, TraceError};
use crate::graph::Graph;
use crate::trace::Trace;

/// The closed set of supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    BellmanFord,
    FloydWarshall,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
    ];

    /// Identifier used on the command line and in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a-star",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-first search, optional early exit at the end node",
            Algorithm::Dfs => "Depth-first search with backtracking, optional early exit",
            Algorithm::Dijkstra => "Single-source shortest paths, optional early exit",
            Algorithm::AStar => "Heuristic-guided shortest path, end node required",
            Algorithm::BellmanFord => "Relaxation over all edges with negative-cycle detection",
            Algorithm::FloydWarshall => "All-pairs shortest paths, no start or end node",
        }
    }

    pub fn uses_start(self) -> bool {
        !matches!(self, Algorithm::FloydWarshall)
    }

    pub fn requires_end(self) -> bool {
        matches!(self, Algorithm::AStar)
    }

    /// Whether an end node changes the trace at all
    pub fn uses_end(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra | Algorithm::AStar
        )
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == name)
            .ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat a blank end id the same as no end id
fn normalize_end(end: Option<&str>) -> Option<&str> {
    end.filter(|e| !e.trim().is_empty())
}

/// Run an algorithm by name.
///
/// Unknown names produce an empty trace rather than an error.
pub fn run<'a>(
    graph: &'a Graph,
    algorithm: &str,
    start: &'a str,
    end: Option<&str>,
) -> Result<Trace> {
    match algorithm.parse::<Algorithm>() {
        Ok(algorithm) => run_algorithm(graph, algorithm, start, end),
        Err(_) => {
            tracing::debug!(algorithm, "unknown algorithm, returning empty trace");
            Ok(Trace::empty())
        }
    }
}

/// Run a known algorithm.
///
/// Fails with [`TraceError::MissingEndNode`] when A* is called without an
/// end node.
pub fn run_algorithm<'a>(
    graph: &'a Graph,
    algorithm: Algorithm,
    start: &'a str,
    end: Option<&str>,
) -> Result<Trace> {
    let started = Instant::now();
    let end = normalize_end(end);

    let trace = match algorithm {
        Algorithm::Bfs => algos::bfs(graph, start, end),
        Algorithm::Dfs => algos::dfs(graph, start, end),
        Algorithm::Dijkstra => algos::dijkstra(graph, start, end),
        Algorithm::AStar => {
            let goal = end.ok_or_else(|| TraceError::MissingEndNode {
                algorithm: algorithm.to_string(),
            })?;
            algos::a_star(graph, start, goal)
        }
        Algorithm::BellmanFord => algos::bellman_ford(graph, start),
        Algorithm::FloydWarshall => algos::floyd_warshall(graph),
    };

    crate::trace_time!(started, "run_algorithm", steps = trace.len());
    Ok(trace)
}
