use serde::Serialize;
use std::collections::HashMap;

use super::shared::{distance_of, Adjacency, Distances};
use crate::graph::Graph;
use crate::trace::recorder::TraceRecorder;
use crate::trace::Trace;

/// Description of the terminal step emitted when a cycle is found
pub const NEGATIVE_CYCLE_DESCRIPTION: &str = "negative weight cycle detected";

/// Trace, distances and predecessor links from a Bellman-Ford run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordRun {
    pub trace: Trace,
    pub distances: Distances,
    pub negative_cycle: bool,
    start: String,
    predecessors: HashMap<String, String>,
}

impl BellmanFordRun {
    /// Node whose edge last improved `id`
    pub fn predecessor(&self, id: &str) -> Option<&str> {
        self.predecessors.get(id).map(String::as_str)
    }

    /// Node ids from the start to `target` following predecessor links.
    ///
    /// Returns `None` when `target` is unreachable or the links loop, which
    /// can only happen when a negative cycle was detected.
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        if !self.distances.is_reachable(target) {
            return None;
        }
        let mut path = vec![target.to_string()];
        let mut current = target;
        while current != self.start {
            current = self.predecessor(current)?;
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(current.to_string());
        }
        path.reverse();
        Some(path)
    }
}

/// Bellman-Ford trace over the stored edge list.
///
/// Runs `|V| - 1` passes, reading every edge as `source -> target` in
/// storage order. Each relaxation emits `explore-edge` then
/// `visit-node(target)`. A final scan emits a single
/// [`NEGATIVE_CYCLE_DESCRIPTION`] step on the first edge that can still be
/// relaxed.
#[tracing::instrument(skip(graph), fields(start = %start, nodes = graph.node_count(), edges = graph.edges().len()))]
pub fn bellman_ford_run<'a>(graph: &'a Graph, start: &'a str) -> BellmanFordRun {
    let mut recorder = TraceRecorder::new("bellman-ford");
    let adjacency = Adjacency::new(graph);
    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();

    if adjacency.contains(start) {
        distances.insert(start, 0.0);
    } else {
        tracing::warn!(start, "start node not in graph");
    }

    let edges: Vec<_> = graph
        .edges()
        .iter()
        .filter(|e| adjacency.is_well_formed(e))
        .collect();

    let passes = graph.node_count().saturating_sub(1);
    for pass in 1..=passes {
        let mut changed = false;
        for edge in &edges {
            let (u, v) = (edge.source.as_str(), edge.target.as_str());
            let candidate = distance_of(&distances, u) + edge.cost();
            if candidate < distance_of(&distances, v) {
                distances.insert(v, candidate);
                predecessors.insert(v, u);
                changed = true;
                recorder.explore(
                    Some(edge.id.as_str()),
                    format!("Pass {}: relax edge {} -> {}", pass, u, v),
                );
                recorder.visit(v, format!("Updated distance of {} to {}", v, candidate));
            }
        }
        if !changed {
            // later passes cannot change anything either
            tracing::debug!(pass, "distances settled early");
            break;
        }
    }

    let mut negative_cycle = false;
    for edge in &edges {
        let candidate = distance_of(&distances, &edge.source) + edge.cost();
        if candidate < distance_of(&distances, &edge.target) {
            recorder.explore(Some(edge.id.as_str()), NEGATIVE_CYCLE_DESCRIPTION.to_string());
            negative_cycle = true;
            tracing::debug!(edge = %edge.id, "negative weight cycle detected");
            break;
        }
    }

    BellmanFordRun {
        distances: Distances::collect(graph, &distances),
        trace: recorder.finish(),
        negative_cycle,
        start: start.to_string(),
        predecessors: predecessors
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// Bellman-Ford trace only
pub fn bellman_ford<'a>(graph: &'a Graph, start: &'a str) -> Trace {
    bellman_ford_run(graph, start).trace
}
