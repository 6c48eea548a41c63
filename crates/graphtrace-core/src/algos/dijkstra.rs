use std::collections::{HashMap, HashSet};

use super::shared::{distance_of, Adjacency, Distances, ShortestPathRun};
use crate::graph::Graph;
use crate::trace::recorder::TraceRecorder;
use crate::trace::Trace;

/// Pending entry in the working list
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WorkEntry<'a> {
    pub node_id: &'a str,
    pub distance: f64,
}

/// Take the entry with the smallest distance.
///
/// The list is stable-sorted before taking the head, so equal distances
/// resolve in insertion order.
pub(crate) fn take_nearest<'a>(working: &mut Vec<WorkEntry<'a>>) -> Option<WorkEntry<'a>> {
    if working.is_empty() {
        return None;
    }
    working.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Some(working.remove(0))
}

/// State tracked during a Dijkstra run
struct DijkstraState<'a> {
    distances: HashMap<&'a str, f64>,
    finalized: HashSet<&'a str>,
    working: Vec<WorkEntry<'a>>,
    recorder: TraceRecorder,
}

impl<'a> DijkstraState<'a> {
    fn new(start: &'a str) -> Self {
        let mut distances = HashMap::new();
        distances.insert(start, 0.0);
        Self {
            distances,
            finalized: HashSet::new(),
            working: vec![WorkEntry {
                node_id: start,
                distance: 0.0,
            }],
            recorder: TraceRecorder::new("dijkstra"),
        }
    }
}

/// Dijkstra trace and final distance table.
///
/// Each extracted node is finalized with a `complete-node`, every connecting
/// edge of it is reported, and a `visit-node` marks each strict distance
/// improvement. Superseded entries stay in the working list and are skipped
/// when extracted. Negative weights are not detected.
#[tracing::instrument(skip(graph), fields(start = %start, end = ?end, nodes = graph.node_count()))]
pub fn dijkstra_run<'a>(graph: &'a Graph, start: &'a str, end: Option<&str>) -> ShortestPathRun {
    let adjacency = Adjacency::new(graph);
    let mut state = DijkstraState::new(start);
    if !adjacency.contains(start) {
        tracing::warn!(start, "start node not in graph");
        state.distances.clear();
        state.working.clear();
    }

    while let Some(entry) = take_nearest(&mut state.working) {
        let current = entry.node_id;
        if !state.finalized.insert(current) {
            tracing::trace!(node = current, distance = entry.distance, "skip stale entry");
            continue;
        }

        let current_distance = distance_of(&state.distances, current);
        state.recorder.complete(
            current,
            format!(
                "Finalized node {} with distance {}",
                current, current_distance
            ),
        );
        if Some(current) == end {
            tracing::debug!(node = current, "target finalized");
            break;
        }

        for (_, neighbor) in adjacency.neighbors(current) {
            let Some(edge) = graph.edge_between(current, neighbor) else {
                continue;
            };
            let weight = edge.cost();
            state.recorder.explore(
                Some(edge.id.as_str()),
                format!(
                    "Checking edge {} -> {} (weight {})",
                    current, neighbor, weight
                ),
            );

            let candidate = current_distance + weight;
            if candidate < distance_of(&state.distances, neighbor) {
                state.distances.insert(neighbor, candidate);
                state.working.push(WorkEntry {
                    node_id: neighbor,
                    distance: candidate,
                });
                state.recorder.visit(
                    neighbor,
                    format!("Updated distance of {} to {}", neighbor, candidate),
                );
            }
        }
    }

    ShortestPathRun {
        distances: Distances::collect(graph, &state.distances),
        trace: state.recorder.finish(),
    }
}

/// Dijkstra trace only
pub fn dijkstra<'a>(graph: &'a Graph, start: &'a str, end: Option<&str>) -> Trace {
    dijkstra_run(graph, start, end).trace
}
