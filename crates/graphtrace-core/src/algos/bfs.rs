use std::collections::{HashSet, VecDeque};

use super::shared::Adjacency;
use crate::graph::Graph;
use crate::trace::recorder::TraceRecorder;
use crate::trace::Trace;

/// Breadth-first search trace.
///
/// Every incident edge of a dequeued node is reported, including edges back
/// to nodes that were already discovered. Reaching `end` stops the search
/// and drops whatever is left in the frontier.
#[tracing::instrument(skip(graph), fields(start = %start, end = ?end, nodes = graph.node_count()))]
pub fn bfs<'a>(graph: &'a Graph, start: &'a str, end: Option<&str>) -> Trace {
    let mut recorder = TraceRecorder::new("bfs");
    let adjacency = Adjacency::new(graph);
    if !adjacency.contains(start) {
        tracing::warn!(start, "start node not in graph");
        return recorder.finish();
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);
    recorder.visit(start, format!("Start BFS from node {}", start));

    while let Some(current) = queue.pop_front() {
        if Some(current) == end {
            recorder.complete(
                current,
                format!("Target node {} found! BFS complete.", current),
            );
            break;
        }

        for (edge, neighbor) in adjacency.neighbors(current) {
            recorder.explore(
                Some(edge.id.as_str()),
                format!("Exploring edge from {} to {}", current, neighbor),
            );

            if visited.insert(neighbor) {
                queue.push_back(neighbor);
                recorder.visit(
                    neighbor,
                    format!("Visit node {} from {}", neighbor, current),
                );
            }
        }

        recorder.complete(current, format!("Completed processing node {}", current));
    }

    recorder.finish()
}
