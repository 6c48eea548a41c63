use std::collections::HashSet;

use super::shared::Adjacency;
use crate::graph::{Edge, Graph};
use crate::trace::recorder::TraceRecorder;
use crate::trace::Trace;

/// A node on the explicit DFS stack with its remaining neighbors
struct Frame<'a> {
    node: &'a str,
    neighbors: Vec<(&'a Edge, &'a str)>,
    next: usize,
}

struct DfsState<'a> {
    adjacency: Adjacency<'a>,
    visited: HashSet<&'a str>,
    stack: Vec<Frame<'a>>,
    recorder: TraceRecorder,
}

impl<'a> DfsState<'a> {
    /// Mark `node` visited and push its frame; returns true if it is the target
    fn enter(&mut self, node: &'a str, end: Option<&str>) -> bool {
        self.visited.insert(node);
        self.recorder
            .visit(node, format!("Visit node {} (DFS)", node));

        if Some(node) == end {
            self.recorder.complete(
                node,
                format!("Target node {} found! DFS complete.", node),
            );
            return true;
        }

        self.stack.push(Frame {
            node,
            neighbors: self.adjacency.neighbors(node),
            next: 0,
        });
        false
    }
}

/// Depth-first search trace.
///
/// Only edges leading to unvisited nodes are reported. Each node emits a
/// backtrack `complete-node` once its neighbors are exhausted. Finding `end`
/// stops the whole search; ancestors on the stack do not backtrack.
///
/// Uses an explicit stack so deep graphs cannot overflow the call stack; the
/// emitted order is identical to the recursive formulation.
#[tracing::instrument(skip(graph), fields(start = %start, end = ?end, nodes = graph.node_count()))]
pub fn dfs<'a>(graph: &'a Graph, start: &'a str, end: Option<&str>) -> Trace {
    let mut state = DfsState {
        adjacency: Adjacency::new(graph),
        visited: HashSet::new(),
        stack: Vec::new(),
        recorder: TraceRecorder::new("dfs"),
    };
    if !state.adjacency.contains(start) {
        tracing::warn!(start, "start node not in graph");
        return state.recorder.finish();
    }

    if state.enter(start, end) {
        return state.recorder.finish();
    }

    while let Some(frame) = state.stack.last_mut() {
        let node = frame.node;
        let mut descend = None;
        while frame.next < frame.neighbors.len() {
            let (edge, neighbor) = frame.neighbors[frame.next];
            frame.next += 1;
            if !state.visited.contains(neighbor) {
                descend = Some((edge, neighbor));
                break;
            }
        }

        match descend {
            Some((edge, neighbor)) => {
                state.recorder.explore(
                    Some(edge.id.as_str()),
                    format!("Exploring edge from {} to {}", node, neighbor),
                );
                if state.enter(neighbor, end) {
                    break;
                }
            }
            None => {
                state
                    .recorder
                    .complete(node, format!("Backtracking from node {}", node));
                state.stack.pop();
            }
        }
    }

    state.recorder.finish()
}
