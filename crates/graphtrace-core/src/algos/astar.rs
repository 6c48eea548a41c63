use std::collections::HashMap;

use super::shared::{distance_of, Adjacency, Distances, ShortestPathRun};
use crate::graph::Graph;
use crate::trace::recorder::TraceRecorder;
use crate::trace::Trace;

/// Open set that iterates in insertion order.
///
/// Removing and re-adding a node moves it to the back, and adding a member
/// that is already present does nothing.
#[derive(Debug, Default)]
struct OpenSet<'a> {
    members: Vec<&'a str>,
}

impl<'a> OpenSet<'a> {
    fn insert(&mut self, id: &'a str) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    fn remove(&mut self, id: &str) {
        self.members.retain(|m| *m != id);
    }

    /// First member with the smallest f-score, scanning in insertion order
    fn first_minimal(&self, f_scores: &HashMap<&str, f64>) -> Option<&'a str> {
        let mut best: Option<(&'a str, f64)> = None;
        for &id in &self.members {
            let f = distance_of(f_scores, id);
            match best {
                Some((_, best_f)) if f >= best_f => {}
                _ => best = Some((id, f)),
            }
        }
        best.map(|(id, _)| id)
    }
}

/// A* trace and final g-scores.
///
/// Node heuristics default to 0, which degrades the search to Dijkstra
/// order. Each selected node is reported with `visit-node`; reaching `goal`
/// emits a final `complete-node` and stops. A node is expanded at most
/// `|V|` times, which bounds the trace when negative cycles are reachable.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal, nodes = graph.node_count()))]
pub fn a_star_run<'a>(graph: &'a Graph, start: &'a str, goal: &str) -> ShortestPathRun {
    let mut recorder = TraceRecorder::new("a-star");
    let adjacency = Adjacency::new(graph);
    let mut g_scores: HashMap<&str, f64> = HashMap::new();
    let mut f_scores: HashMap<&str, f64> = HashMap::new();
    let mut expansions: HashMap<&str, usize> = HashMap::new();
    let mut open = OpenSet::default();

    let heuristic = |id: &str| {
        graph
            .find_node(id)
            .map(|n| n.heuristic_or_zero())
            .unwrap_or(0.0)
    };

    if adjacency.contains(start) {
        g_scores.insert(start, 0.0);
        f_scores.insert(start, heuristic(start));
        open.insert(start);
    } else {
        tracing::warn!(start, "start node not in graph");
    }

    while let Some(current) = open.first_minimal(&f_scores) {
        recorder.visit(
            current,
            format!(
                "Visit node {} with f = {:.2}",
                current,
                distance_of(&f_scores, current)
            ),
        );
        if current == goal {
            recorder.complete(
                current,
                format!("Goal node {} reached! A* complete.", current),
            );
            break;
        }
        open.remove(current);

        let count = expansions.entry(current).or_insert(0);
        *count += 1;
        if *count > graph.node_count() {
            tracing::warn!(node = current, "expansion limit reached, stopping search");
            recorder.complete(
                current,
                format!(
                    "Expansion limit reached at node {}; negative cycle suspected. A* stopped.",
                    current
                ),
            );
            break;
        }

        let current_g = distance_of(&g_scores, current);
        for (_, neighbor) in adjacency.neighbors(current) {
            let Some(edge) = graph.edge_between(current, neighbor) else {
                continue;
            };
            recorder.explore(
                Some(edge.id.as_str()),
                format!("Exploring edge from {} to {}", current, neighbor),
            );

            let tentative_g = current_g + edge.cost();
            if tentative_g < distance_of(&g_scores, neighbor) {
                let f = tentative_g + heuristic(neighbor);
                g_scores.insert(neighbor, tentative_g);
                f_scores.insert(neighbor, f);
                open.insert(neighbor);
                recorder.visit(
                    neighbor,
                    format!(
                        "Update node {}: g = {}, f = {:.2}",
                        neighbor, tentative_g, f
                    ),
                );
            }
        }

        recorder.complete(current, format!("Finished expanding node {}", current));
    }

    ShortestPathRun {
        distances: Distances::collect(graph, &g_scores),
        trace: recorder.finish(),
    }
}

/// A* trace only
pub fn a_star<'a>(graph: &'a Graph, start: &'a str, goal: &str) -> Trace {
    a_star_run(graph, start, goal).trace
}
