use serde::Serialize;

use super::shared::DistanceMatrix;
use crate::graph::Graph;
use crate::trace::recorder::TraceRecorder;
use crate::trace::Trace;

/// Trace and final all-pairs matrix from a Floyd-Warshall run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloydWarshallRun {
    pub trace: Trace,
    pub matrix: DistanceMatrix,
}

/// Seed matrix: 0 on the diagonal, the cheapest stored `source -> target`
/// weight per pair, infinity elsewhere
fn initial_matrix(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.node_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for edge in graph.edges() {
        let (Some(i), Some(j)) = (graph.node_index(&edge.source), graph.node_index(&edge.target))
        else {
            continue;
        };
        if i != j {
            dist[i][j] = dist[i][j].min(edge.cost());
        }
    }
    dist
}

/// Floyd-Warshall trace over every pair of nodes.
///
/// Loops run `k`, then `i`, then `j` in canonical node order. Each strict
/// improvement emits `explore-edge` (backed by the stored `i -> j` edge when
/// one exists) followed by `visit-node(j)`. Undirected graphs only yield a
/// symmetric matrix when the edge list stores both directions.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edges().len()))]
pub fn floyd_warshall_run(graph: &Graph) -> FloydWarshallRun {
    let mut recorder = TraceRecorder::new("floyd-warshall");
    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    let n = ids.len();
    let mut dist = initial_matrix(graph);

    for k in 0..n {
        for i in 0..n {
            let via = dist[i][k];
            if via == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let candidate = via + dist[k][j];
                if candidate < dist[i][j] {
                    dist[i][j] = candidate;
                    let edge_id = graph.directed_edge(ids[i], ids[j]).map(|e| e.id.as_str());
                    recorder.explore(
                        edge_id,
                        format!("Relax {} -> {} through {}", ids[i], ids[j], ids[k]),
                    );
                    recorder.visit(
                        ids[j],
                        format!(
                            "Shortest distance from {} to {} is now {}",
                            ids[i], ids[j], candidate
                        ),
                    );
                }
            }
        }
    }

    FloydWarshallRun {
        trace: recorder.finish(),
        matrix: DistanceMatrix::new(ids.iter().map(|id| id.to_string()).collect(), dist),
    }
}

/// Floyd-Warshall trace only
pub fn floyd_warshall(graph: &Graph) -> Trace {
    floyd_warshall_run(graph).trace
}
