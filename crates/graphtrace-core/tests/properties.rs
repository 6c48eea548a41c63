//! Cross-algorithm properties of emitted traces

use std::collections::{HashMap, VecDeque};

use graphtrace_core::algos::{self, NEGATIVE_CYCLE_DESCRIPTION};
use graphtrace_core::config::{LayoutConfig, RandomGraphConfig};
use graphtrace_core::error::TraceError;
use graphtrace_core::graph::{random_graph, Graph, GraphBuilder};
use graphtrace_core::{run, run_algorithm, Algorithm, StepKind};

fn four_cycle() -> Graph {
    GraphBuilder::undirected()
        .with_nodes(4)
        .edge(0, 1, None)
        .edge(1, 2, None)
        .edge(2, 3, None)
        .edge(3, 0, None)
        .build()
}

fn sample_graphs() -> Vec<Graph> {
    let layout = LayoutConfig::default();
    let random = RandomGraphConfig::default();
    let mut graphs = vec![four_cycle()];
    for seed in 0..6 {
        graphs.push(random_graph(8, &random, &layout, seed).unwrap());
    }
    graphs
}

/// Hop distances from `start`, computed independently of the engine
fn hop_distances(graph: &Graph, start: &str) -> HashMap<String, usize> {
    let mut hops = HashMap::from([(start.to_string(), 0)]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(current) = queue.pop_front() {
        let depth = hops[&current];
        for next in graph.adjacent_node_ids(&current) {
            if !hops.contains_key(next) {
                hops.insert(next.to_string(), depth + 1);
                queue.push_back(next.to_string());
            }
        }
    }
    hops
}

#[test]
fn test_isolated_start_single_visit() {
    let graph = GraphBuilder::undirected()
        .with_nodes(3)
        .edge(1, 2, Some(4.0))
        .build();

    for trace in [
        algos::bfs(&graph, "n0", None),
        algos::dfs(&graph, "n0", None),
    ] {
        assert_eq!(trace.count(StepKind::VisitNode), 1);
        assert_eq!(trace.count(StepKind::ExploreEdge), 0);
        assert_eq!(trace.node_ids(StepKind::VisitNode), vec!["n0"]);
    }
}

#[test]
fn test_bfs_visits_by_hop_distance() {
    for graph in sample_graphs() {
        let hops = hop_distances(&graph, "n0");
        let trace = algos::bfs(&graph, "n0", None);
        let order: Vec<usize> = trace
            .node_ids(StepKind::VisitNode)
            .into_iter()
            .map(|id| hops[id])
            .collect();

        assert!(order.windows(2).all(|w| w[0] <= w[1]), "{:?}", order);
        assert_eq!(order.len(), hops.len());
    }
}

#[test]
fn test_dfs_finishes_subtree_before_sibling() {
    // n0 has two children; n1 leads on to n3
    let graph = GraphBuilder::undirected()
        .with_nodes(4)
        .edge(0, 1, None)
        .edge(0, 2, None)
        .edge(1, 3, None)
        .build();

    let trace = algos::dfs(&graph, "n0", None);
    assert_eq!(
        trace.node_ids(StepKind::VisitNode),
        vec!["n0", "n1", "n3", "n2"]
    );
    assert_eq!(
        trace.node_ids(StepKind::CompleteNode),
        vec!["n3", "n1", "n2", "n0"]
    );
}

#[test]
fn test_traces_are_idempotent() {
    for graph in sample_graphs() {
        for algorithm in Algorithm::ALL {
            let first = run_algorithm(&graph, algorithm, "n0", Some("n3")).unwrap();
            let second = run_algorithm(&graph, algorithm, "n0", Some("n3")).unwrap();
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap(),
                "{} is not deterministic",
                algorithm
            );
        }
    }
}

#[test]
fn test_four_cycle_bfs() {
    let trace = algos::bfs(&four_cycle(), "n0", None);

    let head: Vec<(StepKind, Option<&str>, Option<&str>)> = trace
        .iter()
        .take(6)
        .map(|s| (s.kind, s.node_id.as_deref(), s.edge_id.as_deref()))
        .collect();
    assert_eq!(
        head,
        vec![
            (StepKind::VisitNode, Some("n0"), None),
            (StepKind::ExploreEdge, None, Some("e0-1")),
            (StepKind::VisitNode, Some("n1"), None),
            (StepKind::ExploreEdge, None, Some("e0-3")),
            (StepKind::VisitNode, Some("n3"), None),
            (StepKind::CompleteNode, Some("n0"), None),
        ]
    );
    assert_eq!(trace.count(StepKind::VisitNode), 4);
    assert_eq!(trace.count(StepKind::CompleteNode), 4);

    let mut visited = trace.node_ids(StepKind::VisitNode);
    visited.sort_unstable();
    visited.dedup();
    assert_eq!(visited.len(), 4);
}

#[test]
fn test_dijkstra_path_distance() {
    let graph = GraphBuilder::directed()
        .with_nodes(3)
        .edge(0, 1, Some(2.0))
        .edge(1, 2, Some(3.0))
        .build();

    let result = algos::dijkstra_run(&graph, "n0", None);
    assert_eq!(result.distances.get("n2"), Some(5.0));

    let improvements = result
        .trace
        .node_ids(StepKind::VisitNode)
        .into_iter()
        .filter(|id| *id == "n2")
        .count();
    assert!((1..=2).contains(&improvements));
}

#[test]
fn test_shortest_path_visits_only_on_improvement() {
    // Two routes into n3; the second one is worse and must stay silent
    let graph = GraphBuilder::undirected()
        .with_nodes(4)
        .edge(0, 1, Some(1.0))
        .edge(0, 2, Some(5.0))
        .edge(1, 3, Some(1.0))
        .edge(2, 3, Some(1.0))
        .build();

    let dijkstra = algos::dijkstra(&graph, "n0", None);
    let n3_updates = dijkstra
        .iter()
        .filter(|s| s.kind == StepKind::VisitNode && s.node_id.as_deref() == Some("n3"))
        .count();
    assert_eq!(n3_updates, 1);

    let a_star = algos::a_star(&graph, "n0", "n3");
    assert_eq!(
        a_star
            .iter()
            .filter(|s| s.description.starts_with("Update node n3"))
            .count(),
        1
    );
}

#[test]
fn test_bellman_ford_negative_cycle() {
    let graph = GraphBuilder::directed()
        .with_nodes(2)
        .edge(0, 1, Some(-1.0))
        .edge(1, 0, Some(-1.0))
        .build();

    let trace = algos::bellman_ford(&graph, "n0");
    let detections = trace
        .iter()
        .filter(|s| s.description == NEGATIVE_CYCLE_DESCRIPTION)
        .count();
    assert_eq!(detections, 1);
    assert_eq!(
        trace.steps().last().map(|s| s.description.as_str()),
        Some(NEGATIVE_CYCLE_DESCRIPTION)
    );
}

#[test]
fn test_floyd_warshall_diagonal_zero() {
    for graph in sample_graphs() {
        let matrix = algos::floyd_warshall_run(&graph).matrix;
        for id in matrix.ids() {
            assert_eq!(matrix.get(id, id), Some(0.0));
        }
    }
}

#[test]
fn test_floyd_warshall_symmetry_follows_edges() {
    let symmetric = Graph::from_adjacency_matrix(
        &[
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 4.0],
            vec![0.0, 4.0, 0.0],
        ],
        true,
        &LayoutConfig::default(),
    )
    .unwrap();
    assert!(algos::floyd_warshall_run(&symmetric).matrix.is_symmetric());

    let one_way = GraphBuilder::directed()
        .with_nodes(2)
        .edge(0, 1, Some(3.0))
        .build();
    assert!(!algos::floyd_warshall_run(&one_way).matrix.is_symmetric());
}

#[test]
fn test_dispatcher_contract() {
    let graph = four_cycle();

    assert!(run(&graph, "kruskal", "n0", None).unwrap().is_empty());
    assert!(matches!(
        run(&graph, "a-star", "n0", None),
        Err(TraceError::MissingEndNode { .. })
    ));
    assert_eq!(
        run(&graph, "bfs", "n0", Some("n2")).unwrap(),
        algos::bfs(&graph, "n0", Some("n2"))
    );
}

#[test]
fn test_dangling_edges_are_skipped() {
    let nodes = four_cycle().nodes().to_vec();
    let json = serde_json::json!({
        "nodes": nodes,
        "edges": [
            {"id": "e0-9", "source": "n0", "target": "n9"},
            {"id": "e0-1", "source": "n0", "target": "n1"}
        ]
    });
    let graph: Graph = serde_json::from_value(json).unwrap();
    assert!(graph.validate().is_err());

    let trace = algos::bfs(&graph, "n0", None);
    assert_eq!(trace.node_ids(StepKind::VisitNode), vec!["n0", "n1"]);
    assert!(!trace.edge_ids().contains(&"e0-9"));
}
