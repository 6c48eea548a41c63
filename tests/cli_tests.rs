//! Integration tests for the graphtrace CLI
//!
//! These tests run the graphtrace binary against graph files written to a
//! temporary directory.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Get a Command for graphtrace
fn graphtrace() -> Command {
    cargo_bin_cmd!("graphtrace")
}

const FOUR_CYCLE: &str = r#"{
  "nodes": [
    {"id": "n0", "x": 0, "y": 0},
    {"id": "n1", "x": 1, "y": 0},
    {"id": "n2", "x": 1, "y": 1},
    {"id": "n3", "x": 0, "y": 1}
  ],
  "edges": [
    {"id": "e0-1", "source": "n0", "target": "n1"},
    {"id": "e1-2", "source": "n1", "target": "n2"},
    {"id": "e2-3", "source": "n2", "target": "n3"},
    {"id": "e0-3", "source": "n3", "target": "n0"}
  ]
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Help and discovery
// ============================================================================

#[test]
fn test_help_flag() {
    graphtrace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphtrace"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();
    graphtrace()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graphtrace "));
}

#[test]
fn test_algorithms_lists_identifiers() {
    graphtrace()
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("a-star"))
        .stdout(predicate::str::contains("floyd-warshall"));
}

#[test]
fn test_format_flag_parses_through_core() {
    graphtrace()
        .args(["--format", "records", "algorithms"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphtrace=1 records=1 mode=algorithms count=6",
        ));

    graphtrace()
        .args(["--format", "yaml", "algorithms"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_algorithms_json() {
    let output = graphtrace()
        .args(["--format", "json", "algorithms"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[3]["id"], "a-star");
    assert_eq!(list[3]["requiresEnd"], true);
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_bfs_human() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);

    graphtrace()
        .current_dir(dir.path())
        .args(["run", "bfs", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs from n0"))
        .stdout(predicate::str::contains("Start BFS from node n0"))
        .stdout(predicate::str::contains("Completed processing node n2"));
}

#[test]
fn test_run_json_steps() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);

    let output = graphtrace()
        .current_dir(dir.path())
        .args(["--format", "json", "run", "bfs", "--start", "n0", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "bfs");
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["type"], "visit-node");
    assert_eq!(steps[0]["nodeId"], "n0");
    assert_eq!(steps[1]["type"], "explore-edge");
    assert_eq!(steps[1]["edgeId"], "e0-1");
}

#[test]
fn test_run_records() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);

    graphtrace()
        .current_dir(dir.path())
        .args(["--format", "records", "run", "dfs", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphtrace=1 records=1 mode=trace algorithm=dfs",
        ))
        .stdout(predicate::str::contains(
            "S 0 visit-node node=n0 \"Visit node n0 (DFS)\"",
        ));
}

#[test]
fn test_run_dijkstra_from_matrix() {
    let dir = tempdir().unwrap();
    let matrix = write_file(&dir, "path.txt", "0 2 0\n0 0 3\n0 0 0\n");

    let output = graphtrace()
        .current_dir(dir.path())
        .args(["--format", "json", "run", "dijkstra", "--directed", "--matrix"])
        .arg(&matrix)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["summary"]["distances"]["entries"].as_array().unwrap();
    assert_eq!(entries[2][0], "n2");
    assert_eq!(entries[2][1], 5.0);
}

#[test]
fn test_run_a_star_requires_end() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);

    graphtrace()
        .current_dir(dir.path())
        .args(["run", "a-star", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a-star requires an end node"));
}

#[test]
fn test_run_unknown_start_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);

    graphtrace()
        .current_dir(dir.path())
        .args(["--format", "json", "run", "bfs", "--start", "n9", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"node_not_found\""));
}

#[test]
fn test_run_dangling_graph_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        &dir,
        "broken.json",
        r#"{"nodes": [{"id": "n0"}], "edges": [{"id": "e0-1", "source": "n0", "target": "n1"}]}"#,
    );

    graphtrace()
        .current_dir(dir.path())
        .args(["run", "bfs", "--graph"])
        .arg(&graph)
        .assert()
        .code(3);
}

#[test]
fn test_run_unknown_algorithm_is_usage_error() {
    graphtrace()
        .args(["run", "prim", "--graph", "missing.json"])
        .assert()
        .code(2);
}

#[test]
fn test_run_requires_graph_input() {
    graphtrace().args(["run", "bfs"]).assert().code(2);
}

#[test]
fn test_run_bellman_ford_negative_cycle() {
    let dir = tempdir().unwrap();
    let matrix = write_file(&dir, "cycle.txt", "0 -1\n-1 0\n");

    graphtrace()
        .current_dir(dir.path())
        .args(["run", "bellman-ford", "--directed", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("negative weight cycle detected"));
}

// ============================================================================
// replay
// ============================================================================

#[test]
fn test_replay_partial_statuses() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);

    // visit n0, explore e0-1, visit n1
    graphtrace()
        .current_dir(dir.path())
        .args(["--format", "records", "replay", "bfs", "--at", "3", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=replay algorithm=bfs at=3"))
        .stdout(predicate::str::contains("N n0 status=active"))
        .stdout(predicate::str::contains("N n1 status=active"))
        .stdout(predicate::str::contains("N n2 status=default"))
        .stdout(predicate::str::contains("E e0-1 n0->n1 status=active"));
}

#[test]
fn test_replay_bellman_ford_settles_nodes() {
    let dir = tempdir().unwrap();
    let matrix = write_file(&dir, "path.txt", "0 2 0\n0 0 3\n0 0 0\n");

    graphtrace()
        .current_dir(dir.path())
        .args(["--format", "records", "replay", "bellman-ford", "--directed", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("N n1 status=visited"))
        .stdout(predicate::str::contains("N n2 status=visited"));
}

// ============================================================================
// generate and config
// ============================================================================

#[test]
fn test_generate_is_reproducible() {
    let run = || {
        graphtrace()
            .args(["--format", "json", "generate", "--nodes", "6", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());

    let json: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(json["nodes"][0]["id"], "n0");
}

#[test]
fn test_generate_matrix_feeds_run() {
    let dir = tempdir().unwrap();
    let output = graphtrace()
        .args(["generate", "--nodes", "5", "--seed", "7", "--probability", "1", "--matrix"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let matrix = write_file(&dir, "generated.txt", &String::from_utf8_lossy(&output.stdout));

    graphtrace()
        .current_dir(dir.path())
        .args(["--format", "records", "run", "floyd-warshall", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm=floyd-warshall"));
}

#[test]
fn test_generate_rejects_bad_probability() {
    graphtrace()
        .args(["generate", "--nodes", "3", "--probability", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_config_default_algorithm() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "cycle.json", FOUR_CYCLE);
    write_file(&dir, "graphtrace.toml", "[run]\nalgorithm = \"dfs\"\n");

    graphtrace()
        .current_dir(dir.path())
        .args(["run", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("dfs from n0"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let config = write_file(&dir, "bad.toml", "[random]\nedge_probability = 3.0\n");

    graphtrace()
        .args(["algorithms", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("random.edge_probability"));
}
