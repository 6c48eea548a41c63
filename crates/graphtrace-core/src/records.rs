//! Utilities for records output format
//!
//! Records are line-oriented: an `H` header line followed by one `S` line per
//! step, each field as `key=value` with quoted free text.

use crate::graph::{Edge, Graph, Node};
use crate::trace::{Step, Trace};

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line for a trace
pub fn format_trace_header(algorithm: &str, trace: &Trace) -> String {
    format!(
        "H graphtrace=1 records=1 mode=trace algorithm={} steps={}",
        algorithm,
        trace.len()
    )
}

/// Format a single step as an `S` line
pub fn format_step(index: usize, step: &Step) -> String {
    let mut line = format!("S {} {}", index, step.kind);
    if let Some(node_id) = &step.node_id {
        line.push_str(&format!(" node={}", node_id));
    }
    if let Some(edge_id) = &step.edge_id {
        line.push_str(&format!(" edge={}", edge_id));
    }
    line.push_str(&format!(" \"{}\"", escape_quotes(&step.description)));
    line
}

/// Format the header line for a replay snapshot taken after `at` steps
pub fn format_replay_header(algorithm: &str, at: usize, trace: &Trace) -> String {
    format!(
        "H graphtrace=1 records=1 mode=replay algorithm={} at={} steps={}",
        algorithm,
        at,
        trace.len()
    )
}

/// Format the header line for a generated graph, followed by `N` and `E` lines
pub fn format_graph_header(graph: &Graph) -> String {
    format!(
        "H graphtrace=1 records=1 mode=graph directed={} nodes={} edges={}",
        graph.is_directed(),
        graph.node_count(),
        graph.edges().len()
    )
}

/// Format a node status as an `N` line
pub fn format_node(node: &Node) -> String {
    format!("N {} status={}", node.id, node.status)
}

/// Format an edge status as an `E` line
pub fn format_edge(edge: &Edge) -> String {
    format!(
        "E {} {}->{} status={}",
        edge.id, edge.source, edge.target, edge.status
    )
}
