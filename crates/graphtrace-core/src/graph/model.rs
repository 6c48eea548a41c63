use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::{Edge, EdgeStatus, Node, NodeStatus};
use crate::error::{Result, TraceError};

/// An ordered collection of nodes and edges.
///
/// Node insertion order is the canonical iteration order for every
/// algorithm. Edges are matched in both directions by adjacency lookups;
/// `directed` records how the graph was built and only matters to the
/// algorithms that read edges as stored (Bellman-Ford, Floyd-Warshall).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(default)]
    directed: bool,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, directed: bool) -> Self {
        Graph {
            nodes,
            edges,
            directed,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Position of a node in canonical order
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Edges touching `node_id` paired with the opposite endpoint, in edge
    /// insertion order. A self-loop yields the node itself.
    pub fn incident_edges<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = (&'a Edge, &'a str)> + 'a {
        self.edges
            .iter()
            .filter_map(move |edge| edge.other_end(node_id).map(|other| (edge, other)))
    }

    /// Ids of nodes connected to `node_id` by any edge in either direction.
    ///
    /// Order follows edge insertion order. Parallel edges repeat the
    /// neighbor; traversal over multigraphs is not otherwise defined.
    pub fn adjacent_node_ids<'a>(&'a self, node_id: &'a str) -> Vec<&'a str> {
        self.incident_edges(node_id).map(|(_, other)| other).collect()
    }

    /// First edge, in insertion order, whose unordered endpoints are `{a, b}`
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// First edge stored exactly as `source -> target`
    pub fn directed_edge(&self, source: &str, target: &str) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// Check that node ids are unique and every edge references existing
    /// nodes. Algorithms tolerate violations; hosts call this on input.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(TraceError::InvalidGraph {
                    reason: format!("duplicate node id '{}'", node.id),
                });
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(TraceError::InvalidGraph {
                        reason: format!(
                            "edge '{}' references unknown node '{}'",
                            edge.id, endpoint
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Copy of the graph with every node and edge status reset to default
    pub fn with_reset_status(&self) -> Graph {
        let mut graph = self.clone();
        for node in &mut graph.nodes {
            node.status = NodeStatus::Default;
        }
        for edge in &mut graph.edges {
            edge.status = EdgeStatus::Default;
        }
        graph
    }

    pub(crate) fn set_node_status(&mut self, id: &str, status: NodeStatus) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.status = status;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_edge_status(&mut self, id: &str, status: EdgeStatus) -> bool {
        match self.edges.iter_mut().find(|e| e.id == id) {
            Some(edge) => {
                edge.status = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            vec![
                Node::new("n0", 0.0, 0.0),
                Node::new("n1", 1.0, 0.0),
                Node::new("n2", 0.0, 1.0),
            ],
            vec![
                Edge::new("e0-1", "n0", "n1", Some(2.0)),
                Edge::new("e1-2", "n1", "n2", None),
                Edge::new("e0-2", "n2", "n0", Some(5.0)),
            ],
            false,
        )
    }

    #[test]
    fn test_adjacent_node_ids_both_directions() {
        let graph = triangle();
        assert_eq!(graph.adjacent_node_ids("n0"), vec!["n1", "n2"]);
        assert_eq!(graph.adjacent_node_ids("n2"), vec!["n1", "n0"]);
    }

    #[test]
    fn test_adjacent_node_ids_unknown_node() {
        let graph = triangle();
        assert!(graph.adjacent_node_ids("n9").is_empty());
    }

    #[test]
    fn test_parallel_edges_repeat_neighbor() {
        let graph = Graph::new(
            vec![Node::new("n0", 0.0, 0.0), Node::new("n1", 1.0, 0.0)],
            vec![
                Edge::new("a", "n0", "n1", Some(3.0)),
                Edge::new("b", "n1", "n0", Some(1.0)),
            ],
            false,
        );
        assert_eq!(graph.adjacent_node_ids("n0"), vec!["n1", "n1"]);
        assert_eq!(graph.edge_between("n0", "n1").unwrap().id, "a");
    }

    #[test]
    fn test_edge_between_is_unordered() {
        let graph = triangle();
        assert_eq!(graph.edge_between("n0", "n2").unwrap().id, "e0-2");
        assert_eq!(graph.edge_between("n2", "n0").unwrap().id, "e0-2");
        assert!(graph.edge_between("n0", "n9").is_none());
    }

    #[test]
    fn test_directed_edge_respects_storage_direction() {
        let graph = triangle();
        assert!(graph.directed_edge("n2", "n0").is_some());
        assert!(graph.directed_edge("n0", "n2").is_none());
    }

    #[test]
    fn test_find_node_and_edge() {
        let graph = triangle();
        assert_eq!(graph.find_node("n1").unwrap().x, 1.0);
        assert!(graph.find_node("missing").is_none());
        assert_eq!(graph.find_edge("e1-2").unwrap().cost(), 1.0);
        assert!(graph.find_edge("e9-9").is_none());
        assert_eq!(graph.node_index("n2"), Some(2));
    }

    #[test]
    fn test_validate_rejects_dangling_edge() {
        let graph = Graph::new(
            vec![Node::new("n0", 0.0, 0.0)],
            vec![Edge::new("e0-1", "n0", "n1", None)],
            false,
        );
        let err = graph.validate().unwrap_err();
        assert!(err.to_string().contains("unknown node 'n1'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_node() {
        let graph = Graph::new(
            vec![Node::new("n0", 0.0, 0.0), Node::new("n0", 1.0, 1.0)],
            vec![],
            false,
        );
        assert!(graph.validate().is_err());
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn test_with_reset_status() {
        let mut graph = triangle();
        assert!(graph.set_node_status("n1", NodeStatus::Visited));
        assert!(graph.set_edge_status("e0-1", EdgeStatus::Active));
        assert!(!graph.set_node_status("n9", NodeStatus::Active));

        let reset = graph.with_reset_status();
        assert!(reset.nodes().iter().all(|n| n.status == NodeStatus::Default));
        assert!(reset.edges().iter().all(|e| e.status == EdgeStatus::Default));
    }

    #[test]
    fn test_json_roundtrip_defaults_undirected() {
        let json = r#"{
            "nodes": [{"id": "n0", "x": 1, "y": 2}, {"id": "n1"}],
            "edges": [{"id": "e0-1", "source": "n0", "target": "n1", "weight": 3}]
        }"#;
        let graph: Graph = serde_json::from_str(json).unwrap();
        assert!(!graph.is_directed());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges()[0].cost(), 3.0);
    }
}
