use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentational status of a node. Owned by the host, never by an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Default,
    Active,
    Visited,
    Start,
    End,
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeStatus::Default => "default",
            NodeStatus::Active => "active",
            NodeStatus::Visited => "visited",
            NodeStatus::Start => "start",
            NodeStatus::End => "end",
        };
        f.write_str(s)
    }
}

/// Presentational status of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    #[default]
    Default,
    Active,
    Visited,
}

impl fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EdgeStatus::Default => "default",
            EdgeStatus::Active => "active",
            EdgeStatus::Visited => "visited",
        };
        f.write_str(s)
    }
}

/// A graph vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub status: NodeStatus,
    /// Estimated remaining cost to a goal, read only by A*
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<f64>,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node {
            id: id.into(),
            x,
            y,
            label: None,
            status: NodeStatus::Default,
            heuristic: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_heuristic(mut self, heuristic: f64) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Heuristic value, 0 when unset
    pub fn heuristic_or_zero(&self) -> f64 {
        self.heuristic.unwrap_or(0.0)
    }
}

/// A connection between two nodes, referenced by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub status: EdgeStatus,
}

impl Edge {
    pub const UNIT_WEIGHT: f64 = 1.0;

    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: Option<f64>,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            weight,
            status: EdgeStatus::Default,
        }
    }

    /// Traversal cost; a missing weight counts as 1
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(Self::UNIT_WEIGHT)
    }

    /// The endpoint opposite `node_id`, or `None` if the edge does not touch it
    pub fn other_end(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// True when the unordered endpoint pair equals `{a, b}`
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
