//! Trace step model and host-side consumers
//!
//! A [`Trace`] is the complete, ordered list of [`Step`]s one algorithm run
//! produced. It is built once and never modified; hosts read it at any index
//! and in any order.

pub mod policy;
pub(crate) mod recorder;
pub mod replay;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use policy::StatusPolicy;
pub use replay::Replay;

/// Kind of event a step describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    VisitNode,
    ExploreEdge,
    CompleteNode,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::VisitNode => "visit-node",
            StepKind::ExploreEdge => "explore-edge",
            StepKind::CompleteNode => "complete-node",
        };
        f.write_str(s)
    }
}

/// One discrete event in an algorithm's execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<String>,
    pub description: String,
}

impl Step {
    pub fn visit(node_id: impl Into<String>, description: impl Into<String>) -> Self {
        Step {
            kind: StepKind::VisitNode,
            node_id: Some(node_id.into()),
            edge_id: None,
            description: description.into(),
        }
    }

    pub fn complete(node_id: impl Into<String>, description: impl Into<String>) -> Self {
        Step {
            kind: StepKind::CompleteNode,
            node_id: Some(node_id.into()),
            edge_id: None,
            description: description.into(),
        }
    }

    /// An edge examination; `edge_id` is `None` when no concrete edge backs it
    pub fn explore(edge_id: Option<String>, description: impl Into<String>) -> Self {
        Step {
            kind: StepKind::ExploreEdge,
            node_id: None,
            edge_id,
            description: description.into(),
        }
    }
}

/// The full ordered sequence of steps from one algorithm invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Trace { steps }
    }

    /// An empty trace, returned for unknown algorithms
    pub fn empty() -> Self {
        Trace::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Node ids of steps of the given kind, in trace order
    pub fn node_ids(&self, kind: StepKind) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.kind == kind)
            .filter_map(|s| s.node_id.as_deref())
            .collect()
    }

    /// Edge ids of explore-edge steps, in trace order
    pub fn edge_ids(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::ExploreEdge)
            .filter_map(|s| s.edge_id.as_deref())
            .collect()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
