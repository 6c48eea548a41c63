use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Step, StepKind};
use crate::dispatch::Algorithm;
use crate::graph::{EdgeStatus, Graph, NodeStatus};

/// Host mapping from step kinds to display statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// `visit-node` shows as active, `complete-node` as visited
    #[default]
    Transient,
    /// Every node step shows as visited straight away
    Settled,
}

impl StatusPolicy {
    /// Default policy for an algorithm's trace.
    ///
    /// Bellman-Ford relaxes the same node many times across passes, so its
    /// nodes go straight to visited instead of flickering through active.
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BellmanFord => StatusPolicy::Settled,
            _ => StatusPolicy::Transient,
        }
    }

    /// Status a step's node takes, or `None` to leave it unchanged
    pub fn node_status(self, kind: StepKind) -> Option<NodeStatus> {
        match (self, kind) {
            (StatusPolicy::Settled, _) => Some(NodeStatus::Visited),
            (StatusPolicy::Transient, StepKind::VisitNode) => Some(NodeStatus::Active),
            (StatusPolicy::Transient, StepKind::CompleteNode) => Some(NodeStatus::Visited),
            (StatusPolicy::Transient, StepKind::ExploreEdge) => None,
        }
    }

    /// Status a step's edge takes
    pub fn edge_status(self, _kind: StepKind) -> EdgeStatus {
        EdgeStatus::Active
    }

    /// Apply one step to a graph's statuses. Unknown ids are ignored.
    pub fn apply(self, graph: &mut Graph, step: &Step) {
        if let (Some(node_id), Some(status)) = (&step.node_id, self.node_status(step.kind)) {
            if !graph.set_node_status(node_id, status) {
                tracing::trace!(node = %node_id, "replay skipped unknown node");
            }
        }
        if let Some(edge_id) = &step.edge_id {
            if !graph.set_edge_status(edge_id, self.edge_status(step.kind)) {
                tracing::trace!(edge = %edge_id, "replay skipped unknown edge");
            }
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Transient => write!(f, "transient"),
            StatusPolicy::Settled => write!(f, "settled"),
        }
    }
}
