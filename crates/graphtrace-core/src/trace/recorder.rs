use super::{Step, Trace};

/// Accumulates steps while an algorithm runs
pub(crate) struct TraceRecorder {
    algorithm: &'static str,
    steps: Vec<Step>,
}

impl TraceRecorder {
    pub(crate) fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
        }
    }

    pub(crate) fn visit(&mut self, node_id: &str, description: String) {
        self.push(Step::visit(node_id, description));
    }

    pub(crate) fn explore(&mut self, edge_id: Option<&str>, description: String) {
        self.push(Step::explore(edge_id.map(str::to_string), description));
    }

    pub(crate) fn complete(&mut self, node_id: &str, description: String) {
        self.push(Step::complete(node_id, description));
    }

    fn push(&mut self, step: Step) {
        tracing::trace!(
            algorithm = self.algorithm,
            index = self.steps.len(),
            kind = %step.kind,
            node = ?step.node_id,
            edge = ?step.edge_id,
            "step"
        );
        self.steps.push(step);
    }

    pub(crate) fn finish(self) -> Trace {
        tracing::debug!(
            algorithm = self.algorithm,
            steps = self.steps.len(),
            "trace complete"
        );
        Trace::from_steps(self.steps)
    }
}
