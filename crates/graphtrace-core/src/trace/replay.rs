use super::{StatusPolicy, Step, Trace};
use crate::graph::Graph;

/// Host-side cursor over an immutable trace.
///
/// The cursor counts applied steps: `0` means nothing has been applied and
/// `trace.len()` means the run is finished. Snapshots are rebuilt from the
/// start, so moving backward is as cheap to reason about as moving forward.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    graph: &'a Graph,
    trace: &'a Trace,
    policy: StatusPolicy,
    cursor: usize,
}

impl<'a> Replay<'a> {
    pub fn new(graph: &'a Graph, trace: &'a Trace, policy: StatusPolicy) -> Self {
        Replay {
            graph,
            trace,
            policy,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.trace.len()
    }

    /// The most recently applied step
    pub fn current_step(&self) -> Option<&'a Step> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.trace.get(index))
    }

    /// Apply the next step, returning it; `None` once finished
    pub fn step_forward(&mut self) -> Option<&'a Step> {
        let step = self.trace.get(self.cursor)?;
        self.cursor += 1;
        Some(step)
    }

    /// Un-apply the last step; returns false at the start
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move to `position` applied steps, clamped to the trace length
    pub fn seek(&mut self, position: usize) {
        self.cursor = position.min(self.trace.len());
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Graph statuses after applying steps `0..cursor` to a reset copy
    pub fn snapshot(&self) -> Graph {
        let mut graph = self.graph.with_reset_status();
        for step in &self.trace.steps()[..self.cursor] {
            self.policy.apply(&mut graph, step);
        }
        graph
    }
}
