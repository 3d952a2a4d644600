//! Trace recorder.
//!
//! Builders simulate their algorithm once and hand every meaningful
//! transition to a [`TraceRecorder`]. The recorder stamps each step with the
//! currently decided result and guarantees that only the step passed to
//! [`TraceRecorder::finish`] is terminal.

use crate::step::{CodeMarker, Step, StepKind};
use crate::trace::Trace;

/// Accumulates steps for one trace.
#[derive(Debug)]
pub struct TraceRecorder<S, R> {
    algorithm: &'static str,
    steps: Vec<Step<S, R>>,
    decided: Option<R>,
}

impl<S, R: Clone> TraceRecorder<S, R> {
    /// Creates an empty recorder for the named algorithm.
    #[must_use]
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
            decided: None,
        }
    }

    /// Creates an empty recorder with room for `capacity` steps.
    #[must_use]
    pub fn with_capacity(algorithm: &'static str, capacity: usize) -> Self {
        Self {
            algorithm,
            steps: Vec::with_capacity(capacity),
            decided: None,
        }
    }

    /// Returns the algorithm name this recorder was created for.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Returns the number of steps recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the result decided so far.
    #[must_use]
    pub fn decided(&self) -> Option<&R> {
        self.decided.as_ref()
    }

    /// Fixes the result; every later step carries it.
    pub fn decide(&mut self, result: R) {
        self.decided = Some(result);
    }

    /// Appends a non-terminal step.
    pub fn record(
        &mut self,
        kind: StepKind,
        markers: &[CodeMarker],
        description: impl Into<String>,
        state: S,
    ) {
        let step = Step::new(
            kind,
            description.into(),
            state,
            markers.to_vec(),
            self.decided.clone(),
            false,
        );
        tracing::trace!(
            algorithm = self.algorithm,
            index = self.steps.len(),
            kind = %kind,
            "recorded step"
        );
        self.steps.push(step);
    }

    /// Appends the terminal step and returns the finished trace.
    #[must_use]
    pub fn finish(
        mut self,
        kind: StepKind,
        markers: &[CodeMarker],
        description: impl Into<String>,
        state: S,
    ) -> Trace<S, R> {
        let step = Step::new(
            kind,
            description.into(),
            state,
            markers.to_vec(),
            self.decided.take(),
            true,
        );
        self.steps.push(step);
        Trace::from_recorded(self.steps)
    }

    /// Decides `result` and appends the terminal step.
    #[must_use]
    pub fn finish_with(
        mut self,
        result: R,
        kind: StepKind,
        markers: &[CodeMarker],
        description: impl Into<String>,
        state: S,
    ) -> Trace<S, R> {
        self.decide(result);
        self.finish(kind, markers, description, state)
    }
}
