//! Immutable traces.
//!
//! A [`Trace`] is the ordered, non-empty sequence of steps produced for one
//! input. The invariants are checked once, at construction: the last step is
//! terminal and no other step is. Nothing mutates a trace afterwards; a new
//! input produces a new trace.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result, TraceDefect};
use crate::step::{Step, StepKind};

/// The full ordered sequence of steps produced for one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<S, R> {
    steps: Vec<Step<S, R>>,
}

impl<S, R> Trace<S, R> {
    /// Builds a trace from steps that are known to satisfy the invariants.
    pub(crate) fn from_recorded(steps: Vec<Step<S, R>>) -> Self {
        debug_assert!(Self::check(&steps).is_ok());
        Self { steps }
    }

    /// Builds a trace from arbitrary steps, checking the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedTrace`](crate::ErrorKind::MalformedTrace)
    /// if the steps are empty, the last step is not terminal, or an earlier
    /// step is terminal.
    pub fn from_steps(steps: Vec<Step<S, R>>) -> Result<Self> {
        Self::check(&steps)?;
        Ok(Self { steps })
    }

    fn check(steps: &[Step<S, R>]) -> Result<()> {
        let Some((last, rest)) = steps.split_last() else {
            return Err(Error::malformed(TraceDefect::Empty));
        };
        if let Some(index) = rest.iter().position(Step::is_terminal) {
            return Err(Error::malformed(TraceDefect::EarlyTerminal { index }));
        }
        if !last.is_terminal() {
            return Err(Error::malformed(TraceDefect::MissingTerminal));
        }
        Ok(())
    }

    /// Re-checks the trace invariants.
    ///
    /// # Errors
    ///
    /// Returns the first defect found.
    pub fn validate(&self) -> Result<()> {
        Self::check(&self.steps)
    }

    /// Returns the number of steps. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; traces are never empty. Provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the index of the terminal step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Gets a step by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step<S, R>> {
        self.steps.get(index)
    }

    /// Returns the initial step.
    #[must_use]
    pub fn first(&self) -> &Step<S, R> {
        &self.steps[0]
    }

    /// Returns the terminal step.
    #[must_use]
    pub fn terminal(&self) -> &Step<S, R> {
        &self.steps[self.last_index()]
    }

    /// Returns the algorithm's final result, if it produces one.
    #[must_use]
    pub fn result(&self) -> Option<&R> {
        self.terminal().result()
    }

    /// Returns all steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step<S, R>] {
        &self.steps
    }

    /// Iterates the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step<S, R>> {
        self.steps.iter()
    }

    /// Counts steps per kind.
    #[must_use]
    pub fn kind_counts(&self) -> BTreeMap<StepKind, usize> {
        let mut counts = BTreeMap::new();
        for step in &self.steps {
            *counts.entry(step.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the indices of steps of the given kind.
    #[must_use]
    pub fn positions_of(&self, kind: StepKind) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind() == kind)
            .map(|(i, _)| i)
            .collect()
    }
}

impl<'a, S, R> IntoIterator for &'a Trace<S, R> {
    type Item = &'a Step<S, R>;
    type IntoIter = std::slice::Iter<'a, Step<S, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(feature = "serde")]
impl<S: Serialize, R: Serialize> Serialize for Trace<S, R> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.steps.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: Deserialize<'de>, R: Deserialize<'de>> Deserialize<'de> for Trace<S, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let steps = Vec::<Step<S, R>>::deserialize(deserializer)?;
        Self::from_steps(steps).map_err(serde::de::Error::custom)
    }
}
