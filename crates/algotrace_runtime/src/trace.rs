//! Traces of any algorithm behind one type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use algotrace_builders::{
    Algorithm, BracketTrace, PalindromeTrace, ReverseTrace, SortedTrace, SpiralTrace, brackets,
    palindrome, reverse, sortedness, spiral,
};
use algotrace_foundation::{Error, Result, StepKind, TraceVec};

use crate::format::TraceFormatter;
use crate::input::Input;

/// A built trace tagged with its algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnyTrace {
    /// Sortedness trace.
    Sortedness(SortedTrace),
    /// Palindrome trace.
    Palindrome(PalindromeTrace),
    /// Reversal trace.
    Reverse(ReverseTrace),
    /// Spiral trace.
    Spiral(SpiralTrace),
    /// Bracket trace.
    Brackets(BracketTrace),
}

/// Applies `$body` to the inner trace whatever its type.
macro_rules! with_trace {
    ($self:expr, $t:ident => $body:expr) => {
        match $self {
            AnyTrace::Sortedness($t) => $body,
            AnyTrace::Palindrome($t) => $body,
            AnyTrace::Reverse($t) => $body,
            AnyTrace::Spiral($t) => $body,
            AnyTrace::Brackets($t) => $body,
        }
    };
}

impl AnyTrace {
    /// Builds the trace for `algorithm` over parsed `input`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `input` has the wrong shape for the
    /// algorithm, or the builder's precondition error.
    pub fn build(algorithm: Algorithm, input: &Input) -> Result<Self> {
        let trace = match (algorithm, input) {
            (Algorithm::Sortedness, Input::Numbers(values)) => {
                Self::Sortedness(sortedness::build(values)?)
            }
            (Algorithm::Reverse, Input::Numbers(values)) => Self::Reverse(reverse::build(values)?),
            (Algorithm::Palindrome, Input::Text(text)) => {
                Self::Palindrome(palindrome::build(text)?)
            }
            (Algorithm::Brackets, Input::Text(text)) => Self::Brackets(brackets::build(text)?),
            (Algorithm::Spiral, Input::Grid(grid)) => Self::Spiral(spiral::build(grid)?),
            (algorithm, _) => {
                return Err(Error::invalid_input(format!(
                    "{algorithm} cannot run on this kind of input"
                )));
            }
        };
        tracing::info!(%algorithm, steps = trace.len(), "trace ready");
        Ok(trace)
    }

    /// Returns the algorithm that produced this trace.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Sortedness(_) => Algorithm::Sortedness,
            Self::Palindrome(_) => Algorithm::Palindrome,
            Self::Reverse(_) => Algorithm::Reverse,
            Self::Spiral(_) => Algorithm::Spiral,
            Self::Brackets(_) => Algorithm::Brackets,
        }
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        with_trace!(self, t => t.len())
    }

    /// Always false; traces are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        with_trace!(self, t => t.is_empty())
    }

    /// Returns the index of the terminal step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        with_trace!(self, t => t.last_index())
    }

    /// Counts steps per kind.
    #[must_use]
    pub fn kind_counts(&self) -> BTreeMap<StepKind, usize> {
        with_trace!(self, t => t.kind_counts())
    }

    /// Re-checks the trace invariants.
    ///
    /// # Errors
    ///
    /// Returns the first defect found.
    pub fn validate(&self) -> Result<()> {
        with_trace!(self, t => t.validate())
    }

    /// Describes the final result.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Sortedness(t) => verdict(t.result(), "sorted", "not sorted"),
            Self::Palindrome(t) => verdict(t.result(), "a palindrome", "not a palindrome"),
            Self::Brackets(t) => verdict(t.result(), "balanced", "not balanced"),
            Self::Reverse(t) => format!("reversed: {:?}", values(t.result())),
            Self::Spiral(t) => format!("spiral order: {:?}", values(t.result())),
        }
    }

    /// Formats the step at `index` after clamping it to the trace.
    #[must_use]
    pub fn format_step<F: TraceFormatter>(&self, formatter: &F, index: usize) -> String {
        let listings = self.algorithm().listings();
        with_trace!(self, t => {
            let index = index.min(t.last_index());
            match t.get(index) {
                Some(step) => formatter.format_step(index, step, listings),
                None => String::new(),
            }
        })
    }

    /// Formats every step.
    #[must_use]
    pub fn format_all<F: TraceFormatter>(&self, formatter: &F) -> String {
        let listings = self.algorithm().listings();
        with_trace!(self, t => formatter.format_trace(t, listings))
    }
}

fn values(result: Option<&TraceVec<i64>>) -> Vec<i64> {
    result.map(TraceVec::to_vec).unwrap_or_default()
}

fn verdict(result: Option<&bool>, yes: &str, no: &str) -> String {
    match result {
        Some(true) => yes.to_string(),
        Some(false) => no.to_string(),
        None => "undecided".to_string(),
    }
}
