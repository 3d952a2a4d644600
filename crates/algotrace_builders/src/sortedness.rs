//! Sortedness check.
//!
//! Scans adjacent pairs left to right and stops at the first inversion.

use std::fmt;

use algotrace_foundation::{CodeMarker, Error, Result, StepKind, Trace, TraceRecorder, TraceVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used in errors and log events.
pub const ALGORITHM: &str = "sortedness";

/// Smallest input the builder accepts.
pub const MIN_LEN: usize = 2;

const AT_START: &[CodeMarker] = &[CodeMarker::line(1)];
const AT_COMPARE: &[CodeMarker] = &[CodeMarker::line(3)];
const AT_INVERSION: &[CodeMarker] = &[CodeMarker::line(4)];
const AT_SORTED: &[CodeMarker] = &[CodeMarker::line(7)];

/// Snapshot of the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortedState {
    /// The array being checked.
    pub array: TraceVec<i64>,
    /// Left index of the pair under examination.
    pub current: usize,
    /// Right index of the pair under examination.
    pub next: usize,
    /// Number of leading elements known to be in order.
    pub validated: usize,
}

impl fmt::Display for SortedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} i={} j={} ok={}",
            self.array.to_vec(),
            self.current,
            self.next,
            self.validated
        )
    }
}

/// A sortedness trace; the result is `true` when the array is sorted.
pub type SortedTrace = Trace<SortedState, bool>;

/// Builds the trace of checking `values` for ascending order.
///
/// # Errors
///
/// Returns an `InputTooShort` precondition error for fewer than
/// [`MIN_LEN`] values.
pub fn build(values: &[i64]) -> Result<SortedTrace> {
    if values.len() < MIN_LEN {
        return Err(Error::input_too_short(ALGORITHM, MIN_LEN, values.len()));
    }

    let array = TraceVec::from(values);
    let state = |current: usize, validated: usize| SortedState {
        array: array.clone(),
        current,
        next: current + 1,
        validated,
    };

    let mut rec = TraceRecorder::with_capacity(ALGORITHM, values.len() + 1);
    rec.record(
        StepKind::Init,
        AT_START,
        format!("Check whether {values:?} is sorted in ascending order"),
        state(0, 0),
    );

    for (i, pair) in values.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        rec.record(
            StepKind::Compare,
            AT_COMPARE,
            format!("Compare arr[{i}] = {a} with arr[{}] = {b}", i + 1),
            state(i, i + 1),
        );
        if a > b {
            let trace = rec.finish_with(
                false,
                StepKind::Complete,
                AT_INVERSION,
                format!("arr[{i}] = {a} > arr[{}] = {b}, so the array is not sorted", i + 1),
                state(i, i + 1),
            );
            log_built(&trace);
            return Ok(trace);
        }
    }

    let last = values.len() - 2;
    let trace = rec.finish_with(
        true,
        StepKind::Complete,
        AT_SORTED,
        "Every adjacent pair is in order, so the array is sorted",
        state(last, values.len()),
    );
    log_built(&trace);
    Ok(trace)
}

fn log_built(trace: &SortedTrace) {
    tracing::debug!(
        algorithm = ALGORITHM,
        len = trace.first().state().array.len(),
        steps = trace.len(),
        result = ?trace.result(),
        "built trace"
    );
}
