//! Array reversal by recursion.
//!
//! Simulates `reverse(arr, start, last)`: swap the two ends, recurse inward,
//! stop once the pointers meet. Like the palindrome builder it descends in a
//! loop over an explicit frame list and then unwinds it.

use std::fmt;

use algotrace_foundation::{
    CallStack, CodeMarker, Error, Frame, Result, StepKind, Trace, TraceRecorder, TraceVec,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used in errors and log events.
pub const ALGORITHM: &str = "reverse";

/// Smallest input the builder accepts.
pub const MIN_LEN: usize = 1;

const FUNCTION: &str = "reverse";

const AT_MAIN_INPUT: CodeMarker = CodeMarker::new(1, 2);
const AT_MAIN_CALL: CodeMarker = CodeMarker::new(1, 3);
const AT_MAIN_PRINT: CodeMarker = CodeMarker::new(1, 4);
const AT_ENTRY: CodeMarker = CodeMarker::line(1);
const AT_BASE_CHECK: CodeMarker = CodeMarker::line(2);
const AT_BASE_RETURN: CodeMarker = CodeMarker::line(3);
const AT_SWAP: CodeMarker = CodeMarker::line(5);
const AT_RECURSE: CodeMarker = CodeMarker::line(6);
const AT_EXIT: CodeMarker = CodeMarker::line(7);

/// Snapshot of the simulated recursion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReverseState {
    /// The working array after every mutation so far.
    pub array: TraceVec<i64>,
    /// Left pointer of the active frame.
    pub start: usize,
    /// Right pointer of the active frame.
    pub last: usize,
    /// Active invocations, outermost first.
    pub stack: CallStack,
}

impl fmt::Display for ReverseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} start={} last={} stack=[{}]",
            self.array.to_vec(),
            self.start,
            self.last,
            self.stack
        )
    }
}

/// A reversal trace; the result is the reversed array.
pub type ReverseTrace = Trace<ReverseState, TraceVec<i64>>;

fn frame(start: usize, last: usize) -> Frame {
    Frame::new(FUNCTION)
        .with_index("start", start)
        .with_index("last", last)
}

/// Builds the trace of reversing a copy of `values` in place.
///
/// # Errors
///
/// Returns an `InputTooShort` precondition error for an empty slice.
pub fn build(values: &[i64]) -> Result<ReverseTrace> {
    if values.len() < MIN_LEN {
        return Err(Error::input_too_short(ALGORITHM, MIN_LEN, values.len()));
    }

    let snapshot = |array: &TraceVec<i64>, start: usize, last: usize, stack: &CallStack| {
        ReverseState {
            array: array.clone(),
            start,
            last,
            stack: stack.clone(),
        }
    };

    let mut rec = TraceRecorder::new(ALGORITHM);
    let mut array = TraceVec::from(values);
    let mut stack = CallStack::new();
    let (mut start, mut last) = (0, values.len() - 1);

    rec.record(
        StepKind::Init,
        &[AT_MAIN_INPUT],
        format!("Reverse {values:?} in place"),
        snapshot(&array, start, last, &stack),
    );

    let mut call_site = AT_MAIN_CALL;
    loop {
        stack = stack.push(frame(start, last));
        rec.record(
            StepKind::Call,
            &[call_site, AT_ENTRY],
            format!("Call {FUNCTION}(start = {start}, last = {last})"),
            snapshot(&array, start, last, &stack),
        );

        if start >= last {
            rec.record(
                StepKind::Check,
                &[AT_BASE_CHECK],
                format!("start = {start} >= last = {last}: nothing left to swap"),
                snapshot(&array, start, last, &stack),
            );
            stack = stack.without_top();
            rec.record(
                StepKind::Return,
                &[AT_BASE_RETURN],
                format!("Base case reached, {FUNCTION}({start}, {last}) returns"),
                snapshot(&array, start, last, &stack),
            );
            break;
        }

        rec.record(
            StepKind::Check,
            &[AT_BASE_CHECK],
            format!("start = {start} < last = {last}: swap the ends"),
            snapshot(&array, start, last, &stack),
        );

        let a = array.get(start).copied().unwrap_or_default();
        let b = array.get(last).copied().unwrap_or_default();
        rec.record(
            StepKind::Highlight,
            &[AT_SWAP],
            format!("Swap arr[{start}] = {a} with arr[{last}] = {b}"),
            snapshot(&array, start, last, &stack),
        );

        array = array.swap(start, last).unwrap_or(array);
        rec.record(
            StepKind::Swap,
            &[AT_SWAP],
            format!("arr[{start}] = {b}, arr[{last}] = {a}"),
            snapshot(&array, start, last, &stack),
        );

        start += 1;
        last -= 1;
        call_site = AT_RECURSE;
    }

    while let Some((popped, caller)) = stack.pop() {
        stack = popped;
        let (s, l) = frame_range(&caller);
        rec.record(
            StepKind::Return,
            &[AT_EXIT],
            format!("{FUNCTION}({s}, {l}) returns after its recursive call"),
            snapshot(&array, s, l, &stack),
        );
    }

    let trace = rec.finish_with(
        array.clone(),
        StepKind::Complete,
        &[AT_MAIN_PRINT],
        format!("The reversed array is {:?}", array.to_vec()),
        snapshot(&array, 0, values.len() - 1, &stack),
    );
    tracing::debug!(
        algorithm = ALGORITHM,
        len = values.len(),
        steps = trace.len(),
        "built trace"
    );
    Ok(trace)
}

fn frame_range(frame: &Frame) -> (usize, usize) {
    let index = |name| {
        frame
            .arg(name)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or_default()
    };
    (index("start"), index("last"))
}
