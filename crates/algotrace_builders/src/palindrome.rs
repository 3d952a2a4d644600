//! Palindrome check by recursion.
//!
//! Simulates `is_palindrome(s, left, right)`, which compares the two ends of
//! the range and recurses inward. The recursion is tail-shaped, so the
//! simulation descends in a loop and then unwinds the explicit frame list;
//! the host call stack never grows with the input.

use std::fmt;

use algotrace_foundation::{
    CallStack, CodeMarker, Error, Frame, Result, StepKind, Trace, TraceRecorder, TraceVec,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used in errors and log events.
pub const ALGORITHM: &str = "palindrome";

/// Smallest input the builder accepts.
pub const MIN_LEN: usize = 1;

const FUNCTION: &str = "is_palindrome";

const AT_MAIN_INPUT: CodeMarker = CodeMarker::new(1, 2);
const AT_MAIN_CALL: CodeMarker = CodeMarker::new(1, 3);
const AT_MAIN_PRINT: CodeMarker = CodeMarker::new(1, 4);
const AT_ENTRY: CodeMarker = CodeMarker::line(1);
const AT_BASE_CHECK: CodeMarker = CodeMarker::line(2);
const AT_BASE_RETURN: CodeMarker = CodeMarker::line(3);
const AT_COMPARE: CodeMarker = CodeMarker::line(5);
const AT_MISMATCH_RETURN: CodeMarker = CodeMarker::line(6);
const AT_RECURSE: CodeMarker = CodeMarker::line(8);

/// Snapshot of the simulated recursion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalindromeState {
    /// The characters being checked.
    pub chars: TraceVec<char>,
    /// Left end of the active range.
    pub left: usize,
    /// Right end of the active range.
    pub right: usize,
    /// Active invocations, outermost first.
    pub stack: CallStack,
}

impl fmt::Display for PalindromeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.chars.iter().collect();
        write!(
            f,
            "\"{text}\" left={} right={} stack=[{}]",
            self.left, self.right, self.stack
        )
    }
}

/// A palindrome trace; the result is `true` for a palindrome.
pub type PalindromeTrace = Trace<PalindromeState, bool>;

fn frame(left: usize, right: usize) -> Frame {
    Frame::new(FUNCTION)
        .with_index("left", left)
        .with_index("right", right)
}

/// Builds the trace of checking whether `text` reads the same both ways.
///
/// Characters are compared exactly; no case folding or filtering happens.
///
/// # Errors
///
/// Returns an `InputTooShort` precondition error for an empty string.
pub fn build(text: &str) -> Result<PalindromeTrace> {
    let chars: TraceVec<char> = text.chars().collect();
    if chars.len() < MIN_LEN {
        return Err(Error::input_too_short(ALGORITHM, MIN_LEN, chars.len()));
    }

    let snapshot = |left: usize, right: usize, stack: &CallStack| PalindromeState {
        chars: chars.clone(),
        left,
        right,
        stack: stack.clone(),
    };

    let mut rec = TraceRecorder::new(ALGORITHM);
    let (mut left, mut right) = (0, chars.len() - 1);
    let mut stack = CallStack::new();

    rec.record(
        StepKind::Init,
        &[AT_MAIN_INPUT],
        format!("Check whether \"{text}\" is a palindrome"),
        snapshot(left, right, &stack),
    );

    // Descend until a frame decides the answer.
    let mut call_site = AT_MAIN_CALL;
    let decided = loop {
        stack = stack.push(frame(left, right));
        rec.record(
            StepKind::Call,
            &[call_site, AT_ENTRY],
            format!("Call {FUNCTION}(left = {left}, right = {right})"),
            snapshot(left, right, &stack),
        );

        if left >= right {
            rec.record(
                StepKind::Check,
                &[AT_BASE_CHECK],
                format!("left = {left} >= right = {right}: at most one character remains"),
                snapshot(left, right, &stack),
            );
            rec.decide(true);
            stack = stack.without_top();
            rec.record(
                StepKind::Return,
                &[AT_BASE_RETURN],
                format!("Base case reached, {FUNCTION}({left}, {right}) returns true"),
                snapshot(left, right, &stack),
            );
            break true;
        }

        rec.record(
            StepKind::Check,
            &[AT_BASE_CHECK],
            format!("left = {left} < right = {right}: not the base case"),
            snapshot(left, right, &stack),
        );

        let (a, b) = (char_at(&chars, left), char_at(&chars, right));
        rec.record(
            StepKind::Compare,
            &[AT_COMPARE],
            format!("Compare s[{left}] = '{a}' with s[{right}] = '{b}'"),
            snapshot(left, right, &stack),
        );

        if a != b {
            rec.decide(false);
            stack = stack.without_top();
            rec.record(
                StepKind::Return,
                &[AT_MISMATCH_RETURN],
                format!("'{a}' != '{b}', {FUNCTION}({left}, {right}) returns false"),
                snapshot(left, right, &stack),
            );
            break false;
        }

        left += 1;
        right -= 1;
        call_site = AT_RECURSE;
    };

    // Unwind the callers that were waiting on the recursive call.
    while let Some((popped, caller)) = stack.pop() {
        stack = popped;
        let (l, r) = frame_range(&caller);
        rec.record(
            StepKind::Return,
            &[AT_RECURSE],
            format!("{FUNCTION}({l}, {r}) returns {decided} from its recursive call"),
            snapshot(l, r, &stack),
        );
    }

    let verdict = if decided { "is" } else { "is not" };
    let trace = rec.finish(
        StepKind::Complete,
        &[AT_MAIN_PRINT],
        format!("\"{text}\" {verdict} a palindrome"),
        snapshot(0, chars.len() - 1, &stack),
    );
    tracing::debug!(
        algorithm = ALGORITHM,
        len = chars.len(),
        steps = trace.len(),
        result = ?trace.result(),
        "built trace"
    );
    Ok(trace)
}

fn char_at(chars: &TraceVec<char>, index: usize) -> char {
    chars.get(index).copied().unwrap_or_default()
}

fn frame_range(frame: &Frame) -> (usize, usize) {
    let index = |name| {
        frame
            .arg(name)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or_default()
    };
    (index("left"), index("right"))
}
