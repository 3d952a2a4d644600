//! Bracket validation.
//!
//! A single left-to-right scan with an explicit stack of openers. Closers are
//! matched through a fixed closer-to-opener table.

use std::fmt;

use algotrace_foundation::{CodeMarker, Error, Result, StepKind, Trace, TraceRecorder, TraceVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used in errors and log events.
pub const ALGORITHM: &str = "brackets";

/// Smallest input the builder accepts.
pub const MIN_LEN: usize = 1;

/// Closer to opener table.
pub const PAIRS: [(char, char); 3] = [(')', '('), (']', '['), ('}', '{')];

const AT_INIT: &[CodeMarker] = &[CodeMarker::line(3)];
const AT_SCAN: &[CodeMarker] = &[CodeMarker::line(4)];
const AT_PUSH: &[CodeMarker] = &[CodeMarker::line(6)];
const AT_POP: &[CodeMarker] = &[CodeMarker::line(8)];
const AT_MISMATCH: &[CodeMarker] = &[CodeMarker::line(9)];
const AT_END: &[CodeMarker] = &[CodeMarker::line(13)];

/// Returns the opener a closer must match, or `None` if `c` is not a closer.
#[must_use]
pub fn opener_for(c: char) -> Option<char> {
    PAIRS
        .iter()
        .find(|(close, _)| *close == c)
        .map(|(_, open)| *open)
}

/// Returns true if `c` opens a bracket pair.
#[must_use]
pub fn is_opener(c: char) -> bool {
    PAIRS.iter().any(|(_, open)| *open == c)
}

/// Snapshot of the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BracketState {
    /// The input characters.
    pub input: TraceVec<char>,
    /// Index of the character just processed; `None` before the scan.
    pub index: Option<usize>,
    /// The character just processed.
    pub current: Option<char>,
    /// Openers still waiting for a closer, bottom first.
    pub stack: TraceVec<char>,
    /// Validity, once decided.
    pub valid: Option<bool>,
}

impl fmt::Display for BracketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack: String = self.stack.iter().collect();
        match (self.index, self.current) {
            (Some(i), Some(c)) => write!(f, "[{i}]='{c}' ")?,
            _ => write!(f, "[-] ")?,
        }
        write!(f, "stack=\"{stack}\"")?;
        if let Some(valid) = self.valid {
            write!(f, " valid={valid}")?;
        }
        Ok(())
    }
}

/// A bracket trace; the result is `true` for a balanced input.
pub type BracketTrace = Trace<BracketState, bool>;

/// Builds the trace of validating the bracket structure of `text`.
///
/// Characters other than `()[]{}` are skipped.
///
/// # Errors
///
/// Returns an `InputTooShort` precondition error for an empty string.
pub fn build(text: &str) -> Result<BracketTrace> {
    let input: TraceVec<char> = text.chars().collect();
    if input.len() < MIN_LEN {
        return Err(Error::input_too_short(ALGORITHM, MIN_LEN, 0));
    }

    let snapshot = |index: Option<usize>, stack: &TraceVec<char>, valid: Option<bool>| {
        BracketState {
            input: input.clone(),
            index,
            current: index.and_then(|i| input.get(i).copied()),
            stack: stack.clone(),
            valid,
        }
    };

    let mut rec = TraceRecorder::with_capacity(ALGORITHM, input.len() + 2);
    let mut stack = TraceVec::new();
    rec.record(
        StepKind::Init,
        AT_INIT,
        format!("Validate the brackets in \"{text}\" with an empty stack"),
        snapshot(None, &stack, None),
    );

    for (i, c) in text.chars().enumerate() {
        if is_opener(c) {
            stack = stack.push_back(c);
            rec.record(
                StepKind::Push,
                AT_PUSH,
                format!("'{c}' at {i} opens a pair, push it"),
                snapshot(Some(i), &stack, None),
            );
            continue;
        }

        let Some(expected) = opener_for(c) else {
            rec.record(
                StepKind::Skip,
                AT_SCAN,
                format!("'{c}' at {i} is not a bracket, skip it"),
                snapshot(Some(i), &stack, None),
            );
            continue;
        };

        match stack.pop_back() {
            Some((rest, top)) if top == expected => {
                stack = rest;
                rec.record(
                    StepKind::Pop,
                    AT_POP,
                    format!("'{c}' at {i} closes '{top}', pop it"),
                    snapshot(Some(i), &stack, None),
                );
            }
            popped => {
                let reason = match popped {
                    Some((_, top)) => format!("'{c}' at {i} cannot close '{top}'"),
                    None => format!("'{c}' at {i} has no opener, the stack is empty"),
                };
                let trace = rec.finish_with(
                    false,
                    StepKind::Complete,
                    AT_MISMATCH,
                    format!("{reason}: invalid"),
                    snapshot(Some(i), &stack, Some(false)),
                );
                log_built(&trace);
                return Ok(trace);
            }
        }
    }

    let last = Some(input.len() - 1);
    let valid = stack.is_empty();
    let description = if valid {
        "End of input with an empty stack: valid".to_string()
    } else {
        let open: String = stack.iter().collect();
        format!("End of input with \"{open}\" still open: invalid")
    };
    let trace = rec.finish_with(
        valid,
        StepKind::Complete,
        AT_END,
        description,
        snapshot(last, &stack, Some(valid)),
    );
    log_built(&trace);
    Ok(trace)
}

fn log_built(trace: &BracketTrace) {
    tracing::debug!(
        algorithm = ALGORITHM,
        len = trace.first().state().input.len(),
        steps = trace.len(),
        result = ?trace.result(),
        "built trace"
    );
}
