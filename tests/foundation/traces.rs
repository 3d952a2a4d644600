//! Integration tests for traces and the recorder
//!
//! Checks the trace invariants from outside the crate, including traces that
//! arrive through deserialization.

use algotrace_foundation::{CodeMarker, Step, StepKind, Trace, TraceRecorder};

const AT: &[CodeMarker] = &[CodeMarker::line(1)];

fn counting_trace(n: u32) -> Trace<u32, bool> {
    let mut rec = TraceRecorder::new("count");
    rec.record(StepKind::Init, AT, "start", 0);
    for i in 1..=n {
        rec.record(StepKind::Compare, AT, format!("step {i}"), i);
    }
    rec.finish_with(true, StepKind::Complete, AT, "done", n + 1)
}

#[test]
fn recorder_produces_valid_trace() {
    let trace = counting_trace(3);
    assert_eq!(trace.len(), 5);
    assert!(trace.validate().is_ok());
    assert_eq!(trace.first().kind(), StepKind::Init);
    assert!(trace.terminal().is_terminal());
    assert_eq!(trace.result(), Some(&true));
    assert_eq!(trace.kind_counts().get(&StepKind::Compare), Some(&3));
}

#[test]
fn exactly_one_terminal_step() {
    let trace = counting_trace(10);
    let terminals: Vec<_> = trace
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_terminal())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(terminals, vec![trace.last_index()]);
}

// =============================================================================
// Deserialization
// =============================================================================

#[test]
fn serde_roundtrip_preserves_trace() {
    let trace = counting_trace(2);
    let bytes = rmp_serde::to_vec_named(&trace).unwrap();
    let loaded: Trace<u32, bool> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(loaded, trace);
}

#[test]
fn deserializing_without_terminal_fails() {
    let trace = counting_trace(2);
    let bytes = rmp_serde::to_vec_named(&trace.steps()[..2]).unwrap();
    let err = rmp_serde::from_slice::<Trace<u32, bool>>(&bytes).unwrap_err();
    assert!(err.to_string().contains("last step is not terminal"));
}

#[test]
fn deserializing_early_terminal_fails() {
    let a = counting_trace(0);
    let b = counting_trace(1);
    let steps: Vec<&Step<u32, bool>> = vec![a.terminal(), b.first(), b.terminal()];
    let bytes = rmp_serde::to_vec_named(&steps).unwrap();
    let err = rmp_serde::from_slice::<Trace<u32, bool>>(&bytes).unwrap_err();
    assert!(err.to_string().contains("step 0 is terminal"));
}

#[test]
fn deserializing_empty_fails() {
    let steps: Vec<Step<u32, bool>> = Vec::new();
    let bytes = rmp_serde::to_vec_named(&steps).unwrap();
    assert!(rmp_serde::from_slice::<Trace<u32, bool>>(&bytes).is_err());
}
