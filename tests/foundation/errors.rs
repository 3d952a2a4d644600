//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use algotrace_foundation::{Error, ErrorContext, ErrorKind, TraceDefect};

#[test]
fn input_too_short_is_precondition() {
    let err = Error::input_too_short("sortedness", 2, 1);
    assert!(err.is_precondition());
    assert!(matches!(
        err.kind,
        ErrorKind::InputTooShort { minimum: 2, actual: 1, .. }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("sortedness"));
    assert!(msg.contains('2'));
}

#[test]
fn ragged_grid_is_precondition() {
    let err = Error::ragged_grid(3, 4, 2);
    assert!(err.is_precondition());
    assert_eq!(err.context.as_ref().and_then(|c| c.position), Some(3));
}

#[test]
fn runtime_errors_are_not_preconditions() {
    assert!(!Error::invalid_input("nope").is_precondition());
    assert!(!Error::unknown_algorithm("bogo").is_precondition());
    assert!(!Error::malformed(TraceDefect::Empty).is_precondition());
}

#[test]
fn malformed_trace_display() {
    let err = Error::malformed(TraceDefect::EarlyTerminal { index: 4 });
    assert_eq!(
        err.to_string(),
        "malformed trace: step 4 is terminal but is not the last step"
    );
}

#[test]
fn context_display() {
    let ctx = ErrorContext::new()
        .with_algorithm("spiral")
        .with_position(2)
        .with_fragment("x");
    assert_eq!(ctx.to_string(), "in spiral at position 2 near 'x'");
}
