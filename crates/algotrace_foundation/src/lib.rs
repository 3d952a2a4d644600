//! Step records, traces, call frames, and errors for algotrace.
//!
//! This crate provides:
//! - [`Step`] - One immutable snapshot plus narration and code markers
//! - [`Trace`] - The validated, non-empty sequence of steps for one input
//! - [`TraceRecorder`] - The only way builders create steps
//! - [`CallStack`] / [`Frame`] - Explicit frames for recursive traces
//! - [`TraceVec`] - Persistent vector used inside snapshots
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod frame;
pub mod recorder;
pub mod step;
pub mod trace;

pub use collections::TraceVec;
pub use error::{Error, ErrorContext, ErrorKind, Result, TraceDefect};
pub use frame::{Arg, CallStack, Frame};
pub use recorder::TraceRecorder;
pub use step::{CodeMarker, Step, StepKind};
pub use trace::Trace;
