//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: TraceVec, CallStack, Trace, TraceRecorder, and Error.

mod collections;
mod errors;
mod traces;
