//! Integration tests for Layer 3: Runtime
//!
//! Tests input validation, formatting, samples, and saved traces.

mod inputs;
mod persistence;
