//! Property tests shared by all builders.
//!
//! These check the trace-level guarantees on generated inputs: determinism,
//! a single trailing terminal step, monotonic scan progress, stack discipline
//! for the simulated recursions, and markers that resolve into the listings.
