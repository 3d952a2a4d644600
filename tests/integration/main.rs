//! Cross-layer integration tests for algotrace
//!
//! Tests that verify correct interaction between multiple crates.

mod end_to_end;
mod properties;
