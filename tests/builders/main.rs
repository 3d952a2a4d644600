//! Integration tests for Layer 1: Builders
//!
//! Tests for the five trace builders and the algorithm registry.

mod recursion;
mod registry;
mod scans;
