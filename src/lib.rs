//! algotrace - Replayable step-by-step traces of classic algorithms
//!
//! This crate re-exports all layers of the algotrace system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: algotrace_runtime    - Input validation, formatting, serialization, CLI
//! Layer 2: algotrace_playback   - Cursor, playback config, player state machine
//! Layer 1: algotrace_builders   - Trace builders and reference listings
//! Layer 0: algotrace_foundation - Core types (Step, Trace, CallStack, Error)
//! ```

pub use algotrace_builders as builders;
pub use algotrace_foundation as foundation;
pub use algotrace_playback as playback;
pub use algotrace_runtime as runtime;
