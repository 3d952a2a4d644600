//! Runtime surface for algotrace.
//!
//! This crate provides:
//! - [`input`] - Text parsing and [`InputLimits`] enforcement
//! - [`AnyTrace`] - A trace of any algorithm behind one type
//! - [`format`] - [`TraceFormatter`] and [`HumanFormatter`]
//! - [`serialize`] - `MessagePack` save and load
//! - [`sample`] - Seeded sample inputs
//!
//! The `algotrace` binary wires these together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod format;
pub mod input;
pub mod sample;
pub mod serialize;
pub mod trace;

pub use format::{HumanFormatter, TraceFormatter};
pub use input::{Input, InputLimits, parse};
pub use sample::Sampler;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use trace::AnyTrace;
