//! Playback for algotrace traces.
//!
//! This crate provides:
//! - [`cursor`] - Saturating `seek`/`next`/`previous`/`reset` and [`Cursor`]
//! - [`PlaybackConfig`] - Tick interval and end-of-trace behavior
//! - [`Player`] - Play/pause state machine driven by an external timer
//!
//! Nothing here sleeps or spawns; the caller owns the clock.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod cursor;
pub mod player;

pub use config::PlaybackConfig;
pub use cursor::{Cursor, next, previous, reset, seek};
pub use player::{Player, TickOutcome};
