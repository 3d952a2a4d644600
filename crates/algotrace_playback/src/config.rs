//! Configuration for playback.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Player`](crate::Player).
///
/// The player never sleeps; `interval_ms` is advice for whoever drives
/// [`Player::tick`](crate::Player::tick).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaybackConfig {
    /// Delay between ticks, in milliseconds.
    pub interval_ms: u64,

    /// Whether a freshly loaded trace starts playing.
    pub start_playing: bool,

    /// Pause at the terminal step; otherwise wrap around to the start.
    pub stop_at_end: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            start_playing: false,
            stop_at_end: true,
        }
    }
}

impl PlaybackConfig {
    /// Slowest preset, for walking through a trace while explaining it.
    #[must_use]
    pub fn lecture() -> Self {
        Self {
            interval_ms: 2000,
            ..Self::default()
        }
    }

    /// Fast preset that starts playing immediately.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            interval_ms: 250,
            start_playing: true,
            stop_at_end: true,
        }
    }

    /// Looping preset for unattended demos.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            interval_ms: 500,
            start_playing: true,
            stop_at_end: false,
        }
    }

    /// Builder method to set the tick interval.
    #[must_use]
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Builder method to start playing on load.
    #[must_use]
    pub fn with_start_playing(mut self, start_playing: bool) -> Self {
        self.start_playing = start_playing;
        self
    }

    /// Builder method to pause at the terminal step.
    #[must_use]
    pub fn with_stop_at_end(mut self, stop_at_end: bool) -> Self {
        self.stop_at_end = stop_at_end;
        self
    }

    /// Returns the tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
