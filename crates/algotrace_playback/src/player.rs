//! The player state machine.
//!
//! A [`Player`] combines a [`Cursor`] with a playing flag. An external timer
//! calls [`Player::tick`] once per interval; the player decides whether the
//! cursor moves and when playback stops.

use crate::config::PlaybackConfig;
use crate::cursor::Cursor;

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The player is paused; nothing moved.
    Paused,
    /// The cursor advanced to this index.
    Advanced(usize),
    /// The cursor reached the terminal step and playback stopped.
    Finished(usize),
    /// The cursor wrapped from the terminal step back to 0.
    Restarted,
}

/// Playback state for one trace.
#[derive(Clone, Debug)]
pub struct Player {
    cursor: Cursor,
    playing: bool,
    config: PlaybackConfig,
}

impl Player {
    /// Creates a player over `len` steps.
    #[must_use]
    pub fn new(len: usize, config: PlaybackConfig) -> Self {
        Self {
            cursor: Cursor::new(len),
            playing: config.start_playing && len > 1,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Returns the cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the current index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Returns true while playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts playing. At the terminal step this rewinds first.
    pub fn play(&mut self) {
        if self.cursor.at_end() {
            self.cursor.reset();
        }
        self.playing = true;
        tracing::debug!(index = self.index(), "play");
    }

    /// Stops playing without moving.
    pub fn pause(&mut self) {
        self.playing = false;
        tracing::debug!(index = self.index(), "pause");
    }

    /// Switches between playing and paused.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advances once if playing.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Paused;
        }
        if self.cursor.at_end() {
            if self.config.stop_at_end {
                self.playing = false;
                return TickOutcome::Finished(self.index());
            }
            self.cursor.reset();
            return TickOutcome::Restarted;
        }

        let index = self.cursor.next();
        if self.cursor.at_end() && self.config.stop_at_end {
            self.playing = false;
            tracing::debug!(index, "playback finished");
            return TickOutcome::Finished(index);
        }
        TickOutcome::Advanced(index)
    }

    /// Pauses and moves one step forward.
    pub fn step_forward(&mut self) -> usize {
        self.playing = false;
        self.cursor.next()
    }

    /// Pauses and moves one step back.
    pub fn step_back(&mut self) -> usize {
        self.playing = false;
        self.cursor.previous()
    }

    /// Pauses and moves to `index`, clamped.
    pub fn seek(&mut self, index: usize) -> usize {
        self.playing = false;
        self.cursor.seek(index)
    }

    /// Pauses and rewinds to the first step.
    pub fn restart(&mut self) {
        self.playing = false;
        self.cursor.reset();
    }

    /// Replaces the trace with one of `len` steps.
    ///
    /// The cursor rewinds and the playing flag follows the configuration.
    pub fn load(&mut self, len: usize) {
        *self = Self::new(len, self.config.clone());
        tracing::debug!(len = self.cursor.len(), "loaded trace");
    }
}
