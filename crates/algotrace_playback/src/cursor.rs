//! The playback cursor.
//!
//! A cursor is a position in a trace. Every operation saturates at the trace
//! bounds instead of failing, and none of them know anything about time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use algotrace_foundation::{Step, Trace};

/// Clamps `index` to `[0, trace.len() - 1]`.
#[must_use]
pub fn seek<S, R>(trace: &Trace<S, R>, index: usize) -> usize {
    index.min(trace.last_index())
}

/// Returns the index after `index`, saturating at the terminal step.
#[must_use]
pub fn next<S, R>(trace: &Trace<S, R>, index: usize) -> usize {
    seek(trace, index.saturating_add(1))
}

/// Returns the index before `index`, saturating at 0.
///
/// An out-of-range `index` is clamped to the terminal step first, so the
/// result is the step before the terminal one.
#[must_use]
pub fn previous<S, R>(trace: &Trace<S, R>, index: usize) -> usize {
    seek(trace, index).saturating_sub(1)
}

/// Returns the initial index.
#[must_use]
pub const fn reset() -> usize {
    0
}

// =============================================================================
// Cursor
// =============================================================================

/// A position within a trace of known length.
///
/// Holds only the length, so it can drive any trace type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Creates a cursor at index 0 over `len` steps.
    ///
    /// Traces are never empty, so a length of 0 is treated as 1.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: if len == 0 { 1 } else { len },
        }
    }

    /// Creates a cursor sized for `trace`.
    #[must_use]
    pub fn for_trace<S, R>(trace: &Trace<S, R>) -> Self {
        Self::new(trace.len())
    }

    /// Returns the current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; a cursor covers at least one step.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the index of the terminal step.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.len - 1
    }

    /// Returns true at index 0.
    #[must_use]
    pub const fn at_start(&self) -> bool {
        self.index == 0
    }

    /// Returns true at the terminal step.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.index == self.last_index()
    }

    /// Moves to `index`, clamped to the valid range.
    pub fn seek(&mut self, index: usize) -> usize {
        self.index = index.min(self.last_index());
        self.index
    }

    /// Moves one step forward, saturating at the end.
    pub fn next(&mut self) -> usize {
        self.seek(self.index.saturating_add(1))
    }

    /// Moves one step back, saturating at 0.
    pub fn previous(&mut self) -> usize {
        self.seek(self.index.saturating_sub(1))
    }

    /// Moves back to index 0.
    pub fn reset(&mut self) -> usize {
        self.seek(reset())
    }

    /// Returns the current step of `trace`.
    ///
    /// Returns `None` if the cursor was sized for a longer trace.
    #[must_use]
    pub fn current<'a, S, R>(&self, trace: &'a Trace<S, R>) -> Option<&'a Step<S, R>> {
        trace.get(self.index)
    }
}
