//! Step formatters.
//!
//! Renders steps as text for the CLI and for logs.

use std::fmt::{Debug, Display, Write};

use algotrace_builders::Listing;
use algotrace_builders::listing::resolve;
use algotrace_foundation::{Step, Trace};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting steps.
pub trait TraceFormatter {
    /// Formats the step at `index`.
    ///
    /// `listings` are the listings the step's markers point into.
    fn format_step<S: Display, R: Debug>(
        &self,
        index: usize,
        step: &Step<S, R>,
        listings: &[Listing],
    ) -> String;

    /// Formats every step, one block per step.
    fn format_trace<S: Display, R: Debug>(&self, trace: &Trace<S, R>, listings: &[Listing]) -> String {
        trace
            .iter()
            .enumerate()
            .map(|(i, step)| self.format_step(i, step, listings))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats steps in human-readable form.
#[derive(Clone, Debug)]
pub struct HumanFormatter {
    /// Whether to prefix each step with its index.
    pub show_index: bool,
    /// Whether to print the state snapshot under the description.
    pub show_state: bool,
    /// Whether to print the highlighted source lines.
    pub show_markers: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self {
            show_index: true,
            show_state: true,
            show_markers: false,
        }
    }
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show highlighted source lines.
    #[must_use]
    pub fn with_markers(mut self) -> Self {
        self.show_markers = true;
        self
    }

    /// Builder method to hide state snapshots.
    #[must_use]
    pub fn without_state(mut self) -> Self {
        self.show_state = false;
        self
    }

    /// Builder method to hide step indices.
    #[must_use]
    pub fn without_index(mut self) -> Self {
        self.show_index = false;
        self
    }
}

impl TraceFormatter for HumanFormatter {
    fn format_step<S: Display, R: Debug>(
        &self,
        index: usize,
        step: &Step<S, R>,
        listings: &[Listing],
    ) -> String {
        let mut out = String::new();

        if self.show_index {
            let _ = write!(out, "[{index:03}] ");
        }
        let _ = write!(out, "{:<9} {}", step.kind(), step.description());

        if step.is_terminal() {
            match step.result() {
                Some(result) => {
                    let _ = write!(out, " => {result:?}");
                }
                None => out.push_str(" => done"),
            }
        }

        if self.show_state {
            let _ = write!(out, "\n      {}", step.state());
        }

        if self.show_markers {
            for marker in step.markers() {
                let line = resolve(listings, *marker).unwrap_or("?");
                let _ = write!(out, "\n      {marker} | {}", line.trim());
            }
        }

        out
    }
}
