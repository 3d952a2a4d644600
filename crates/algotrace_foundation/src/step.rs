//! Step records.
//!
//! A [`Step`] is one immutable snapshot of an algorithm's working state plus
//! the narration and code markers a consumer needs to display it. Steps are
//! only created through [`TraceRecorder`](crate::TraceRecorder); all fields
//! are private and exposed through accessors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Step Kind
// =============================================================================

/// Classification of a step, used by consumers to pick a presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StepKind {
    /// Initial state before any work.
    Init,
    /// A (simulated) function invocation.
    Call,
    /// A base-case or loop-condition check.
    Check,
    /// Two values are compared.
    Compare,
    /// Elements are highlighted ahead of a mutation.
    Highlight,
    /// Two elements were exchanged.
    Swap,
    /// A symbol was pushed onto an explicit stack.
    Push,
    /// A symbol was popped from an explicit stack.
    Pop,
    /// An input element was passed over without effect.
    Skip,
    /// A grid cell was visited.
    Visit,
    /// A traversal boundary moved.
    Boundary,
    /// A (simulated) function returned.
    Return,
    /// The algorithm finished.
    Complete,
}

impl StepKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Init,
        Self::Call,
        Self::Check,
        Self::Compare,
        Self::Highlight,
        Self::Swap,
        Self::Push,
        Self::Pop,
        Self::Skip,
        Self::Visit,
        Self::Boundary,
        Self::Return,
        Self::Complete,
    ];

    /// Returns a short name for the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Call => "call",
            Self::Check => "check",
            Self::Compare => "compare",
            Self::Highlight => "highlight",
            Self::Swap => "swap",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Skip => "skip",
            Self::Visit => "visit",
            Self::Boundary => "boundary",
            Self::Return => "return",
            Self::Complete => "complete",
        }
    }

    /// Returns true for kinds that only occur in recursive traces.
    #[must_use]
    pub fn is_call_event(self) -> bool {
        matches!(self, Self::Call | Self::Return)
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// =============================================================================
// Code Marker
// =============================================================================

/// A position in one of an algorithm's reference listings.
///
/// `listing` indexes the algorithm's listings; `line` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodeMarker {
    /// Index of the listing.
    pub listing: usize,
    /// 1-based line number within the listing.
    pub line: u32,
}

impl CodeMarker {
    /// Creates a new marker.
    #[must_use]
    pub const fn new(listing: usize, line: u32) -> Self {
        Self { listing, line }
    }

    /// Creates a marker into the first listing.
    #[must_use]
    pub const fn line(line: u32) -> Self {
        Self::new(0, line)
    }
}

impl std::fmt::Display for CodeMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}:{}", self.listing, self.line)
    }
}

// =============================================================================
// Step
// =============================================================================

/// One immutable snapshot within a trace.
///
/// `S` is the algorithm's state snapshot, `R` the type of its decided result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step<S, R> {
    kind: StepKind,
    description: String,
    state: S,
    markers: Vec<CodeMarker>,
    result: Option<R>,
    terminal: bool,
}

impl<S, R> Step<S, R> {
    pub(crate) fn new(
        kind: StepKind,
        description: String,
        state: S,
        markers: Vec<CodeMarker>,
        result: Option<R>,
        terminal: bool,
    ) -> Self {
        Self {
            kind,
            description,
            state,
            markers,
            result,
            terminal,
        }
    }

    /// Returns the step classification.
    #[must_use]
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Returns the narration of what just happened.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the state snapshot.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the code markers for this step.
    #[must_use]
    pub fn markers(&self) -> &[CodeMarker] {
        &self.markers
    }

    /// Returns the decided result, if the algorithm has decided one yet.
    #[must_use]
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Returns true if this is the final step of its trace.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
