//! Error types for the algotrace system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Algorithmic outcomes such as "not sorted" or "unbalanced brackets" are
//! never errors; they are terminal results inside a trace. The kinds below
//! cover precondition violations, malformed traces, and failures in the
//! surrounding runtime (validation, serialization, I/O).

use std::fmt;

use thiserror::Error;

/// The main error type for algotrace operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a precondition error for an input that is too small.
    #[must_use]
    pub fn input_too_short(algorithm: &'static str, minimum: usize, actual: usize) -> Self {
        Self::new(ErrorKind::InputTooShort {
            algorithm,
            minimum,
            actual,
        })
        .with_context(ErrorContext::new().with_algorithm(algorithm))
    }

    /// Creates a precondition error for a grid whose rows differ in length.
    #[must_use]
    pub fn ragged_grid(row: usize, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::RaggedGrid {
            row,
            expected,
            actual,
        })
        .with_context(ErrorContext::new().with_position(row))
    }

    /// Creates a malformed trace error.
    #[must_use]
    pub fn malformed(defect: TraceDefect) -> Self {
        Self::new(ErrorKind::MalformedTrace(defect))
    }

    /// Creates an input validation error with a user-facing message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }

    /// Creates an unknown algorithm error.
    #[must_use]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAlgorithm(name.into()))
    }

    /// Returns true if this error reports a violated builder precondition.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InputTooShort { .. } | ErrorKind::RaggedGrid { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A builder was invoked with fewer elements than it requires.
    #[error("{algorithm} requires at least {minimum} element(s), got {actual}")]
    InputTooShort {
        /// The algorithm whose precondition failed.
        algorithm: &'static str,
        /// The minimum accepted input size.
        minimum: usize,
        /// The size actually supplied.
        actual: usize,
    },

    /// A grid row has a different length than the first row.
    #[error("grid row {row} has {actual} column(s), expected {expected}")]
    RaggedGrid {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A trace violates the trace invariants.
    #[error("malformed trace: {0}")]
    MalformedTrace(TraceDefect),

    /// User-supplied text could not be turned into algorithm input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No algorithm is registered under the given name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// The specific invariant a malformed trace breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceDefect {
    /// The trace has no steps.
    Empty,
    /// The last step is not marked terminal.
    MissingTerminal,
    /// A step before the end is marked terminal.
    EarlyTerminal {
        /// Index of the first early terminal step.
        index: usize,
    },
}

impl fmt::Display for TraceDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "trace has no steps"),
            Self::MissingTerminal => write!(f, "last step is not terminal"),
            Self::EarlyTerminal { index } => {
                write!(f, "step {index} is terminal but is not the last step")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Algorithm being traced or parsed for.
    pub algorithm: Option<String>,
    /// Position in the input (element, character, or row index).
    pub position: Option<usize>,
    /// Offending input fragment.
    pub fragment: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the algorithm name.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Sets the input position.
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the offending fragment.
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(algorithm) = &self.algorithm {
            parts.push(format!("in {algorithm}"));
        }
        if let Some(position) = self.position {
            parts.push(format!("at position {position}"));
        }
        if let Some(fragment) = &self.fragment {
            parts.push(format!("near '{fragment}'"));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Result alias used throughout algotrace.
pub type Result<T> = std::result::Result<T, Error>;
