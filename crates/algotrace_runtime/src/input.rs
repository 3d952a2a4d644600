//! Input validation.
//!
//! Turns raw text into the typed input a builder expects. Everything the
//! builders would reject, plus anything outside the configured limits, is
//! reported here as an `InvalidInput` error with a user-facing message, so a
//! builder is only ever called with valid input.

use algotrace_builders::Algorithm;
use algotrace_foundation::{Error, ErrorContext, Result};

// =============================================================================
// Limits
// =============================================================================

/// Size and range limits applied while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputLimits {
    /// Minimum number of elements (or characters).
    pub min_len: usize,
    /// Maximum number of elements (or characters).
    pub max_len: usize,
    /// Smallest accepted integer.
    pub min_value: i64,
    /// Largest accepted integer.
    pub max_value: i64,
    /// Maximum number of rows and of columns in a grid.
    pub max_dimension: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: 64,
            min_value: -999,
            max_value: 999,
            max_dimension: 12,
        }
    }
}

impl InputLimits {
    /// Limits matching the minimum size each builder accepts.
    #[must_use]
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sortedness => Self::default().with_min_len(2),
            Algorithm::Palindrome | Algorithm::Brackets => Self::default().with_max_len(128),
            Algorithm::Reverse | Algorithm::Spiral => Self::default(),
        }
    }

    /// Limits wide enough for scripted or benchmark use.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            min_len: 1,
            max_len: 1_000_000,
            min_value: i64::MIN,
            max_value: i64::MAX,
            max_dimension: 1_000,
        }
    }

    /// Builder method to set the minimum length.
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Builder method to set the maximum length.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Builder method to set the accepted value range.
    #[must_use]
    pub fn with_value_range(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Builder method to set the maximum grid dimension.
    #[must_use]
    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Caps a requested sample size so the sample fits these limits.
    ///
    /// Grids are square, so their side is capped by `max_dimension`.
    #[must_use]
    pub fn clamp_size(&self, algorithm: Algorithm, size: usize) -> usize {
        match algorithm {
            Algorithm::Spiral => size.min(self.max_dimension),
            _ => size.min(self.max_len),
        }
    }

    /// Checks input that did not come from text, such as a generated sample.
    ///
    /// # Errors
    ///
    /// Returns the same `InvalidInput` error parsing would have produced.
    pub fn check(&self, input: &Input) -> Result<()> {
        match input {
            Input::Numbers(values) => {
                self.check_values(values)?;
                self.check_len(values.len(), "numbers")
            }
            Input::Text(text) => self.check_len(text.chars().count(), "characters"),
            Input::Grid(rows) => {
                for row in rows {
                    self.check_values(row)?;
                }
                self.check_grid(rows)
            }
        }
    }

    fn check_values(&self, values: &[i64]) -> Result<()> {
        match values.iter().position(|v| !(self.min_value..=self.max_value).contains(v)) {
            Some(position) => Err(self
                .out_of_range(values[position])
                .with_context(ErrorContext::new().with_position(position))),
            None => Ok(()),
        }
    }

    fn out_of_range(&self, value: i64) -> Error {
        Error::invalid_input(format!(
            "{value} is outside {}..={}",
            self.min_value, self.max_value
        ))
    }

    fn check_grid(&self, rows: &[Vec<i64>]) -> Result<()> {
        let Some(width) = rows.first().map(Vec::len) else {
            return Err(Error::invalid_input("enter at least one row"));
        };
        if width == 0 {
            return Err(Error::invalid_input("enter at least one column"));
        }
        if rows.len() > self.max_dimension || width > self.max_dimension {
            return Err(Error::invalid_input(format!(
                "a {}x{width} grid exceeds the {max}x{max} limit",
                rows.len(),
                max = self.max_dimension
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::invalid_input(format!(
                "row {} has {} values, expected {width}",
                index + 1,
                row.len()
            ))
            .with_context(ErrorContext::new().with_position(index)));
        }
        Ok(())
    }

    fn check_len(&self, len: usize, unit: &str) -> Result<()> {
        if len < self.min_len {
            return Err(Error::invalid_input(format!(
                "enter at least {} {unit}, got {len}",
                self.min_len
            )));
        }
        if len > self.max_len {
            return Err(Error::invalid_input(format!(
                "enter at most {} {unit}, got {len}",
                self.max_len
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Parsed Input
// =============================================================================

/// Typed input for one of the builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A list of integers.
    Numbers(Vec<i64>),
    /// A string, compared character by character.
    Text(String),
    /// A rectangular grid, row-major.
    Grid(Vec<Vec<i64>>),
}

impl Input {
    /// Returns the number of elements, characters, or cells.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Text(text) => text.chars().count(),
            Self::Grid(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    /// Returns true if there is nothing to trace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses `text` into the input `algorithm` expects.
///
/// # Errors
///
/// Returns an `InvalidInput` error describing the first problem found.
pub fn parse(algorithm: Algorithm, text: &str, limits: &InputLimits) -> Result<Input> {
    let parsed = match algorithm {
        Algorithm::Sortedness | Algorithm::Reverse => parse_numbers(text, limits).map(Input::Numbers),
        Algorithm::Palindrome | Algorithm::Brackets => parse_text(text, limits).map(Input::Text),
        Algorithm::Spiral => parse_grid(text, limits).map(Input::Grid),
    };
    parsed.map_err(|e| attach_algorithm(e, algorithm))
}

fn attach_algorithm(err: Error, algorithm: Algorithm) -> Error {
    let context = err
        .context
        .clone()
        .unwrap_or_default()
        .with_algorithm(algorithm.name());
    err.with_context(context)
}

/// Parses integers separated by commas or whitespace.
///
/// # Errors
///
/// Returns an `InvalidInput` error for a token that is not an integer, a
/// value outside the limits, or a count outside the limits.
pub fn parse_numbers(text: &str, limits: &InputLimits) -> Result<Vec<i64>> {
    let values = parse_row(text, limits)?;
    limits.check_len(values.len(), "numbers")?;
    Ok(values)
}

fn parse_row(text: &str, limits: &InputLimits) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| parse_value(position, token, limits))
        .collect()
}

fn parse_value(position: usize, token: &str, limits: &InputLimits) -> Result<i64> {
    let context = ErrorContext::new()
        .with_position(position)
        .with_fragment(token);
    let value: i64 = token.parse().map_err(|_| {
        Error::invalid_input(format!("'{token}' is not an integer")).with_context(context.clone())
    })?;
    if !(limits.min_value..=limits.max_value).contains(&value) {
        return Err(limits.out_of_range(value).with_context(context));
    }
    Ok(value)
}

/// Parses a string, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns an `InvalidInput` error if the character count is outside the
/// limits.
pub fn parse_text(text: &str, limits: &InputLimits) -> Result<String> {
    let text = text.trim();
    limits.check_len(text.chars().count(), "characters")?;
    Ok(text.to_string())
}

/// Parses a grid whose rows are separated by `;` or newlines.
///
/// # Errors
///
/// Returns an `InvalidInput` error for a bad value, an empty or oversized
/// grid, or rows of different lengths.
pub fn parse_grid(text: &str, limits: &InputLimits) -> Result<Vec<Vec<i64>>> {
    let rows: Vec<Vec<i64>> = text
        .split([';', '\n'])
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(index, row)| {
            parse_row(row, limits).map_err(|e| match e.context.clone() {
                Some(ctx) => {
                    let fragment = ctx.fragment.unwrap_or_default();
                    e.with_context(
                        ErrorContext::new()
                            .with_position(index)
                            .with_fragment(fragment),
                    )
                }
                None => e,
            })
        })
        .collect::<Result<_>>()?;

    limits.check_grid(&rows)?;
    Ok(rows)
}
