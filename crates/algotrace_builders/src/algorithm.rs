//! The registry of traceable algorithms.

use std::fmt;
use std::str::FromStr;

use algotrace_foundation::{CodeMarker, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::listing::{self, Listing};

/// One of the five algorithm families a trace can be built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Adjacent-pair sortedness check.
    Sortedness,
    /// Recursive palindrome check.
    Palindrome,
    /// Recursive in-place array reversal.
    Reverse,
    /// Spiral matrix traversal.
    Spiral,
    /// Bracket validation with an explicit stack.
    Brackets,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Sortedness,
        Self::Palindrome,
        Self::Reverse,
        Self::Spiral,
        Self::Brackets,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sortedness => crate::sortedness::ALGORITHM,
            Self::Palindrome => crate::palindrome::ALGORITHM,
            Self::Reverse => crate::reverse::ALGORITHM,
            Self::Spiral => crate::spiral::ALGORITHM,
            Self::Brackets => crate::brackets::ALGORITHM,
        }
    }

    /// Returns a one-line summary.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Sortedness => "Check that an array is in ascending order",
            Self::Palindrome => "Check recursively that a string reads the same both ways",
            Self::Reverse => "Reverse an array in place by recursive swapping",
            Self::Spiral => "Read a matrix in clockwise spiral order",
            Self::Brackets => "Check that brackets are balanced using a stack",
        }
    }

    /// Returns the reference listings markers point into.
    #[must_use]
    pub fn listings(self) -> &'static [Listing] {
        match self {
            Self::Sortedness => listing::SORTEDNESS,
            Self::Palindrome => listing::PALINDROME,
            Self::Reverse => listing::REVERSE,
            Self::Spiral => listing::SPIRAL,
            Self::Brackets => listing::BRACKETS,
        }
    }

    /// Resolves a marker emitted by this algorithm's builder.
    #[must_use]
    pub fn source_line(self, marker: CodeMarker) -> Option<&'static str> {
        listing::resolve(self.listings(), marker)
    }

    /// Returns true if the builder simulates recursion with call frames.
    #[must_use]
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::Palindrome | Self::Reverse)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" | "sortedness" | "is-sorted" => Ok(Self::Sortedness),
            "palindrome" => Ok(Self::Palindrome),
            "reverse" => Ok(Self::Reverse),
            "spiral" => Ok(Self::Spiral),
            "brackets" | "parentheses" | "parens" => Ok(Self::Brackets),
            _ => Err(Error::unknown_algorithm(s)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_foundation::ErrorKind;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("sorted".parse::<Algorithm>().unwrap(), Algorithm::Sortedness);
        assert_eq!(" Spiral ".parse::<Algorithm>().unwrap(), Algorithm::Spiral);
        assert_eq!("parens".parse::<Algorithm>().unwrap(), Algorithm::Brackets);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "bubble".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownAlgorithm(ref name) if name == "bubble"));
    }

    #[test]
    fn every_algorithm_has_a_listing() {
        for algorithm in Algorithm::ALL {
            assert!(!algorithm.listings().is_empty());
            assert!(algorithm.listings().iter().all(|l| !l.is_empty()));
        }
    }

    #[test]
    fn recursion_flag() {
        assert!(Algorithm::Palindrome.is_recursive());
        assert!(!Algorithm::Spiral.is_recursive());
    }
}
