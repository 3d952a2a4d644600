//! Trace builders for algotrace.
//!
//! Each builder runs its algorithm once over a private copy of the input and
//! records every meaningful transition as a [`Step`](algotrace_foundation::Step):
//! - [`sortedness`] - Adjacent-pair scan with early exit
//! - [`palindrome`] - Recursive end-to-end comparison
//! - [`reverse`] - Recursive in-place swapping
//! - [`spiral`] - Boundary-shrinking matrix walk
//! - [`brackets`] - Stack-based bracket validation
//!
//! [`Algorithm`] names the families and carries their reference listings.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithm;
pub mod brackets;
pub mod listing;
pub mod palindrome;
pub mod reverse;
pub mod sortedness;
pub mod spiral;

mod properties;

pub use algorithm::Algorithm;
pub use brackets::{BracketState, BracketTrace};
pub use listing::Listing;
pub use palindrome::{PalindromeState, PalindromeTrace};
pub use reverse::{ReverseState, ReverseTrace};
pub use sortedness::{SortedState, SortedTrace};
pub use spiral::{Bounds, SpiralState, SpiralTrace};
