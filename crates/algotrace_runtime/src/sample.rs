//! Seeded sample inputs.
//!
//! Reproducibility: the same seed always yields the same inputs, so a
//! sample shown once can be rebuilt exactly later.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use algotrace_builders::Algorithm;
use algotrace_foundation::Result;

use crate::input::{Input, InputLimits};

const VALUE_RANGE: std::ops::RangeInclusive<i64> = -99..=99;
const LETTERS: &[u8] = b"abcdr";
const BRACKETS: &[u8] = b"()[]{}";

/// Deterministic generator of sample inputs.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    /// Creates a sampler from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Random integers.
    pub fn numbers(&mut self, len: usize) -> Vec<i64> {
        (0..len).map(|_| self.rng.gen_range(VALUE_RANGE)).collect()
    }

    /// Integers in ascending order.
    pub fn sorted_numbers(&mut self, len: usize) -> Vec<i64> {
        let mut values = self.numbers(len);
        values.sort_unstable();
        values
    }

    /// A palindrome of `len` characters.
    pub fn palindrome(&mut self, len: usize) -> String {
        let half: Vec<char> = (0..len.div_ceil(2))
            .map(|_| char::from(LETTERS[self.rng.gen_range(0..LETTERS.len())]))
            .collect();
        let mirror = half.iter().rev().skip(len % 2);
        half.iter().chain(mirror).collect()
    }

    /// A random word, usually not a palindrome.
    pub fn word(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(LETTERS[self.rng.gen_range(0..LETTERS.len())]))
            .collect()
    }

    /// Random brackets; about half of all samples are balanced.
    pub fn brackets(&mut self, len: usize) -> String {
        if self.rng.gen_bool(0.5) {
            return self.balanced(len);
        }
        (0..len)
            .map(|_| char::from(BRACKETS[self.rng.gen_range(0..BRACKETS.len())]))
            .collect()
    }

    fn balanced(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        let mut open: Vec<char> = Vec::new();
        let pairs = len / 2;
        let mut opened = 0;
        while out.len() < pairs * 2 {
            let can_open = opened < pairs;
            if can_open && (open.is_empty() || self.rng.gen_bool(0.5)) {
                let i = self.rng.gen_range(0..3) * 2;
                let c = char::from(BRACKETS[i]);
                out.push(c);
                open.push(char::from(BRACKETS[i + 1]));
                opened += 1;
            } else if let Some(close) = open.pop() {
                out.push(close);
            }
        }
        out
    }

    /// A grid holding `1..=rows * cols` in row-major order.
    #[must_use]
    pub fn sequential_grid(rows: usize, cols: usize) -> Vec<Vec<i64>> {
        (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| i64::try_from(r * cols + c + 1).unwrap_or(i64::MAX))
                    .collect()
            })
            .collect()
    }

    /// A sample input of roughly `size` elements for `algorithm`.
    ///
    /// Sizes below the builder's minimum are raised to it.
    pub fn sample(&mut self, algorithm: Algorithm, size: usize) -> Input {
        match algorithm {
            Algorithm::Sortedness => {
                let len = size.max(2);
                if self.rng.gen_bool(0.5) {
                    Input::Numbers(self.sorted_numbers(len))
                } else {
                    Input::Numbers(self.numbers(len))
                }
            }
            Algorithm::Reverse => Input::Numbers(self.numbers(size.max(1))),
            Algorithm::Palindrome => {
                let len = size.max(1);
                if self.rng.gen_bool(0.5) {
                    Input::Text(self.palindrome(len))
                } else {
                    Input::Text(self.word(len))
                }
            }
            Algorithm::Brackets => Input::Text(self.brackets(size.max(2))),
            Algorithm::Spiral => {
                let side = size.max(1);
                Input::Grid(Self::sequential_grid(side, side))
            }
        }
    }

    /// A sample whose size is first capped by `limits`, checked against
    /// the same limits typed input must meet.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if the sample still falls outside
    /// `limits`, for example when they demand more than the builder minimum.
    pub fn sample_within(
        &mut self,
        algorithm: Algorithm,
        size: usize,
        limits: &InputLimits,
    ) -> Result<Input> {
        let input = self.sample(algorithm, limits.clamp_size(algorithm, size));
        limits.check(&input)?;
        Ok(input)
    }
}
