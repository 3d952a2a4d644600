//! Reference code listings.
//!
//! Each algorithm ships the code a consumer displays next to the animation.
//! Step markers point into these listings by `(listing, line)`; the tracer
//! never interprets them.

use algotrace_foundation::CodeMarker;

/// A reference listing: a title and its source lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Short title shown above the listing.
    pub title: &'static str,
    /// Source lines, without trailing newlines.
    pub lines: &'static [&'static str],
}

impl Listing {
    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the listing has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a 1-based line.
    #[must_use]
    pub fn line(&self, number: u32) -> Option<&'static str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.lines.get(index).copied()
    }
}

/// Resolves a marker against a set of listings.
#[must_use]
pub fn resolve(listings: &[Listing], marker: CodeMarker) -> Option<&'static str> {
    listings.get(marker.listing)?.line(marker.line)
}

pub(crate) const SORTEDNESS: &[Listing] = &[Listing {
    title: "is_sorted",
    lines: &[
        "fn is_sorted(arr: &[i64]) -> bool {",
        "    for i in 0..arr.len() - 1 {",
        "        if arr[i] > arr[i + 1] {",
        "            return false;",
        "        }",
        "    }",
        "    true",
        "}",
    ],
}];

pub(crate) const PALINDROME: &[Listing] = &[
    Listing {
        title: "is_palindrome",
        lines: &[
            "fn is_palindrome(s: &[char], left: usize, right: usize) -> bool {",
            "    if left >= right {",
            "        return true;",
            "    }",
            "    if s[left] != s[right] {",
            "        return false;",
            "    }",
            "    is_palindrome(s, left + 1, right - 1)",
            "}",
        ],
    },
    Listing {
        title: "main",
        lines: &[
            "fn main() {",
            "    let s: Vec<char> = input.chars().collect();",
            "    let result = is_palindrome(&s, 0, s.len() - 1);",
            "    println!(\"{result}\");",
            "}",
        ],
    },
];

pub(crate) const REVERSE: &[Listing] = &[
    Listing {
        title: "reverse",
        lines: &[
            "fn reverse(arr: &mut [i64], start: usize, last: usize) {",
            "    if start >= last {",
            "        return;",
            "    }",
            "    arr.swap(start, last);",
            "    reverse(arr, start + 1, last - 1);",
            "}",
        ],
    },
    Listing {
        title: "main",
        lines: &[
            "fn main() {",
            "    let mut arr = input.clone();",
            "    reverse(&mut arr, 0, arr.len() - 1);",
            "    println!(\"{arr:?}\");",
            "}",
        ],
    },
];

pub(crate) const SPIRAL: &[Listing] = &[Listing {
    title: "spiral",
    lines: &[
        "fn spiral(m: &[Vec<i64>]) -> Vec<i64> {",
        "    let (mut top, mut bottom) = (0, m.len());",
        "    let (mut left, mut right) = (0, m[0].len());",
        "    let mut out = Vec::new();",
        "    while top < bottom && left < right {",
        "        for c in left..right { out.push(m[top][c]); }",
        "        top += 1;",
        "        for r in top..bottom { out.push(m[r][right - 1]); }",
        "        right -= 1;",
        "        if top < bottom {",
        "            for c in (left..right).rev() { out.push(m[bottom - 1][c]); }",
        "            bottom -= 1;",
        "        }",
        "        if left < right {",
        "            for r in (top..bottom).rev() { out.push(m[r][left]); }",
        "            left += 1;",
        "        }",
        "    }",
        "    out",
        "}",
    ],
}];

pub(crate) const BRACKETS: &[Listing] = &[Listing {
    title: "is_valid",
    lines: &[
        "fn is_valid(s: &str) -> bool {",
        "    let pairs = [(')', '('), (']', '['), ('}', '{')];",
        "    let mut stack = Vec::new();",
        "    for c in s.chars() {",
        "        if matches!(c, '(' | '[' | '{') {",
        "            stack.push(c);",
        "        } else if let Some(&(_, open)) = pairs.iter().find(|(close, _)| *close == c) {",
        "            if stack.pop() != Some(open) {",
        "                return false;",
        "            }",
        "        }",
        "    }",
        "    stack.is_empty()",
        "}",
    ],
}];
