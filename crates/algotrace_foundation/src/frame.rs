//! Explicit call-stack frames for recursive traces.
//!
//! Recursive builders keep their own frame list alongside the simulated
//! recursion. The list is what a consumer draws as the call stack, so it
//! lives in the snapshot rather than being inferred from the host stack.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::TraceVec;

/// One recorded argument of a frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arg {
    /// Parameter name.
    pub name: String,
    /// Argument value.
    pub value: i64,
}

/// A single activation record: the function name and its arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    function: String,
    args: Vec<Arg>,
}

impl Frame {
    /// Creates a frame with no arguments.
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            args: Vec::new(),
        }
    }

    /// Builder method to record an argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: i64) -> Self {
        self.args.push(Arg {
            name: name.into(),
            value,
        });
        self
    }

    /// Builder method to record an index argument.
    ///
    /// Indices beyond `i64::MAX` saturate.
    #[must_use]
    pub fn with_index(self, name: impl Into<String>, index: usize) -> Self {
        self.with_arg(name, i64::try_from(index).unwrap_or(i64::MAX))
    }

    /// Returns the function name.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Returns the recorded arguments in declaration order.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Looks up an argument by name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<i64> {
        self.args.iter().find(|a| a.name == name).map(|a| a.value)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<_> = self
            .args
            .iter()
            .map(|a| format!("{}={}", a.name, a.value))
            .collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}

/// A persistent call stack, bottom frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallStack(TraceVec<Frame>);

impl CallStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new stack with `frame` on top.
    #[must_use]
    pub fn push(&self, frame: Frame) -> Self {
        Self(self.0.push_back(frame))
    }

    /// Returns a new stack without its top frame, plus that frame.
    ///
    /// Returns `None` if the stack is empty.
    #[must_use]
    pub fn pop(&self) -> Option<(Self, Frame)> {
        self.0.pop_back().map(|(rest, top)| (Self(rest), top))
    }

    /// Returns a new stack without its top frame.
    ///
    /// An empty stack stays empty.
    #[must_use]
    pub fn without_top(&self) -> Self {
        self.pop().map_or_else(|| self.clone(), |(rest, _)| rest)
    }

    /// Returns the number of active frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no frame is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates frames from the outermost call inward.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.0.iter()
    }
}

impl fmt::Display for CallStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty>");
        }
        let frames: Vec<_> = self.frames().map(ToString::to_string).collect();
        write!(f, "{}", frames.join(" > "))
    }
}
