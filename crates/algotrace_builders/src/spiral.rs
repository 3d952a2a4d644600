//! Spiral matrix traversal.
//!
//! Walks the outer ring of the grid clockwise, shrinks the boundaries, and
//! repeats until they cross. Every visited cell and every boundary move is a
//! step.

use std::fmt;

use algotrace_foundation::{CodeMarker, Error, Result, StepKind, Trace, TraceRecorder, TraceVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used in errors and log events.
pub const ALGORITHM: &str = "spiral";

const AT_INIT: &[CodeMarker] = &[CodeMarker::line(4)];
const AT_TOP_ROW: &[CodeMarker] = &[CodeMarker::line(6)];
const AT_TOP_MOVE: &[CodeMarker] = &[CodeMarker::line(7)];
const AT_RIGHT_COL: &[CodeMarker] = &[CodeMarker::line(8)];
const AT_RIGHT_MOVE: &[CodeMarker] = &[CodeMarker::line(9)];
const AT_BOTTOM_ROW: &[CodeMarker] = &[CodeMarker::line(11)];
const AT_BOTTOM_MOVE: &[CodeMarker] = &[CodeMarker::line(12)];
const AT_LEFT_COL: &[CodeMarker] = &[CodeMarker::line(15)];
const AT_LEFT_MOVE: &[CodeMarker] = &[CodeMarker::line(16)];
const AT_DONE: &[CodeMarker] = &[CodeMarker::line(19)];

/// The unvisited window of the grid.
///
/// `top` and `left` are inclusive, `bottom` and `right` exclusive, so the
/// window is empty once `top >= bottom` or `left >= right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// First unvisited row.
    pub top: usize,
    /// One past the last unvisited row.
    pub bottom: usize,
    /// First unvisited column.
    pub left: usize,
    /// One past the last unvisited column.
    pub right: usize,
}

impl Bounds {
    /// Returns true once the boundaries have crossed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.top >= self.bottom || self.left >= self.right
    }

    /// Returns true if `(row, col)` is still unvisited.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.top..self.bottom).contains(&row) && (self.left..self.right).contains(&col)
    }
}

/// Snapshot of the walk.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiralState {
    /// The grid, row-major.
    pub grid: TraceVec<TraceVec<i64>>,
    /// The cell just visited, as `(row, col)`.
    pub cell: Option<(usize, usize)>,
    /// The unvisited window.
    pub bounds: Bounds,
    /// Values collected so far, in visiting order.
    pub output: TraceVec<i64>,
}

impl fmt::Display for SpiralState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds;
        match self.cell {
            Some((r, c)) => write!(f, "cell=({r},{c}) ")?,
            None => write!(f, "cell=- ")?,
        }
        write!(
            f,
            "top={} bottom={} left={} right={} out={:?}",
            b.top,
            b.bottom,
            b.left,
            b.right,
            self.output.to_vec()
        )
    }
}

/// A spiral trace; the result is the visiting order.
pub type SpiralTrace = Trace<SpiralState, TraceVec<i64>>;

struct Walk {
    rec: TraceRecorder<SpiralState, TraceVec<i64>>,
    grid: TraceVec<TraceVec<i64>>,
    bounds: Bounds,
    output: TraceVec<i64>,
}

impl Walk {
    fn snapshot(&self, cell: Option<(usize, usize)>) -> SpiralState {
        SpiralState {
            grid: self.grid.clone(),
            cell,
            bounds: self.bounds,
            output: self.output.clone(),
        }
    }

    fn visit(&mut self, row: usize, col: usize, markers: &[CodeMarker], side: &str) {
        let value = self
            .grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default();
        self.output = self.output.push_back(value);
        let state = self.snapshot(Some((row, col)));
        self.rec.record(
            StepKind::Visit,
            markers,
            format!("Visit ({row}, {col}) = {value} on the {side}"),
            state,
        );
    }

    fn moved(&mut self, markers: &[CodeMarker], description: String) {
        let state = self.snapshot(None);
        self.rec.record(StepKind::Boundary, markers, description, state);
    }
}

/// Builds the trace of reading `grid` in clockwise spiral order.
///
/// # Errors
///
/// Returns `InputTooShort` for a grid without rows or columns and
/// `RaggedGrid` when rows differ in length.
pub fn build(grid: &[Vec<i64>]) -> Result<SpiralTrace> {
    let Some(first) = grid.first() else {
        return Err(Error::input_too_short(ALGORITHM, 1, 0));
    };
    let cols = first.len();
    if cols == 0 {
        return Err(Error::input_too_short(ALGORITHM, 1, 0));
    }
    if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(Error::ragged_grid(row, cols, r.len()));
    }

    let mut walk = Walk {
        rec: TraceRecorder::with_capacity(ALGORITHM, 2 * grid.len() * cols + 2),
        grid: grid.iter().map(|r| TraceVec::from(r.as_slice())).collect(),
        bounds: Bounds {
            top: 0,
            bottom: grid.len(),
            left: 0,
            right: cols,
        },
        output: TraceVec::new(),
    };

    let state = walk.snapshot(None);
    walk.rec.record(
        StepKind::Init,
        AT_INIT,
        format!("Read the {}x{cols} grid in spiral order", grid.len()),
        state,
    );

    while !walk.bounds.is_exhausted() {
        let Bounds { top, left, right, .. } = walk.bounds;
        for c in left..right {
            walk.visit(top, c, AT_TOP_ROW, "top row");
        }
        walk.bounds.top += 1;
        walk.moved(AT_TOP_MOVE, format!("Top row done, top = {}", walk.bounds.top));

        let Bounds { top, bottom, right, .. } = walk.bounds;
        for r in top..bottom {
            walk.visit(r, right - 1, AT_RIGHT_COL, "right column");
        }
        walk.bounds.right -= 1;
        walk.moved(
            AT_RIGHT_MOVE,
            format!("Right column done, right = {}", walk.bounds.right),
        );

        let Bounds { top, bottom, left, right } = walk.bounds;
        if top < bottom {
            for c in (left..right).rev() {
                walk.visit(bottom - 1, c, AT_BOTTOM_ROW, "bottom row");
            }
            walk.bounds.bottom -= 1;
            walk.moved(
                AT_BOTTOM_MOVE,
                format!("Bottom row done, bottom = {}", walk.bounds.bottom),
            );
        }

        let Bounds { top, bottom, left, right } = walk.bounds;
        if left < right {
            for r in (top..bottom).rev() {
                walk.visit(r, left, AT_LEFT_COL, "left column");
            }
            walk.bounds.left += 1;
            walk.moved(
                AT_LEFT_MOVE,
                format!("Left column done, left = {}", walk.bounds.left),
            );
        }
    }

    let state = walk.snapshot(None);
    let output = walk.output.clone();
    let trace = walk.rec.finish_with(
        output.clone(),
        StepKind::Complete,
        AT_DONE,
        format!("Boundaries crossed, spiral order is {:?}", output.to_vec()),
        state,
    );
    tracing::debug!(
        algorithm = ALGORITHM,
        rows = grid.len(),
        cols,
        steps = trace.len(),
        "built trace"
    );
    Ok(trace)
}
