//! Engine entry-point errors and input validation.

use std::fmt;

use gridtrace_core::{Coord, GridDims};

/// Errors rejected at an engine entry point before any traversal begins.
///
/// An unreachable goal is *not* an error: the trace simply ends without a
/// path-bearing snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Grid dimensions with a non-positive extent.
    InvalidDims(GridDims),
    /// Start or goal coordinate outside the grid.
    OutOfBounds {
        /// `"start"` or `"goal"`.
        role: &'static str,
        coord: Coord,
        dims: GridDims,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDims(dims) => {
                write!(f, "invalid grid dimensions {dims}: both extents must be positive")
            }
            Self::OutOfBounds { role, coord, dims } => {
                write!(f, "{role} coordinate {coord} is outside the {dims} grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Validate dimensions and endpoints before a search starts.
pub(crate) fn validate(dims: GridDims, start: Coord, goal: Coord) -> Result<(), SearchError> {
    if !dims.is_valid() {
        return Err(SearchError::InvalidDims(dims));
    }
    if !dims.contains(start) {
        return Err(SearchError::OutOfBounds {
            role: "start",
            coord: start,
            dims,
        });
    }
    if !dims.contains(goal) {
        return Err(SearchError::OutOfBounds {
            role: "goal",
            coord: goal,
            dims,
        });
    }
    Ok(())
}
