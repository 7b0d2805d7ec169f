use std::fmt;

use crate::geom::{Point, Range};

/// Errors raised when building or addressing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero (or negative).
    DegenerateGrid { width: i32, height: i32 },
    /// A point lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// A cost buffer or map row does not match the declared dimensions.
    SizeMismatch { expected: usize, got: usize },
    /// A map string contains a character with no terrain meaning.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGrid { width, height } => {
                write!(f, "grid: degenerate size {width}x{height}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: point {pos} outside {bounds}")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "grid: expected {expected} cells, got {got}")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
