//! Errors raised by grid construction and cell access.

use std::fmt;

use crate::geom::CellIndex;

/// Errors that can occur when building or addressing a [`TerrainGrid`](crate::TerrainGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A cell index outside `[0, height) × [0, width)`.
    OutOfBounds {
        idx: CellIndex,
        width: i32,
        height: i32,
    },
    /// A grid was requested with a non-positive width or height.
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { idx, width, height } => {
                write!(f, "cell {idx} is outside the {width}x{height} grid")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GridError {}
