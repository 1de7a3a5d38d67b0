//! Error types for grid access and elevation-map loading.

use thiserror::Error;

use crate::geom::Coord;

/// Failure when reading, writing or building an [`ElevationGrid`](crate::ElevationGrid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate fell outside `[0, size) x [0, size)`.
    #[error("coordinate {coord} is outside the {size}x{size} grid")]
    OutOfRange { coord: Coord, size: i32 },

    /// Rows handed to [`ElevationGrid::from_rows`](crate::ElevationGrid::from_rows)
    /// did not form a square.
    #[error("row {row} has {len} heights but the grid has {rows} rows")]
    NotSquare { rows: usize, row: usize, len: usize },
}

/// Failure when parsing or reading an `.emap` elevation map.
#[derive(Debug, Error)]
pub enum EmapError {
    /// The input contained no tokens at all.
    #[error("elevation map is empty")]
    Empty,

    /// The leading size token was not a non-negative integer.
    #[error("invalid elevation map size {token:?}")]
    InvalidSize { token: String },

    /// A height token was not an integer.
    #[error("line {line}: invalid height {token:?}")]
    InvalidHeight { line: usize, token: String },

    /// The number of heights did not match `size * size`.
    #[error("elevation map declares {expected} heights but contains {found}")]
    HeightCount { expected: usize, found: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
