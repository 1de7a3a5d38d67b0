//! Typed search errors.
//!
//! Validation failures are returned synchronously from the call that broke
//! the contract. Running out of frontier during a search is not an error at
//! the [`Pathfinder`](crate::Pathfinder) level: it ends in the
//! [`SearchState::NoPathFound`] terminal state.

use std::fmt;

use ridge_core::{Coord, GridError};
use thiserror::Error;

use crate::pathfinder::SearchState;

/// Which endpoint a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Failure raised by the search engine, its frontier, or a walker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// An endpoint coordinate was absent.
    #[error("{endpoint} coordinate is missing")]
    NullInput { endpoint: Endpoint },

    /// An endpoint lies outside `[0, size) x [0, size)`.
    #[error("coordinate {coord} is outside the {size}x{size} grid")]
    OutOfRange { coord: Coord, size: i32 },

    /// `compute_path` was called when the engine was not `Ready`.
    #[error("cannot compute a path in state {state}")]
    InvalidState { state: SearchState },

    /// Heuristic weights must be finite and non-negative.
    #[error("heuristic weight {weight} must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    /// Walker time steps must be finite and non-negative.
    #[error("time step {time} must be finite and non-negative")]
    InvalidTime { time: f64 },

    /// `extract_min` was called on an empty frontier.
    #[error("frontier is empty")]
    EmptyFrontier,

    /// The terrain rejected a cost query.
    #[error(transparent)]
    Grid(#[from] GridError),
}
