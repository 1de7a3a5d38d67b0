//! **ridge-core**: elevation grids and the travel-cost model.
//!
//! This crate provides the foundational types used by the *ridge* route
//! finder: the [`Coord`] cell position, the square [`ElevationGrid`] with its
//! distance and travel-cost functions, and a loader for `.emap` text
//! elevation maps.

pub mod emap;
pub mod error;
pub mod geom;
pub mod grid;

pub use emap::{load_emap, parse_emap, write_emap};
pub use error::{EmapError, GridError};
pub use geom::Coord;
pub use grid::{CLIMB_EXPONENT, CLIMB_SCALE, ElevationGrid};
