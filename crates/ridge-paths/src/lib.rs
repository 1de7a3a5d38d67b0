//! Best-first route search over elevation grids.
//!
//! The [`Pathfinder`] finds a low-cost 4-connected route between two cells of
//! a [`Terrain`], where climbing is penalised super-linearly by the terrain's
//! travel cost. Each search builds a fresh [`Board`] of discovery records and
//! a [`Frontier`] ordered by
//! `cost_so_far + heuristic_weight * distance_to_end`.
//!
//! A [`Walker`] replays a found path, taking as long over each step as the
//! step costs.
//!
//! # Example
//!
//! ```
//! use ridge_core::{Coord, ElevationGrid};
//! use ridge_paths::{Pathfinder, SearchState};
//!
//! let mut pf = Pathfinder::new(ElevationGrid::new(5));
//! pf.set_start(Coord::new(0, 0))?;
//! pf.set_end(Coord::new(4, 4))?;
//! assert_eq!(pf.compute_path()?, SearchState::Found);
//! assert_eq!(pf.path_cost(), 8.0);
//! assert_eq!(pf.path_solution().len(), 9);
//! # Ok::<(), ridge_paths::SearchError>(())
//! ```

mod board;
mod error;
mod frontier;
mod pathfinder;
mod traits;
mod walker;

pub use board::{Board, SearchNode};
pub use error::{Endpoint, SearchError};
pub use frontier::Frontier;
pub use pathfinder::{Pathfinder, PathfinderConfig, SearchResult, SearchState};
pub use traits::Terrain;
pub use walker::Walker;
