//! The best-first search engine.
//!
//! A [`Pathfinder`] carries configuration between searches: the terrain, the
//! two endpoints and the heuristic weight. Every [`compute_path`] call builds
//! its own [`Board`] and [`Frontier`], so results from different
//! configurations never mix.
//!
//! Frontier priority is `cost_so_far + heuristic_weight * distance(pos, end)`.
//! Each cell is discovered at most once per search and its record is never
//! revised, which bounds the work at N² expansions. A weight of zero gives a
//! uniform-cost search; positive weights trade path quality for fewer
//! expansions, since straight-line distance does not account for the climb
//! penalty.
//!
//! [`compute_path`]: Pathfinder::compute_path

use std::fmt;

use log::{debug, trace};
use ridge_core::{Coord, ElevationGrid};

use crate::board::Board;
use crate::error::{Endpoint, SearchError};
use crate::frontier::Frontier;
use crate::traits::Terrain;

// ---------------------------------------------------------------------------
// State, configuration and result types
// ---------------------------------------------------------------------------

/// Lifecycle of a [`Pathfinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Start or end (or both) not set.
    Unconfigured,
    /// Both endpoints set; no result held.
    Ready,
    /// A search is running. Only visible inside `compute_path`.
    Searching,
    /// The last search reached the end cell.
    Found,
    /// The last search exhausted its frontier.
    NoPathFound,
}

impl SearchState {
    /// Whether this state ends a search.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::NoPathFound)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unconfigured => "unconfigured",
            Self::Ready => "ready",
            Self::Searching => "searching",
            Self::Found => "found",
            Self::NoPathFound => "no path found",
        })
    }
}

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PathfinderConfig {
    /// Multiplier on the straight-line distance to the end cell. Zero gives
    /// uniform-cost search.
    pub heuristic_weight: f64,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            heuristic_weight: 0.0,
        }
    }
}

impl PathfinderConfig {
    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_weight(self.heuristic_weight)
    }
}

fn check_weight(weight: f64) -> Result<(), SearchError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(SearchError::InvalidWeight { weight })
    }
}

/// Outcome of one completed search. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    /// Accumulated travel cost of `path` (0 when not found).
    pub total_cost: f64,
    /// Nodes taken off the frontier, including the end node.
    pub nodes_expanded: usize,
    /// Board records created, including the start node.
    pub nodes_discovered: usize,
    /// Peak frontier size.
    pub frontier_high_water: usize,
    /// Start-to-end cells; empty when not found.
    pub path: Vec<Coord>,
}

/// A finished search: its result plus the board used for `was_visited`.
#[derive(Debug, Clone)]
struct Outcome {
    result: SearchResult,
    board: Board,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Best-first route finder over a [`Terrain`].
#[derive(Debug)]
pub struct Pathfinder<T: Terrain = ElevationGrid> {
    terrain: T,
    start: Option<Coord>,
    end: Option<Coord>,
    config: PathfinderConfig,
    state: SearchState,
    outcome: Option<Outcome>,
}

impl<T: Terrain> Pathfinder<T> {
    /// Create a pathfinder with the default configuration.
    pub fn new(terrain: T) -> Self {
        Self {
            terrain,
            start: None,
            end: None,
            config: PathfinderConfig::default(),
            state: SearchState::Unconfigured,
            outcome: None,
        }
    }

    /// Create a pathfinder with a validated configuration.
    pub fn with_config(terrain: T, config: PathfinderConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let mut pf = Self::new(terrain);
        pf.config = config;
        Ok(pf)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Set the start cell. Invalidates any previous result.
    ///
    /// On error the previously configured start is kept.
    pub fn set_start(&mut self, c: impl Into<Option<Coord>>) -> Result<(), SearchError> {
        let c = self.check_endpoint(c.into(), Endpoint::Start)?;
        self.start = Some(c);
        self.invalidate();
        Ok(())
    }

    /// Set the end cell. Invalidates any previous result.
    ///
    /// On error the previously configured end is kept.
    pub fn set_end(&mut self, c: impl Into<Option<Coord>>) -> Result<(), SearchError> {
        let c = self.check_endpoint(c.into(), Endpoint::End)?;
        self.end = Some(c);
        self.invalidate();
        Ok(())
    }

    fn check_endpoint(&self, c: Option<Coord>, endpoint: Endpoint) -> Result<Coord, SearchError> {
        let c = c.ok_or(SearchError::NullInput { endpoint })?;
        if !self.terrain.contains(c) {
            return Err(SearchError::OutOfRange {
                coord: c,
                size: self.terrain.size(),
            });
        }
        Ok(c)
    }

    /// Configured start cell.
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// Configured end cell.
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Set the heuristic weight. Invalidates any previous result.
    pub fn set_heuristic_weight(&mut self, weight: f64) -> Result<(), SearchError> {
        check_weight(weight)?;
        self.config.heuristic_weight = weight;
        self.invalidate();
        Ok(())
    }

    /// Current heuristic weight.
    pub fn heuristic_weight(&self) -> f64 {
        self.config.heuristic_weight
    }

    /// Current configuration.
    pub fn config(&self) -> PathfinderConfig {
        self.config
    }

    /// Shared access to the terrain.
    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    /// Mutable access to the terrain, e.g. for editing heights between
    /// searches. Invalidates any previous result.
    pub fn terrain_mut(&mut self) -> &mut T {
        self.invalidate();
        &mut self.terrain
    }

    /// Consume the pathfinder and hand back its terrain.
    pub fn into_terrain(self) -> T {
        self.terrain
    }

    /// Discard any result and return to `Ready` (or `Unconfigured` when an
    /// endpoint is missing).
    pub fn reset_search(&mut self) {
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.outcome = None;
        let next = if self.start.is_some() && self.end.is_some() {
            SearchState::Ready
        } else {
            SearchState::Unconfigured
        };
        if next != self.state {
            debug!("pathfinder state {} -> {}", self.state, next);
        }
        self.state = next;
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Run a search to completion.
    ///
    /// Requires state `Ready`; any other state fails with
    /// [`SearchError::InvalidState`]. Returns the terminal state reached.
    /// On error no result is recorded and the state is unchanged.
    pub fn compute_path(&mut self) -> Result<SearchState, SearchError> {
        let (start, end) = match (self.state, self.start, self.end) {
            (SearchState::Ready, Some(start), Some(end)) => (start, end),
            _ => return Err(SearchError::InvalidState { state: self.state }),
        };

        debug!(
            "searching {} -> {} on {n}x{n} terrain (heuristic weight {})",
            start,
            end,
            self.config.heuristic_weight,
            n = self.terrain.size()
        );

        let outcome = SearchRun::new(&self.terrain, end, self.config.heuristic_weight).run(start)?;
        self.state = if outcome.result.found {
            SearchState::Found
        } else {
            SearchState::NoPathFound
        };
        debug!(
            "search {}: cost {}, {} expanded, {} discovered, path length {}",
            self.state,
            outcome.result.total_cost,
            outcome.result.nodes_expanded,
            outcome.result.nodes_discovered,
            outcome.result.path.len()
        );
        self.outcome = Some(outcome);
        Ok(self.state)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current lifecycle state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The last completed search, if any.
    pub fn result(&self) -> Option<&SearchResult> {
        self.outcome.as_ref().map(|o| &o.result)
    }

    /// Whether the last search reached the end cell.
    pub fn found_path(&self) -> bool {
        self.state == SearchState::Found
    }

    /// Travel cost of the found path, or 0.
    pub fn path_cost(&self) -> f64 {
        self.result().map_or(0.0, |r| r.total_cost)
    }

    /// Nodes expanded by the last search, or 0.
    pub fn nodes_expanded(&self) -> usize {
        self.result().map_or(0, |r| r.nodes_expanded)
    }

    /// Cells of the found path from start to end; empty when none.
    pub fn path_solution(&self) -> &[Coord] {
        self.result()
            .map(|r| r.path.as_slice())
            .unwrap_or_default()
    }

    /// Whether `c` was discovered by the last search.
    pub fn was_visited(&self, c: Coord) -> bool {
        self.outcome
            .as_ref()
            .is_some_and(|o| o.board.is_discovered(c))
    }
}

// ---------------------------------------------------------------------------
// SearchRun: per-call search context
// ---------------------------------------------------------------------------

struct SearchRun<'t, T: Terrain> {
    terrain: &'t T,
    goal: Coord,
    weight: f64,
    board: Board,
    frontier: Frontier<usize>,
    state: SearchState,
    expanded: usize,
}

impl<'t, T: Terrain> SearchRun<'t, T> {
    fn new(terrain: &'t T, goal: Coord, weight: f64) -> Self {
        Self {
            terrain,
            goal,
            weight,
            board: Board::new(terrain.size()),
            frontier: Frontier::new(),
            state: SearchState::Searching,
            expanded: 0,
        }
    }

    #[inline]
    fn priority(&self, pos: Coord, cost_so_far: f64) -> f64 {
        cost_so_far + self.weight * self.terrain.distance(pos, self.goal)
    }

    fn run(mut self, start: Coord) -> Result<Outcome, SearchError> {
        let root = self
            .board
            .discover(start, None, 0.0)
            .ok_or(SearchError::OutOfRange {
                coord: start,
                size: self.board.size(),
            })?;
        self.frontier.insert(root, self.priority(start, 0.0));

        let mut goal_slot = None;
        while self.state == SearchState::Searching {
            let Ok(slot) = self.frontier.extract_min() else {
                self.state = SearchState::NoPathFound;
                break;
            };
            let Some(node) = self.board.node(slot) else {
                continue;
            };
            let (pos, cost) = (node.pos, node.cost_so_far);
            self.expanded += 1;
            trace!("expand {pos} at cost {cost}");

            if pos == self.goal {
                goal_slot = Some(slot);
                self.state = SearchState::Found;
            } else {
                self.expand(slot, pos, cost)?;
            }
        }

        let result = match goal_slot {
            Some(slot) => SearchResult {
                found: true,
                total_cost: self.board.node(slot).map_or(0.0, |n| n.cost_so_far),
                nodes_expanded: self.expanded,
                nodes_discovered: self.board.discovered(),
                frontier_high_water: self.frontier.high_water(),
                path: self.board.trace_path(slot),
            },
            None => SearchResult {
                found: false,
                nodes_expanded: self.expanded,
                nodes_discovered: self.board.discovered(),
                frontier_high_water: self.frontier.high_water(),
                ..SearchResult::default()
            },
        };
        Ok(Outcome {
            result,
            board: self.board,
        })
    }

    /// Discover every in-range, passable, not-yet-discovered neighbour.
    fn expand(&mut self, slot: usize, pos: Coord, cost: f64) -> Result<(), SearchError> {
        for next in pos.neighbors_4() {
            if !self.terrain.contains(next)
                || !self.terrain.is_passable(next)
                || self.board.is_discovered(next)
            {
                continue;
            }
            let next_cost = cost + self.terrain.travel_cost(pos, next)?;
            if let Some(idx) = self.board.discover(next, Some(slot), next_cost) {
                let priority = self.priority(next, next_cost);
                self.frontier.insert(idx, priority);
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_defaults_missing_fields() {
        let config: PathfinderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PathfinderConfig::default());
        let config: PathfinderConfig =
            serde_json::from_str(r#"{"heuristic_weight":2.0}"#).unwrap();
        assert_eq!(config.heuristic_weight, 2.0);
    }

    #[test]
    fn result_round_trip() {
        let mut pf = Pathfinder::new(ElevationGrid::new(3));
        pf.set_start(Coord::new(0, 0)).unwrap();
        pf.set_end(Coord::new(2, 1)).unwrap();
        pf.compute_path().unwrap();

        let result = pf.result().unwrap();
        let json = serde_json::to_string(result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, result);
    }

    #[test]
    fn state_serializes_by_name() {
        let json = serde_json::to_string(&SearchState::NoPathFound).unwrap();
        assert_eq!(json, r#""NoPathFound""#);
    }
}
