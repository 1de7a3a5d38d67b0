//! Replaying a path over time.
//!
//! A [`Walker`] moves along a path one cell at a time. Time is measured in
//! travel-cost units: a step costing `c` takes `c` time to complete, so the
//! walker crawls up slopes and runs along flat ground.

use ridge_core::Coord;

use crate::error::SearchError;
use crate::traits::Terrain;

/// Walks a fixed path, advancing by elapsed time.
#[derive(Debug, Clone)]
pub struct Walker {
    path: Vec<Coord>,
    /// `step_costs[i]` is the cost of moving from `path[i]` to `path[i + 1]`.
    step_costs: Vec<f64>,
    index: usize,
    pending: f64,
    elapsed: f64,
}

impl Walker {
    /// Prepare a walker for `path` over `terrain`.
    pub fn new<T: Terrain>(
        terrain: &T,
        path: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, SearchError> {
        let path: Vec<Coord> = path.into_iter().collect();
        let step_costs = path
            .windows(2)
            .map(|w| terrain.travel_cost(w[0], w[1]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            path,
            step_costs,
            index: 0,
            pending: 0.0,
            elapsed: 0.0,
        })
    }

    /// Current cell, or `None` for an empty path.
    pub fn location(&self) -> Option<Coord> {
        self.path.get(self.index).copied()
    }

    /// Whether the walker stands on the last cell of the path.
    pub fn is_done(&self) -> bool {
        self.index + 1 >= self.path.len()
    }

    /// Spend `by_time` walking. Leftover time carries over to the next call
    /// and is dropped once the walk is done.
    pub fn advance(&mut self, by_time: f64) -> Result<(), SearchError> {
        if !by_time.is_finite() || by_time < 0.0 {
            return Err(SearchError::InvalidTime { time: by_time });
        }
        if self.is_done() {
            return Ok(());
        }

        self.pending += by_time;
        while let Some(&cost) = self.step_costs.get(self.index) {
            if self.pending < cost {
                break;
            }
            self.pending -= cost;
            self.elapsed += cost;
            self.index += 1;
        }
        if self.is_done() {
            self.pending = 0.0;
        }
        Ok(())
    }

    /// Time consumed by completed steps.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time needed to walk the whole path.
    pub fn total_cost(&self) -> f64 {
        self.step_costs.iter().sum()
    }

    /// Number of completed steps.
    pub fn steps_taken(&self) -> usize {
        self.index
    }

    /// The path being walked.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }
}
