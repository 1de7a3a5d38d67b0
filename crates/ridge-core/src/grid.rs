//! The [`ElevationGrid`] type: an N×N field of integer heights and the
//! travel-cost model defined over it.
//!
//! Moving between two cells costs
//! `(1 + (CLIMB_SCALE * |Δh|) ^ CLIMB_EXPONENT) * distance`, so any climb is
//! penalised super-linearly while flat ground costs exactly the distance
//! travelled.

use crate::error::GridError;
use crate::geom::Coord;

/// Multiplier applied to the absolute height difference before the climb
/// exponent.
pub const CLIMB_SCALE: f64 = 1000.0;

/// Exponent of the climb penalty.
pub const CLIMB_EXPONENT: f64 = 1.5;

// ---------------------------------------------------------------------------
// ElevationGrid
// ---------------------------------------------------------------------------

/// A square grid of integer elevations, stored row-major.
///
/// The dimension is fixed at construction. Height values are not range
/// checked; every coordinate access must lie in `[0, size)` on both axes or
/// it fails with [`GridError::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    size: i32,
    heights: Vec<i32>,
}

impl ElevationGrid {
    /// Create a flat grid of dimension `size` with every height at zero.
    /// Negative sizes yield an empty grid.
    pub fn new(size: i32) -> Self {
        Self::filled(size, 0)
    }

    /// Create a grid of dimension `size` with every cell at `height`.
    pub fn filled(size: i32, height: i32) -> Self {
        let n = size.max(0);
        let len = (n as usize) * (n as usize);
        Self {
            size: n,
            heights: vec![height; len],
        }
    }

    /// Build a grid from a square array of rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let n = rows.len();
        let mut heights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GridError::NotSquare {
                    rows: n,
                    row: i,
                    len: row.len(),
                });
            }
            heights.extend(row);
        }
        Ok(Self {
            size: n as i32,
            heights,
        })
    }

    /// Build a grid from row-major heights whose length is already known to
    /// be `size * size`.
    pub(crate) fn from_raw(size: i32, heights: Vec<i32>) -> Self {
        debug_assert_eq!(heights.len(), (size as usize) * (size as usize));
        Self { size, heights }
    }

    /// Grid dimension N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.size)
    }

    #[inline]
    fn index(&self, c: Coord) -> Result<usize, GridError> {
        if self.contains(c) {
            Ok((c.row as usize) * (self.size as usize) + (c.col as usize))
        } else {
            Err(GridError::OutOfRange {
                coord: c,
                size: self.size,
            })
        }
    }

    /// Height at `c`.
    pub fn height(&self, c: Coord) -> Result<i32, GridError> {
        let i = self.index(c)?;
        Ok(self.heights[i])
    }

    /// Overwrite the height at `c`.
    pub fn set_height(&mut self, c: Coord, height: i32) -> Result<(), GridError> {
        let i = self.index(c)?;
        self.heights[i] = height;
        Ok(())
    }

    /// Set every cell to `height`.
    pub fn fill(&mut self, height: i32) {
        self.heights.fill(height);
    }

    /// Lowest height in the grid, or `None` when empty.
    pub fn min_height(&self) -> Option<i32> {
        self.heights.iter().copied().min()
    }

    /// Highest height in the grid, or `None` when empty.
    pub fn max_height(&self) -> Option<i32> {
        self.heights.iter().copied().max()
    }

    /// Straight-line distance between the centres of `a` and `b`.
    ///
    /// Pure geometry; neither coordinate needs to be inside the grid.
    #[inline]
    pub fn distance(&self, a: Coord, b: Coord) -> f64 {
        a.distance(b)
    }

    /// Cost of travelling from `a` to `b`. Symmetric, never less than
    /// [`distance`](Self::distance), zero when `a == b`.
    pub fn travel_cost(&self, a: Coord, b: Coord) -> Result<f64, GridError> {
        let h0 = i64::from(self.height(a)?);
        let h1 = i64::from(self.height(b)?);
        let climb = (CLIMB_SCALE * (h0 - h1).abs() as f64).powf(CLIMB_EXPONENT);
        Ok((1.0 + climb) * self.distance(a, b))
    }

    /// Sum of [`travel_cost`](Self::travel_cost) over consecutive pairs.
    /// Zero for paths of length 0 or 1.
    pub fn path_cost(&self, path: &[Coord]) -> Result<f64, GridError> {
        path.windows(2)
            .try_fold(0.0, |acc, w| Ok(acc + self.travel_cost(w[0], w[1])?))
    }

    /// Row-major iterator over `(Coord, height)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        let n = self.size.max(1) as usize;
        self.heights
            .iter()
            .enumerate()
            .map(move |(i, &h)| (Coord::new((i / n) as i32, (i % n) as i32), h))
    }

    /// The heights of row `row`, or `None` when out of range.
    pub fn row(&self, row: i32) -> Option<&[i32]> {
        if row < 0 || row >= self.size {
            return None;
        }
        let n = self.size as usize;
        let start = row as usize * n;
        Some(&self.heights[start..start + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: i32) -> ElevationGrid {
        let rows = (0..n).map(|r| (0..n).map(|c| r + c).collect()).collect();
        ElevationGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn new_grid_is_flat() {
        let g = ElevationGrid::new(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.len(), 16);
        assert!(g.iter().all(|(_, h)| h == 0));
    }

    #[test]
    fn negative_size_is_empty() {
        let g = ElevationGrid::new(-3);
        assert_eq!(g.size(), 0);
        assert!(g.is_empty());
        assert_eq!(g.min_height(), None);
    }

    #[test]
    fn height_round_trip_and_bounds() {
        let mut g = ElevationGrid::new(3);
        g.set_height(Coord::new(2, 1), 42).unwrap();
        assert_eq!(g.height(Coord::new(2, 1)), Ok(42));

        let err = g.height(Coord::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                coord: Coord::new(3, 0),
                size: 3
            }
        );
        assert!(g.set_height(Coord::new(0, -1), 1).is_err());
        assert!(g.height(Coord::new(-1, 0)).is_err());
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = ElevationGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            }
        );
    }

    #[test]
    fn travel_cost_on_flat_ground_is_distance() {
        let g = ElevationGrid::filled(5, 7);
        let a = Coord::new(1, 1);
        assert_eq!(g.travel_cost(a, a.shift(0, 1)), Ok(1.0));
        assert_eq!(g.travel_cost(a, a), Ok(0.0));
    }

    #[test]
    fn travel_cost_penalises_climb() {
        let mut g = ElevationGrid::new(3);
        g.set_height(Coord::new(0, 1), 1).unwrap();
        let cost = g.travel_cost(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        let expected = 1.0 + 1000f64.powf(1.5);
        assert!((cost - expected).abs() < 1e-9);

        // Symmetric.
        let back = g.travel_cost(Coord::new(0, 1), Coord::new(0, 0)).unwrap();
        assert_eq!(cost, back);
    }

    #[test]
    fn travel_cost_grows_with_difference() {
        let mut g = ElevationGrid::new(2);
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        let mut last = g.travel_cost(a, b).unwrap();
        for h in 1..6 {
            g.set_height(b, h).unwrap();
            let cost = g.travel_cost(a, b).unwrap();
            assert!(cost > last);
            assert!(cost >= g.distance(a, b));
            last = cost;
        }
    }

    #[test]
    fn travel_cost_out_of_range_fails() {
        let g = ElevationGrid::new(2);
        assert!(g.travel_cost(Coord::new(0, 0), Coord::new(0, 2)).is_err());
    }

    #[test]
    fn path_cost_sums_steps() {
        let g = ramp(3);
        assert_eq!(g.path_cost(&[]), Ok(0.0));
        assert_eq!(g.path_cost(&[Coord::new(1, 1)]), Ok(0.0));

        let path = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)];
        let step = 1.0 + 1000f64.powf(1.5);
        let cost = g.path_cost(&path).unwrap();
        assert!((cost - 2.0 * step).abs() < 1e-6);
    }

    #[test]
    fn iter_and_row_are_row_major() {
        let g = ramp(3);
        let cells: Vec<_> = g.iter().take(4).collect();
        assert_eq!(cells[3], (Coord::new(1, 0), 1));
        assert_eq!(g.row(2), Some(&[2, 3, 4][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.min_height(), Some(0));
        assert_eq!(g.max_height(), Some(4));
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut g = ramp(4);
        g.fill(9);
        assert!(g.iter().all(|(_, h)| h == 9));
    }
}
