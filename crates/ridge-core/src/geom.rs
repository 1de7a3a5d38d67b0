//! Geometry primitive: [`Coord`], a cell position on a square grid.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// An integer cell position. `row` grows down, `col` grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether the coordinate lies in `[0, size) x [0, size)`.
    #[inline]
    pub const fn in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < size && self.col < size
    }

    /// The four axis-aligned neighbours (up, right, down, left).
    ///
    /// No bounds filtering is applied.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
        ]
    }

    /// Straight-line distance between cell centres.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        let dr = f64::from(self.row - other.row);
        let dc = f64::from(self.col - other.col);
        dr.hypot(dc)
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_shape() {
        let json = serde_json::to_string(&Coord::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coord::new(3, 7));
    }
}
