use ridge_core::{Coord, ElevationGrid, GridError};

/// Cost oracle consumed by the search engine.
///
/// Only [`size`](Terrain::size) and [`travel_cost`](Terrain::travel_cost) are
/// required. Override [`is_passable`](Terrain::is_passable) to model blocked
/// cells; the search never discovers an impassable cell.
pub trait Terrain {
    /// Grid dimension N.
    fn size(&self) -> i32;

    /// Cost of moving from `from` to the adjacent cell `to`. Must be >= 0.
    fn travel_cost(&self, from: Coord, to: Coord) -> Result<f64, GridError>;

    /// Whether `c` lies in `[0, N) x [0, N)`.
    fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.size())
    }

    /// Whether the search may enter `c`.
    fn is_passable(&self, _c: Coord) -> bool {
        true
    }

    /// Straight-line estimate used by the heuristic term.
    fn distance(&self, from: Coord, to: Coord) -> f64 {
        from.distance(to)
    }
}

impl Terrain for ElevationGrid {
    fn size(&self) -> i32 {
        ElevationGrid::size(self)
    }

    fn travel_cost(&self, from: Coord, to: Coord) -> Result<f64, GridError> {
        ElevationGrid::travel_cost(self, from, to)
    }

    fn contains(&self, c: Coord) -> bool {
        ElevationGrid::contains(self, c)
    }

    fn distance(&self, from: Coord, to: Coord) -> f64 {
        ElevationGrid::distance(self, from, to)
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn size(&self) -> i32 {
        (**self).size()
    }

    fn travel_cost(&self, from: Coord, to: Coord) -> Result<f64, GridError> {
        (**self).travel_cost(from, to)
    }

    fn contains(&self, c: Coord) -> bool {
        (**self).contains(c)
    }

    fn is_passable(&self, c: Coord) -> bool {
        (**self).is_passable(c)
    }

    fn distance(&self, from: Coord, to: Coord) -> f64 {
        (**self).distance(from, to)
    }
}
