//! Shared helpers for the ridge demo binaries.
//!
//! Demonstrates: loading or generating a terrain, running one search, and
//! drawing the result as text.

use rand::{Rng, SeedableRng};
use ridge_core::{Coord, ElevationGrid, GridError};
use ridge_paths::Pathfinder;

/// Generate terraced terrain: every cell starts at zero and each of
/// `plateaus` random rectangles raises the cells it covers by one.
pub fn terraced_terrain(
    size: i32,
    plateaus: usize,
    seed: u64,
) -> Result<ElevationGrid, GridError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut grid = ElevationGrid::new(size);
    if size <= 0 {
        return Ok(grid);
    }
    for _ in 0..plateaus {
        let r0 = rng.random_range(0..size);
        let c0 = rng.random_range(0..size);
        let r1 = (r0 + rng.random_range(1..=size / 3 + 1)).min(size);
        let c1 = (c0 + rng.random_range(1..=size / 3 + 1)).min(size);
        for r in r0..r1 {
            for c in c0..c1 {
                let p = Coord::new(r, c);
                grid.set_height(p, grid.height(p)? + 1)?;
            }
        }
    }
    Ok(grid)
}

/// Parse `"row,col"` into a [`Coord`].
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r
        .trim()
        .parse()
        .map_err(|_| format!("invalid row {r:?}"))?;
    let col = c
        .trim()
        .parse()
        .map_err(|_| format!("invalid column {c:?}"))?;
    Ok(Coord::new(row, col))
}

/// Draw the terrain and the last search as text, one line per row.
///
/// `S`/`E` mark the endpoints, `*` the path, `.` other visited cells, and
/// unvisited cells show their height's last digit.
pub fn render(pf: &Pathfinder<ElevationGrid>) -> String {
    let grid = pf.terrain();
    let n = grid.size();
    let path = pf.path_solution();
    let mut out = String::with_capacity(((n + 1) * n).max(0) as usize);
    for (p, h) in grid.iter() {
        let ch = if Some(p) == pf.start() {
            'S'
        } else if Some(p) == pf.end() {
            'E'
        } else if path.contains(&p) {
            '*'
        } else if pf.was_visited(p) {
            '.'
        } else {
            char::from_digit(h.rem_euclid(10) as u32, 10).unwrap_or('?')
        };
        out.push(ch);
        if p.col == n - 1 {
            out.push('\n');
        }
    }
    out
}
