//! Reading and writing `.emap` elevation maps.
//!
//! An `.emap` file is plain text: a size `N` followed by `N * N` integer
//! heights, all whitespace separated. Writers put one row per line, but
//! readers do not rely on line breaks.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::EmapError;
use crate::grid::ElevationGrid;

/// Parse an elevation map from text.
pub fn parse_emap(text: &str) -> Result<ElevationGrid, EmapError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));

    let (_, size_token) = tokens.next().ok_or(EmapError::Empty)?;
    let size: i32 = size_token
        .parse()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| EmapError::InvalidSize {
            token: size_token.to_string(),
        })?;

    let n = size as usize;
    let expected = n.checked_mul(n).ok_or_else(|| EmapError::InvalidSize {
        token: size_token.to_string(),
    })?;
    // Grows with the heights actually present, not the declared count.
    let mut heights = Vec::new();
    for (line, token) in tokens {
        let h: i32 = token.parse().map_err(|_| EmapError::InvalidHeight {
            line,
            token: token.to_string(),
        })?;
        heights.push(h);
    }

    if heights.len() != expected {
        return Err(EmapError::HeightCount {
            expected,
            found: heights.len(),
        });
    }
    Ok(ElevationGrid::from_raw(size, heights))
}

/// Read and parse an elevation map file.
pub fn load_emap(path: impl AsRef<Path>) -> Result<ElevationGrid, EmapError> {
    let text = fs::read_to_string(path)?;
    parse_emap(&text)
}

/// Write `grid` in `.emap` layout, one row per line.
pub fn write_emap<W: Write>(grid: &ElevationGrid, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", grid.size())?;
    for r in 0..grid.size() {
        let Some(row) = grid.row(r) else {
            continue;
        };
        for h in row {
            write!(out, "{h} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl FromStr for ElevationGrid {
    type Err = EmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_emap(s)
    }
}
