//! Per-search table of discovery records.
//!
//! The [`Board`] is a flat arena with one optional [`SearchNode`] per cell.
//! A node's predecessor is the arena index of the node that discovered it,
//! and a slot, once filled, is never overwritten. Predecessors therefore
//! always point at strictly earlier discoveries and every chain ends at the
//! start node.

use ridge_core::Coord;

/// Discovery record for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub pos: Coord,
    /// Board slot of the node that discovered this one (`None` for the start).
    pub predecessor: Option<usize>,
    /// Accumulated travel cost from the start.
    pub cost_so_far: f64,
}

/// N×N slot array of optional [`SearchNode`]s, allocated fresh per search.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    slots: Vec<Option<SearchNode>>,
    discovered: usize,
}

impl Board {
    /// Allocate an empty board for a grid of dimension `size`.
    pub fn new(size: i32) -> Self {
        let n = size.max(0) as usize;
        Self {
            size: size.max(0),
            slots: vec![None; n * n],
            discovered: 0,
        }
    }

    /// Grid dimension N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Slot index of `c`, or `None` when out of range.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !c.in_bounds(self.size) {
            return None;
        }
        Some((c.row as usize) * (self.size as usize) + (c.col as usize))
    }

    /// Whether `c` has a record in this search.
    pub fn is_discovered(&self, c: Coord) -> bool {
        self.get(c).is_some()
    }

    /// The record at `c`, if discovered.
    pub fn get(&self, c: Coord) -> Option<&SearchNode> {
        self.index(c).and_then(|i| self.node(i))
    }

    /// The record in slot `idx`, if any.
    pub fn node(&self, idx: usize) -> Option<&SearchNode> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Record the first discovery of `pos`.
    ///
    /// Returns the new node's slot, or `None` when `pos` is out of range or
    /// already discovered, or when `predecessor` names a slot with no record.
    /// Existing records are never replaced.
    pub fn discover(
        &mut self,
        pos: Coord,
        predecessor: Option<usize>,
        cost_so_far: f64,
    ) -> Option<usize> {
        let idx = self.index(pos)?;
        // The new slot is still empty here, so this also rules out self links.
        if predecessor.is_some_and(|p| self.node(p).is_none()) {
            return None;
        }
        let slot = &mut self.slots[idx];
        if slot.is_some() {
            return None;
        }
        *slot = Some(SearchNode {
            pos,
            predecessor,
            cost_so_far,
        });
        self.discovered += 1;
        Some(idx)
    }

    /// Number of discovered cells.
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Coordinates from the root of `idx`'s predecessor chain to `idx`.
    ///
    /// Empty when `idx` holds no record.
    pub fn trace_path(&self, idx: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cur = self.node(idx);
        while let Some(node) = cur {
            path.push(node.pos);
            cur = node.predecessor.and_then(|p| self.node(p));
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_is_visit_once() {
        let mut b = Board::new(3);
        let c = Coord::new(1, 2);
        assert!(!b.is_discovered(c));

        let idx = b.discover(c, None, 4.0).unwrap();
        assert_eq!(b.index(c), Some(idx));
        assert!(b.is_discovered(c));

        // A cheaper second discovery is ignored.
        assert_eq!(b.discover(c, None, 1.0), None);
        assert_eq!(b.get(c).unwrap().cost_so_far, 4.0);
        assert_eq!(b.discovered(), 1);
    }

    #[test]
    fn out_of_range_is_never_discovered() {
        let mut b = Board::new(2);
        assert_eq!(b.discover(Coord::new(2, 0), None, 0.0), None);
        assert_eq!(b.discover(Coord::new(0, -1), None, 0.0), None);
        assert!(!b.is_discovered(Coord::new(5, 5)));
        assert_eq!(b.discovered(), 0);
    }

    #[test]
    fn predecessor_must_be_discovered() {
        let mut b = Board::new(3);
        let c = Coord::new(1, 1);
        let own = b.index(c).unwrap();
        assert_eq!(b.discover(c, Some(own), 0.0), None, "self link");
        assert_eq!(b.discover(c, Some(0), 0.0), None, "empty slot");
        assert_eq!(b.discover(c, Some(100), 0.0), None, "no such slot");
        assert!(!b.is_discovered(c));
        assert_eq!(b.discovered(), 0);

        let s = b.discover(Coord::new(0, 0), None, 0.0).unwrap();
        let idx = b.discover(c, Some(s), 2.0).unwrap();
        assert_eq!(b.trace_path(idx), vec![Coord::new(0, 0), c]);
    }

    #[test]
    fn trace_path_follows_predecessors() {
        let mut b = Board::new(3);
        let s = b.discover(Coord::new(0, 0), None, 0.0).unwrap();
        let m = b.discover(Coord::new(0, 1), Some(s), 1.0).unwrap();
        let e = b.discover(Coord::new(1, 1), Some(m), 2.0).unwrap();
        // An unrelated branch does not leak into the trace.
        b.discover(Coord::new(1, 0), Some(s), 1.0).unwrap();

        assert_eq!(
            b.trace_path(e),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert_eq!(b.trace_path(s), vec![Coord::new(0, 0)]);
        assert!(b.trace_path(b.index(Coord::new(2, 2)).unwrap()).is_empty());
    }
}
