//! `Position`: a `(row, col)` cell address on a square grid.

use serde::Serialize;

/// Neighbour offsets in expansion order: up, left, right, down.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// A cell address. Equality is component-wise; ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies inside an `dimension × dimension` grid.
    #[must_use]
    pub const fn in_bounds(self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// Offset by `(dr, dc)`, returning `None` if the result leaves the grid.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, dimension: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let moved = Self { row, col };
        moved.in_bounds(dimension).then_some(moved)
    }

    /// The in-bounds 4-neighbours, in fixed order: up, left, right, down.
    pub fn neighbors4(self, dimension: usize) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc, dimension))
    }

    /// `|Δrow| + |Δcol|`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` differs by exactly one unit along exactly one axis.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
