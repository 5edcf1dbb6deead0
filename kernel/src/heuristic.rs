//! Distance estimates between grid positions.
//!
//! All estimates are integers so that `f = g + h` has a total order. Manhattan
//! is exact for an unobstructed 4-connected unit-cost grid and is the default.
//! Euclidean (floored) and Chebyshev never exceed Manhattan, so they remain
//! admissible but expand more states.

use serde::Serialize;

use crate::grid::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// `|Δrow| + |Δcol|`.
    #[default]
    Manhattan,
    /// `⌊√(Δrow² + Δcol²)⌋`.
    Euclidean,
    /// `max(|Δrow|, |Δcol|)`.
    Chebyshev,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    #[must_use]
    pub fn estimate(self, from: Position, to: Position) -> u64 {
        let dr = from.row.abs_diff(to.row) as u64;
        let dc = from.col.abs_diff(to.col) as u64;
        match self {
            Self::Manhattan => dr + dc,
            Self::Euclidean => isqrt(dr * dr + dc * dc),
            Self::Chebyshev => dr.max(dc),
        }
    }
}

/// Integer square root (floor), Newton's method.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = n / 2 + n % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
