//! `KnowledgeGrid`: the agent's belief about where obstacles are.
//!
//! Knowledge only grows. The wrapper exposes `mark_blocked` and no way to
//! clear a cell, so a cell that has been marked blocked stays blocked for the
//! lifetime of the value.

use crate::grid::occupancy::OccupancyGrid;
use crate::grid::position::Position;

/// Monotone obstacle belief map over an `N × N` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeGrid {
    grid: OccupancyGrid,
}

impl KnowledgeGrid {
    /// Knowledge with no obstacles known.
    #[must_use]
    pub fn all_free(dimension: usize) -> Self {
        Self {
            grid: OccupancyGrid::new(dimension),
        }
    }

    /// Start from prior knowledge (every blocked cell in `prior` is known).
    #[must_use]
    pub fn from_prior(prior: OccupancyGrid) -> Self {
        Self { grid: prior }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    #[must_use]
    pub fn is_blocked(&self, p: Position) -> bool {
        self.grid.is_blocked(p)
    }

    /// Record `p` as blocked. Returns `true` if this is new knowledge.
    ///
    /// Out-of-bounds positions are ignored and return `false`.
    pub fn mark_blocked(&mut self, p: Position) -> bool {
        if !self.grid.contains(p) || self.grid.is_blocked(p) {
            return false;
        }
        // In bounds, so `set` cannot fail.
        self.grid
            .set(p, crate::grid::occupancy::Cell::Blocked)
            .is_ok()
    }

    #[must_use]
    pub fn known_blocked_count(&self) -> usize {
        self.grid.blocked_count()
    }

    /// Read-only view of the underlying grid.
    #[must_use]
    pub fn as_grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// True if every cell blocked in `earlier` is also blocked here.
    #[must_use]
    pub fn extends(&self, earlier: &KnowledgeGrid) -> bool {
        self.dimension() == earlier.dimension()
            && earlier.grid.blocked_positions().all(|p| self.is_blocked(p))
    }
}

impl std::fmt::Display for KnowledgeGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}
