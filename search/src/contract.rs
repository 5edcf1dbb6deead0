//! Obstacle map contract: what the search needs to know about a grid.

use fogwalk_kernel::grid::knowledge::KnowledgeGrid;
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;

/// A square map the search can query.
///
/// # Contract
///
/// - `is_blocked` is only called with in-bounds positions.
/// - Answers must not change during a single `search` call.
pub trait ObstacleMap {
    /// Side length `N` of the `N × N` map.
    fn dimension(&self) -> usize;

    /// Whether `p` is believed to contain an obstacle.
    fn is_blocked(&self, p: Position) -> bool;
}

impl ObstacleMap for OccupancyGrid {
    fn dimension(&self) -> usize {
        OccupancyGrid::dimension(self)
    }

    fn is_blocked(&self, p: Position) -> bool {
        OccupancyGrid::is_blocked(self, p)
    }
}

impl ObstacleMap for KnowledgeGrid {
    fn dimension(&self) -> usize {
        KnowledgeGrid::dimension(self)
    }

    fn is_blocked(&self, p: Position) -> bool {
        KnowledgeGrid::is_blocked(self, p)
    }
}
