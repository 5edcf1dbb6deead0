//! `EnclosedGoal`: a goal at the grid centre walled in on all four sides.
//!
//! No path exists in the ground truth, so a run must end `Stuck` once the
//! agent has sensed every wall cell.

use fogwalk_kernel::error::ConfigurationError;
use fogwalk_kernel::grid::occupancy::{Cell, OccupancyGrid};
use fogwalk_kernel::grid::position::Position;

use crate::contract::Scenario;

/// Smallest size with a free ring around the enclosure.
pub const MIN_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosedGoal {
    pub size: usize,
}

impl Default for EnclosedGoal {
    fn default() -> Self {
        Self { size: 5 }
    }
}

impl Scenario for EnclosedGoal {
    #[allow(clippy::unnecessary_literal_bound)]
    fn scenario_id(&self) -> &str {
        "enclosed_goal"
    }

    fn ground_truth(&self) -> Result<OccupancyGrid, ConfigurationError> {
        if self.size < MIN_SIZE {
            return Err(ConfigurationError::SizeTooSmall {
                field: "size",
                size: self.size,
                minimum: MIN_SIZE,
            });
        }
        let mut grid = OccupancyGrid::new(self.size);
        for wall in self.goal().neighbors4(self.size) {
            grid.set(wall, Cell::Blocked)?;
        }
        Ok(grid)
    }

    fn start(&self) -> Position {
        Position::new(0, 0)
    }

    fn goal(&self) -> Position {
        let mid = self.size / 2;
        Position::new(mid, mid)
    }
}
