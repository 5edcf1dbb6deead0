//! `WallCorridor`: the 5×5 example world.
//!
//! An L-shaped wall (row 1 from column 1, plus column 1 down to row 3) sits
//! between the top-left start and the bottom-right goal. The optimistic first
//! plan runs along the top row into the wall, so the agent must turn back and
//! replan at least once.
//!
//! ```text
//! S 0 0 0 0
//! 0 1 1 1 1
//! 0 1 0 0 0
//! 0 1 0 0 0
//! 0 0 0 0 G
//! ```

use fogwalk_kernel::error::ConfigurationError;
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;

use crate::contract::Scenario;

const ROWS: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1],
    [0, 1, 0, 0, 0],
    [0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

pub struct WallCorridor;

impl Scenario for WallCorridor {
    #[allow(clippy::unnecessary_literal_bound)]
    fn scenario_id(&self) -> &str {
        "wall_5x5"
    }

    fn ground_truth(&self) -> Result<OccupancyGrid, ConfigurationError> {
        OccupancyGrid::from_rows("ground_truth", &ROWS)
    }

    fn start(&self) -> Position {
        Position::new(0, 0)
    }

    fn goal(&self) -> Position {
        Position::new(4, 4)
    }
}
