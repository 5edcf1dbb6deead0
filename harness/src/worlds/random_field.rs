//! `RandomField`: seeded random obstacles between opposite corners.

use fogwalk_kernel::error::ConfigurationError;
use fogwalk_kernel::grid::generate::{generate, GenerationConfig};
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;

use crate::contract::Scenario;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomField {
    pub config: GenerationConfig,
}

impl Scenario for RandomField {
    #[allow(clippy::unnecessary_literal_bound)]
    fn scenario_id(&self) -> &str {
        "random"
    }

    fn ground_truth(&self) -> Result<OccupancyGrid, ConfigurationError> {
        generate(&self.config)
    }

    fn start(&self) -> Position {
        Position::new(0, 0)
    }

    /// Bottom-right corner. Meaningless for a zero size, which
    /// [`Self::ground_truth`] rejects.
    fn goal(&self) -> Position {
        let last = self.config.size.saturating_sub(1);
        Position::new(last, last)
    }
}
