//! Scenario contract: what a world supplies to the replanning runner.
//!
//! Scenarios provide ground truth and endpoints only. They do NOT sense,
//! plan, or move; those are runner concerns.

use fogwalk_kernel::error::ConfigurationError;
use fogwalk_kernel::grid::knowledge::KnowledgeGrid;
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;

pub trait Scenario {
    /// Unique scenario identifier (e.g., `"wall_5x5"`).
    fn scenario_id(&self) -> &str;

    /// The true obstacle map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the scenario's parameters cannot
    /// produce a valid grid.
    fn ground_truth(&self) -> Result<OccupancyGrid, ConfigurationError>;

    fn start(&self) -> Position;

    fn goal(&self) -> Position;

    /// What the agent knows before the run. Defaults to nothing.
    fn prior_knowledge(&self, dimension: usize) -> KnowledgeGrid {
        KnowledgeGrid::all_free(dimension)
    }
}
