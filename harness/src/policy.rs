//! Run configuration: search policy, sensing model, and the planning-round
//! guard.

use serde::Serialize;

use fogwalk_search::policy::SearchPolicy;

/// Which cells the agent observes after stepping onto a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "radius", rename_all = "snake_case")]
pub enum SensingMode {
    /// The in-bounds 4-neighbours of the cell.
    #[default]
    Adjacent,
    /// Every in-bounds cell within this Manhattan distance.
    Radius(usize),
}

/// Configuration for a replanning run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RunConfig {
    /// Policy handed to every planning round.
    pub search: SearchPolicy,
    pub sensing: SensingMode,
    /// Cap on planning rounds. `None` uses `N²` for an `N × N` grid, which
    /// a correct run never exceeds.
    pub max_planning_rounds: Option<usize>,
}

impl RunConfig {
    /// The planning-round cap for a grid of side `dimension`.
    #[must_use]
    pub fn planning_round_limit(&self, dimension: usize) -> usize {
        self.max_planning_rounds
            .unwrap_or_else(|| dimension.saturating_mul(dimension).max(1))
    }
}
