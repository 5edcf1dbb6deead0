//! `SearchGraph`: expansion-event audit log for one search call.
//!
//! The ordered list of [`ExpandEvent`]s is the decision record; the metadata
//! holds aggregate counters and the termination reason.

use serde::Serialize;

use fogwalk_kernel::grid::position::Position;
use fogwalk_kernel::heuristic::Heuristic;

use crate::node::StateId;

#[derive(Debug, Clone, Serialize)]
pub struct SearchGraph {
    pub expansions: Vec<ExpandEvent>,
    pub metadata: SearchGraphMetadata,
}

impl SearchGraph {
    /// Positions in the order they were closed.
    pub fn closed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.expansions.iter().map(|e| e.position)
    }
}

/// A single frontier pop that closed a new position.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    pub state_id: StateId,
    pub position: Position,
    pub g: u64,
    pub f: u64,
    /// Successors inserted into the frontier (zero for the goal).
    pub children_created: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchGraphMetadata {
    pub start: Position,
    pub goal: Position,
    pub heuristic: Heuristic,
    pub total_expansions: u64,
    pub states_created: u64,
    /// Pops discarded because their position was already closed.
    pub duplicates_skipped: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReason {
    GoalReached { state_id: StateId },
    FrontierExhausted,
    ExpansionBudgetExceeded,
}
