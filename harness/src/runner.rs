//! Replanning runner: interleaves A* with sense-and-move until the goal is
//! reached or the goal is provably unreachable under current knowledge.
//!
//! # Controller states
//!
//! ```text
//! Planning ──Found──▶ Executing ──stopped short──▶ Planning
//!    │                    │
//!  NotFound          reached end
//!    ▼                    ▼
//!  Stuck             GoalReached
//! ```
//!
//! Every round that stops short has just learned the blocked cell that
//! stopped it, and that cell was not known when the path was planned. Known
//! obstacles only grow and are bounded by `N²`, so the loop terminates.

use serde::Serialize;

use fogwalk_kernel::error::ConfigurationError;
use fogwalk_kernel::grid::knowledge::KnowledgeGrid;
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;
use fogwalk_search::error::SearchError;
use fogwalk_search::path::Path;
use fogwalk_search::search::{search, SearchOutcome};

use crate::contract::Scenario;
use crate::policy::RunConfig;
use crate::sense::{advance, SenseError};

/// Error during a replanning run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunError {
    /// Invalid grids or endpoints.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Search pre-flight failure or invariant violation.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// A planned path could not be walked.
    #[error(transparent)]
    Sense(#[from] SenseError),
    /// A planning round hit the search expansion budget.
    #[error("search from {from} exhausted its budget of {max_expansions} expansions")]
    SearchBudgetExhausted { from: Position, max_expansions: u64 },
    /// More planning rounds than the configured cap.
    #[error("planning round limit of {limit} exceeded")]
    PlanningLimitExceeded { limit: usize },
}

/// Terminal status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Stuck,
}

/// Controller state machine. `GoalReached` and `Stuck` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Planning,
    Executing(Path),
    GoalReached,
    Stuck,
}

impl ControllerState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GoalReached | Self::Stuck)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub status: RunStatus,
    /// Knowledge at termination.
    pub final_knowledge: KnowledgeGrid,
    /// Every path planned, in planning order.
    pub path_history: Vec<Path>,
    /// Every position the agent occupied, starting with `start`.
    pub trajectory: Vec<Position>,
    /// Moves made across all rounds.
    pub steps_taken: usize,
    /// Calls to the search, including the one that ended the run.
    pub planning_rounds: usize,
    /// Shortest start→goal path over the final knowledge, searched from the
    /// original start. `None` when the final knowledge walls the goal off.
    pub final_path: Option<Path>,
}

impl RunResult {
    /// Planning rounds after the first.
    #[must_use]
    pub fn replans(&self) -> usize {
        self.planning_rounds.saturating_sub(1)
    }

    #[must_use]
    pub fn final_position(&self) -> Option<Position> {
        self.trajectory.last().copied()
    }
}

/// Sense-move-replan controller for a single agent.
///
/// Owns the knowledge grid for the duration of the run; the ground truth is
/// borrowed and never modified.
#[derive(Debug)]
pub struct ReplanningController<'g> {
    ground_truth: &'g OccupancyGrid,
    knowledge: KnowledgeGrid,
    start: Position,
    goal: Position,
    current: Position,
    config: RunConfig,
    planning_round_limit: usize,
    state: ControllerState,
    path_history: Vec<Path>,
    trajectory: Vec<Position>,
    steps_taken: usize,
    planning_rounds: usize,
}

impl<'g> ReplanningController<'g> {
    /// Validate inputs and enter `Planning`.
    ///
    /// # Errors
    ///
    /// - [`RunError::Configuration`] for empty or mismatched grids,
    ///   out-of-bounds endpoints, or a start blocked in the ground truth.
    /// - [`RunError::Search`] if the search policy is invalid.
    pub fn new(
        ground_truth: &'g OccupancyGrid,
        knowledge: KnowledgeGrid,
        start: Position,
        goal: Position,
        config: RunConfig,
    ) -> Result<Self, RunError> {
        validate_inputs(ground_truth, &knowledge, start, goal)?;
        config.search.validate()?;
        let planning_round_limit = config.planning_round_limit(ground_truth.dimension());
        Ok(Self {
            ground_truth,
            knowledge,
            start,
            goal,
            current: start,
            config,
            planning_round_limit,
            state: ControllerState::Planning,
            path_history: Vec::new(),
            trajectory: vec![start],
            steps_taken: 0,
            planning_rounds: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeGrid {
        &self.knowledge
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.current
    }

    /// Perform one state transition. Terminal states are left unchanged.
    ///
    /// # Errors
    ///
    /// See [`RunError`]. The controller should not be stepped again after
    /// an error.
    pub fn step(&mut self) -> Result<&ControllerState, RunError> {
        let next = match std::mem::replace(&mut self.state, ControllerState::Planning) {
            ControllerState::Planning => self.plan()?,
            ControllerState::Executing(path) => self.execute(path)?,
            terminal @ (ControllerState::GoalReached | ControllerState::Stuck) => terminal,
        };
        self.state = next;
        Ok(&self.state)
    }

    /// Step until a terminal state, then search once more from the original
    /// start over everything learned.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RunError`] from [`Self::step`], and
    /// [`RunError::SearchBudgetExhausted`] if the final search runs out of
    /// budget.
    pub fn run(mut self) -> Result<RunResult, RunError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        let status = if self.state == ControllerState::GoalReached {
            RunStatus::Success
        } else {
            RunStatus::Stuck
        };
        log::info!(
            "run finished {:?} at {} after {} steps, {} planning rounds, {} known obstacles",
            status,
            self.current,
            self.steps_taken,
            self.planning_rounds,
            self.knowledge.known_blocked_count()
        );
        let final_path = self.final_path()?;
        Ok(RunResult {
            status,
            final_knowledge: self.knowledge,
            path_history: self.path_history,
            trajectory: self.trajectory,
            steps_taken: self.steps_taken,
            planning_rounds: self.planning_rounds,
            final_path,
        })
    }

    fn final_path(&self) -> Result<Option<Path>, RunError> {
        let result = search(&self.knowledge, self.start, self.goal, &self.config.search)?;
        match result.outcome {
            SearchOutcome::Found(path) => Ok(Some(path)),
            SearchOutcome::NotFound => Ok(None),
            SearchOutcome::BudgetExhausted => Err(RunError::SearchBudgetExhausted {
                from: self.start,
                max_expansions: self.config.search.max_expansions,
            }),
        }
    }

    fn plan(&mut self) -> Result<ControllerState, RunError> {
        if self.planning_rounds >= self.planning_round_limit {
            return Err(RunError::PlanningLimitExceeded {
                limit: self.planning_round_limit,
            });
        }
        self.planning_rounds += 1;
        let result = search(&self.knowledge, self.current, self.goal, &self.config.search)?;
        match result.outcome {
            SearchOutcome::Found(path) => {
                log::debug!(
                    "round {}: planned {} moves from {}",
                    self.planning_rounds,
                    path.moves(),
                    self.current
                );
                self.path_history.push(path.clone());
                Ok(ControllerState::Executing(path))
            }
            SearchOutcome::NotFound => {
                log::debug!(
                    "round {}: no path from {} to {} under current knowledge",
                    self.planning_rounds,
                    self.current,
                    self.goal
                );
                Ok(ControllerState::Stuck)
            }
            SearchOutcome::BudgetExhausted => Err(RunError::SearchBudgetExhausted {
                from: self.current,
                max_expansions: self.config.search.max_expansions,
            }),
        }
    }

    fn execute(&mut self, path: Path) -> Result<ControllerState, RunError> {
        let moved = advance(
            self.ground_truth,
            &mut self.knowledge,
            &path,
            self.config.sensing,
        )?;
        self.trajectory
            .extend_from_slice(&path.positions()[1..=moved.steps_taken]);
        self.steps_taken += moved.steps_taken;
        self.current = moved.stop_position;

        if moved.reached_end_of(&path) {
            Ok(ControllerState::GoalReached)
        } else {
            log::debug!(
                "stopped at {} (blocked at {:?}), learned {} obstacles",
                self.current,
                moved.blocked_at,
                moved.newly_blocked.len()
            );
            Ok(ControllerState::Planning)
        }
    }
}

/// Run the sense-move-replan loop from `start` to `goal`.
///
/// # Errors
///
/// See [`ReplanningController::new`] and [`ReplanningController::step`].
pub fn plan_and_execute(
    ground_truth: &OccupancyGrid,
    knowledge: KnowledgeGrid,
    start: Position,
    goal: Position,
    config: &RunConfig,
) -> Result<RunResult, RunError> {
    ReplanningController::new(ground_truth, knowledge, start, goal, config.clone())?.run()
}

/// [`plan_and_execute`] over raw `0`/`1` matrices.
///
/// # Errors
///
/// [`RunError::Configuration`] for malformed matrices, plus everything
/// [`plan_and_execute`] returns.
pub fn plan_and_execute_matrices<R: AsRef<[u8]>>(
    ground_truth: &[R],
    knowledge: &[R],
    start: Position,
    goal: Position,
    config: &RunConfig,
) -> Result<RunResult, RunError> {
    let ground_truth = OccupancyGrid::from_rows("ground_truth", ground_truth)?;
    let knowledge = KnowledgeGrid::from_prior(OccupancyGrid::from_rows("knowledge", knowledge)?);
    plan_and_execute(&ground_truth, knowledge, start, goal, config)
}

/// Build a scenario's grids and run it.
///
/// # Errors
///
/// See [`plan_and_execute`].
pub fn run_scenario(scenario: &dyn Scenario, config: &RunConfig) -> Result<RunResult, RunError> {
    let ground_truth = scenario.ground_truth()?;
    let knowledge = scenario.prior_knowledge(ground_truth.dimension());
    log::debug!(
        "scenario {}: {}x{} grid, {} -> {}",
        scenario.scenario_id(),
        ground_truth.dimension(),
        ground_truth.dimension(),
        scenario.start(),
        scenario.goal()
    );
    plan_and_execute(
        &ground_truth,
        knowledge,
        scenario.start(),
        scenario.goal(),
        config,
    )
}

fn validate_inputs(
    ground_truth: &OccupancyGrid,
    knowledge: &KnowledgeGrid,
    start: Position,
    goal: Position,
) -> Result<(), ConfigurationError> {
    let dimension = ground_truth.dimension();
    if dimension == 0 {
        return Err(ConfigurationError::EmptyGrid {
            field: "ground_truth",
        });
    }
    if knowledge.dimension() != dimension {
        return Err(ConfigurationError::DimensionMismatch {
            ground_truth: dimension,
            knowledge: knowledge.dimension(),
        });
    }
    for (field, position) in [("start", start), ("goal", goal)] {
        if !position.in_bounds(dimension) {
            return Err(ConfigurationError::OutOfBounds {
                field,
                position,
                dimension,
            });
        }
    }
    if ground_truth.is_blocked(start) {
        return Err(ConfigurationError::StartBlocked { position: start });
    }
    Ok(())
}
