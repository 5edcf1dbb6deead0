//! Sense-and-move: walk a planned path against the ground truth.
//!
//! The agent never enters a blocked cell. When the next cell on the path is
//! blocked it is recorded in the knowledge grid and the walk stops on the
//! previous cell. After every successful step the agent senses around its new
//! cell and records any blocked cells it sees, on the path or not.

use fogwalk_kernel::grid::knowledge::KnowledgeGrid;
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;
use fogwalk_search::path::Path;

use crate::policy::SensingMode;

/// Malformed input to [`advance`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SenseError {
    #[error("cannot advance along an empty path")]
    EmptyPath,

    #[error("ground truth is {ground_truth}x{ground_truth} but knowledge is {knowledge}x{knowledge}")]
    DimensionMismatch { ground_truth: usize, knowledge: usize },

    #[error("path position {position} is outside a {dimension}x{dimension} grid")]
    OutOfBounds { position: Position, dimension: usize },

    #[error("path step {from} -> {to} is not a single 4-connected move")]
    NonAdjacentStep { from: Position, to: Position },
}

/// How far the agent got along a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    /// Where the agent stands after the walk.
    pub stop_position: Position,
    /// Moves actually made.
    pub steps_taken: usize,
    /// The blocked path cell that halted the walk, if any.
    pub blocked_at: Option<Position>,
    /// Cells marked blocked during this walk that were not known before, in
    /// discovery order.
    pub newly_blocked: Vec<Position>,
}

impl Advance {
    /// True if the walk ended on the path's final position.
    #[must_use]
    pub fn reached_end_of(&self, path: &Path) -> bool {
        path.last() == Some(self.stop_position)
    }
}

/// Walk `path` from its second element onward.
///
/// # Errors
///
/// Returns a [`SenseError`] for an empty path, mismatched grids, an
/// out-of-bounds position, or a step that is not a single 4-connected move.
/// Knowledge gathered before the offending step is kept.
pub fn advance(
    ground_truth: &OccupancyGrid,
    knowledge: &mut KnowledgeGrid,
    path: &Path,
    sensing: SensingMode,
) -> Result<Advance, SenseError> {
    let dimension = ground_truth.dimension();
    if knowledge.dimension() != dimension {
        return Err(SenseError::DimensionMismatch {
            ground_truth: dimension,
            knowledge: knowledge.dimension(),
        });
    }
    let (&first, rest) = path
        .positions()
        .split_first()
        .ok_or(SenseError::EmptyPath)?;
    check_bounds(first, dimension)?;

    let mut current = first;
    let mut steps_taken = 0;
    let mut newly_blocked = Vec::new();

    for &next in rest {
        check_bounds(next, dimension)?;
        if !current.is_adjacent(next) {
            return Err(SenseError::NonAdjacentStep {
                from: current,
                to: next,
            });
        }
        if ground_truth.is_blocked(next) {
            if knowledge.mark_blocked(next) {
                newly_blocked.push(next);
            }
            log::debug!("blocked at {next}, halting on {current} after {steps_taken} steps");
            return Ok(Advance {
                stop_position: current,
                steps_taken,
                blocked_at: Some(next),
                newly_blocked,
            });
        }
        current = next;
        steps_taken += 1;
        sense_around(ground_truth, knowledge, current, sensing, &mut newly_blocked);
    }

    Ok(Advance {
        stop_position: current,
        steps_taken,
        blocked_at: None,
        newly_blocked,
    })
}

/// Record every blocked cell visible from `at` under `mode`.
fn sense_around(
    ground_truth: &OccupancyGrid,
    knowledge: &mut KnowledgeGrid,
    at: Position,
    mode: SensingMode,
    newly_blocked: &mut Vec<Position>,
) {
    let dimension = ground_truth.dimension();
    let mut observe = |p: Position| {
        if ground_truth.is_blocked(p) && knowledge.mark_blocked(p) {
            log::debug!("sensed obstacle at {p} from {at}");
            newly_blocked.push(p);
        }
    };
    match mode {
        SensingMode::Adjacent => at.neighbors4(dimension).for_each(&mut observe),
        SensingMode::Radius(r) => {
            let rows = at.row.saturating_sub(r)..=(at.row.saturating_add(r)).min(dimension - 1);
            for row in rows {
                let cols = at.col.saturating_sub(r)..=(at.col.saturating_add(r)).min(dimension - 1);
                for col in cols {
                    let p = Position::new(row, col);
                    if p.manhattan(at) <= r {
                        observe(p);
                    }
                }
            }
        }
    }
}

fn check_bounds(position: Position, dimension: usize) -> Result<(), SenseError> {
    if position.in_bounds(dimension) {
        Ok(())
    } else {
        Err(SenseError::OutOfBounds {
            position,
            dimension,
        })
    }
}
