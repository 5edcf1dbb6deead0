//! A* entry point and expansion loop.

use std::collections::HashSet;

use fogwalk_kernel::grid::position::Position;

use crate::contract::ObstacleMap;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{ExpandEvent, SearchGraph, SearchGraphMetadata, TerminationReason};
use crate::node::StateArena;
use crate::path::Path;
use crate::policy::SearchPolicy;

/// What the search concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A start→goal path through cells not known to be blocked.
    Found(Path),
    /// The frontier emptied: under current knowledge the goal is unreachable.
    NotFound,
    /// `max_expansions` was reached before either of the above.
    BudgetExhausted,
}

/// Result of a search call. Always carries the audit trail.
#[derive(Debug)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub graph: SearchGraph,
}

impl SearchResult {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Run A* over `map` from `start` to `goal`.
///
/// Cells blocked in `map` are never entered (the start cell itself is not
/// checked). A position is closed the first time it is popped and never
/// expanded again; later pops of the same position are skipped. With a
/// consistent heuristic and unit move costs the first pop is already the
/// cheapest, so skipping is exact.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation.
/// - [`SearchError::OutOfBounds`] if `start` or `goal` lies outside `map`.
/// - [`SearchError::EmptyFrontier`] on a frontier invariant violation.
pub fn search(
    map: &dyn ObstacleMap,
    start: Position,
    goal: Position,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    let dimension = map.dimension();
    check_bounds("start", start, dimension)?;
    check_bounds("goal", goal, dimension)?;

    let heuristic = policy.heuristic;
    let mut arena = StateArena::new();
    let mut frontier = Frontier::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut duplicates_skipped: u64 = 0;

    frontier.insert(arena.push_root(start, heuristic.estimate(start, goal)));

    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }
        if expansions.len() as u64 >= policy.max_expansions {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let current = frontier.extract_min()?;
        if !closed.insert(current.position) {
            duplicates_skipped += 1;
            continue;
        }

        let mut event = ExpandEvent {
            expansion_order: expansions.len() as u64,
            state_id: current.id,
            position: current.position,
            g: current.g,
            f: current.f(),
            children_created: 0,
        };

        if current.position == goal {
            expansions.push(event);
            break TerminationReason::GoalReached {
                state_id: current.id,
            };
        }

        for next in current.position.neighbors4(dimension) {
            if closed.contains(&next) || map.is_blocked(next) {
                continue;
            }
            let child = arena.push_child(&current, next, heuristic.estimate(next, goal));
            frontier.insert(child);
            event.children_created += 1;
        }
        log::trace!(
            "expand #{} {} g={} f={} children={}",
            event.expansion_order,
            event.position,
            event.g,
            event.f,
            event.children_created
        );
        expansions.push(event);
    };

    let outcome = match termination_reason {
        TerminationReason::GoalReached { state_id } => SearchOutcome::Found(arena.path_to(state_id)),
        TerminationReason::FrontierExhausted => SearchOutcome::NotFound,
        TerminationReason::ExpansionBudgetExceeded => SearchOutcome::BudgetExhausted,
    };
    log::debug!(
        "search {start} -> {goal}: {:?} after {} expansions ({} states, {} duplicates skipped)",
        termination_reason,
        expansions.len(),
        arena.len(),
        duplicates_skipped
    );

    let metadata = SearchGraphMetadata {
        start,
        goal,
        heuristic,
        total_expansions: expansions.len() as u64,
        states_created: arena.len() as u64,
        duplicates_skipped,
        frontier_high_water: frontier.high_water() as u64,
        termination_reason,
    };

    Ok(SearchResult {
        outcome,
        graph: SearchGraph {
            expansions,
            metadata,
        },
    })
}

fn check_bounds(
    field: &'static str,
    position: Position,
    dimension: usize,
) -> Result<(), SearchError> {
    if position.in_bounds(dimension) {
        Ok(())
    } else {
        Err(SearchError::OutOfBounds {
            field,
            position,
            dimension,
        })
    }
}
