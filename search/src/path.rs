//! `Path`: an ordered start→goal sequence of positions.

use serde::Serialize;

use fogwalk_kernel::grid::position::Position;

use crate::contract::ObstacleMap;

/// A planned route. The first element is where the agent stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Position>);

impl Path {
    #[must_use]
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Number of positions (moves + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Check the path invariants against `map`: non-empty, starts at `start`,
    /// ends at `goal`, every step is 4-adjacent, and no position is blocked.
    #[must_use]
    pub fn is_valid_on(&self, map: &dyn ObstacleMap, start: Position, goal: Position) -> bool {
        self.first() == Some(start)
            && self.last() == Some(goal)
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
            && self
                .0
                .iter()
                .all(|p| p.in_bounds(map.dimension()) && !map.is_blocked(*p))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(" -> "))
    }
}
