//! Search states and the arena that owns them.
//!
//! States reference their predecessor by [`StateId`] (an index into the
//! [`StateArena`]), never by pointer. Ancestry is therefore a tree walked by
//! index: a child is always pushed after its parent, so every parent index
//! is strictly smaller than its child's and no state can be its own ancestor.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use fogwalk_kernel::grid::position::Position;

use crate::path::Path;

/// Index of a state in its [`StateArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A position reached during search, with its costs and predecessor.
///
/// Identity is the position alone: two states at the same position are equal
/// and hash equally regardless of cost or ancestry.
#[derive(Debug, Clone, Copy)]
pub struct SearchState {
    pub id: StateId,
    pub parent: Option<StateId>,
    pub position: Position,
    /// Moves from the start.
    pub g: u64,
    /// Heuristic estimate to the goal.
    pub h: u64,
}

impl SearchState {
    /// `f = g + h`, the frontier ordering key. Always derived, never stored.
    #[must_use]
    pub fn f(&self) -> u64 {
        self.g.saturating_add(self.h)
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for SearchState {}

impl Hash for SearchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

/// Append-only store of every state created by one search call.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<SearchState>,
}

impl StateArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root state (`g = 0`, no predecessor).
    pub fn push_root(&mut self, position: Position, h: u64) -> SearchState {
        self.push(None, position, 0, h)
    }

    /// Create a successor of `parent` one move further from the start.
    pub fn push_child(&mut self, parent: &SearchState, position: Position, h: u64) -> SearchState {
        self.push(Some(parent.id), position, parent.g.saturating_add(1), h)
    }

    fn push(&mut self, parent: Option<StateId>, position: Position, g: u64, h: u64) -> SearchState {
        let state = SearchState {
            id: StateId(self.states.len()),
            parent,
            position,
            g,
            h,
        };
        self.states.push(state);
        state
    }

    #[must_use]
    pub fn get(&self, id: StateId) -> Option<&SearchState> {
        self.states.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Reconstruct the root→`id` path by following predecessor indices.
    #[must_use]
    pub fn path_to(&self, id: StateId) -> Path {
        let mut positions = Vec::new();
        let mut current = self.get(id);
        while let Some(state) = current {
            positions.push(state.position);
            current = state.parent.and_then(|p| self.get(p));
        }
        positions.reverse();
        Path::new(positions)
    }
}

/// The frontier ordering key: `(f, insertion_seq)`.
///
/// Lower `f` first; among equal `f`, the earlier insertion first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u64,
    pub insertion_seq: u64,
}
