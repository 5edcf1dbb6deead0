//! Search policy types.

use serde::Serialize;

use fogwalk_kernel::heuristic::Heuristic;

use crate::error::SearchError;

/// Default expansion budget. Far above `N²` for any grid a run would use.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// Budget and heuristic configuration for one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPolicy {
    /// Hard cap on closed (expanded) states.
    pub max_expansions: u64,
    /// Distance estimate used for `h`.
    pub heuristic: Heuristic,
}

impl SearchPolicy {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            heuristic: Heuristic::Manhattan,
        }
    }
}
