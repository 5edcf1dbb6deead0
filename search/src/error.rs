//! Typed search errors.
//!
//! `SearchError` covers pre-flight validation and invariant violations only.
//! An unreachable goal is not an error: it is reported as
//! [`crate::search::SearchOutcome::NotFound`].

use fogwalk_kernel::grid::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// `extract_min` on an empty frontier. The search loop checks emptiness
    /// first, so reaching this indicates a bug.
    #[error("extract_min called on an empty frontier")]
    EmptyFrontier,

    /// Start or goal outside the map.
    #[error("{field}: {position} is outside a {dimension}x{dimension} grid")]
    OutOfBounds {
        field: &'static str,
        position: Position,
        dimension: usize,
    },

    /// A policy value that cannot drive a search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
