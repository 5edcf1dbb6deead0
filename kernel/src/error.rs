//! Caller input errors.
//!
//! Every variant is raised before any search begins and names the offending
//! input so the caller can fix it.

use crate::grid::position::Position;

/// Invalid grid, position, or generation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// A grid with no rows.
    #[error("{field}: grid is empty")]
    EmptyGrid { field: &'static str },

    /// A row whose length differs from the row count.
    #[error("{field}: row {row} has {len} cells, expected {expected} (grid must be square)")]
    NonSquare {
        field: &'static str,
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A side length below what a layout needs.
    #[error("{field}: {size} is below the minimum of {minimum}")]
    SizeTooSmall {
        field: &'static str,
        size: usize,
        minimum: usize,
    },

    /// Ground truth and knowledge disagree on size.
    #[error("dimension mismatch: ground_truth is {ground_truth}x{ground_truth}, knowledge is {knowledge}x{knowledge}")]
    DimensionMismatch { ground_truth: usize, knowledge: usize },

    /// A position outside `[0, dimension)²`.
    #[error("{field}: {position} is outside a {dimension}x{dimension} grid")]
    OutOfBounds {
        field: &'static str,
        position: Position,
        dimension: usize,
    },

    /// A matrix entry other than `0` (free) or `1` (blocked).
    #[error("{field}: cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell {
        field: &'static str,
        row: usize,
        col: usize,
        value: u8,
    },

    /// The agent cannot start inside an obstacle.
    #[error("start: {position} is blocked in ground_truth")]
    StartBlocked { position: Position },

    /// Obstacle probability outside `[0, 1]`.
    #[error("blocked_probability: {value} is not within [0, 1]")]
    InvalidProbability { value: f64 },
}
