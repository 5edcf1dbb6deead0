//! Seeded random ground-truth generation.
//!
//! Each cell is independently blocked with `blocked_probability`, except the
//! top-left and bottom-right corners which are always free so the usual
//! corner-to-corner run has a valid start and goal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::ConfigurationError;
use crate::grid::occupancy::{Cell, OccupancyGrid};
use crate::grid::position::Position;

/// Default obstacle density.
pub const DEFAULT_BLOCKED_PROBABILITY: f64 = 0.25;

/// Default side length.
pub const DEFAULT_SIZE: usize = 10;

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    /// Side length `N`.
    pub size: usize,
    /// Per-cell probability of an obstacle.
    pub blocked_probability: f64,
    /// RNG seed; equal configs produce equal grids.
    pub seed: u64,
}

impl GenerationConfig {
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyGrid`] if `size == 0`.
    /// - [`ConfigurationError::InvalidProbability`] if the probability is not
    ///   within `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.size == 0 {
            return Err(ConfigurationError::EmptyGrid { field: "size" });
        }
        if !(0.0..=1.0).contains(&self.blocked_probability) {
            return Err(ConfigurationError::InvalidProbability {
                value: self.blocked_probability,
            });
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            blocked_probability: DEFAULT_BLOCKED_PROBABILITY,
            seed: 0,
        }
    }
}

/// Generate a ground-truth grid.
///
/// # Errors
///
/// Returns the [`GenerationConfig::validate`] error for invalid parameters.
pub fn generate(config: &GenerationConfig) -> Result<OccupancyGrid, ConfigurationError> {
    config.validate()?;
    let n = config.size;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut grid = OccupancyGrid::new(n);
    let start = Position::new(0, 0);
    let goal = Position::new(n - 1, n - 1);

    for row in 0..n {
        for col in 0..n {
            let p = Position::new(row, col);
            // Draw for every cell so corner handling does not shift the stream.
            let blocked = rng.gen_bool(config.blocked_probability);
            if blocked && p != start && p != goal {
                grid.set(p, Cell::Blocked)?;
            }
        }
    }
    log::debug!(
        "generated {n}x{n} grid (seed={}, p={}): {} blocked",
        config.seed,
        config.blocked_probability,
        grid.blocked_count()
    );
    Ok(grid)
}
