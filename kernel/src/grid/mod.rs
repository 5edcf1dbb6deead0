//! Grid module: positions, occupancy matrices, and the agent's knowledge layer.
//!
//! This is the foundational layer. No other kernel module is imported here
//! except [`crate::error`].

pub mod generate;
pub mod knowledge;
pub mod occupancy;
pub mod position;
