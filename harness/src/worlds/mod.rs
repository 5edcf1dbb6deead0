//! Scenario implementations for the replanning runner.

pub mod enclosed_goal;
pub mod random_field;
pub mod wall_5x5;
