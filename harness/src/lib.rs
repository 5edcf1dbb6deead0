//! Fogwalk Harness: the sense-move-replan loop.
//!
//! The harness drives the search against an agent's knowledge, walks the
//! resulting path against ground truth, and repeats until the goal is
//! reached or provably unreachable under what the agent has seen.
//!
//! The harness does NOT implement search; it delegates to `fogwalk-search`.
//! Scenarios provide grids and endpoints only; the harness owns the loop.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod policy;
pub mod report;
pub mod runner;
pub mod sense;
pub mod worlds;
