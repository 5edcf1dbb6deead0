//! Fogwalk Kernel: grid primitives for partially observable path planning.
//!
//! # API Surface
//!
//! - [`grid::position::Position`] -- `(row, col)` cell address
//! - [`grid::occupancy::OccupancyGrid`] -- square free/blocked matrix (ground truth)
//! - [`grid::knowledge::KnowledgeGrid`] -- monotone belief map
//! - [`heuristic::Heuristic`] -- integer distance estimates
//! - [`grid::generate::generate`] -- seeded random ground truth
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `grid` ← `heuristic`, `grid` ← `proof`
//!
//! One-way only. `error` is shared by all modules.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grid;
pub mod heuristic;
pub mod proof;
