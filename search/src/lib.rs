//! Fogwalk Search: deterministic A* over a partial-knowledge grid.
//!
//! This crate provides the planning layer. It depends only on
//! `fogwalk_kernel`; it does NOT depend on `fogwalk_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! fogwalk_kernel  ←  fogwalk_search  ←  fogwalk_harness
//! (grids, hashing)   (frontier, A*)     (sensing, replanning loop)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchState`] -- position + costs, identity by position only
//! - [`node::StateArena`] -- index-addressed state store for path reconstruction
//! - [`frontier::Frontier`] -- ascending-`f` open list with FIFO ties
//! - [`search::search`] -- the A* entry point
//! - [`graph::SearchGraph`] -- expansion-event audit log
//! - [`contract::ObstacleMap`] -- what the search reads from a grid

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
