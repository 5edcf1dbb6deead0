//! Proof module: canonical content hashing for grids and run artifacts.
//!
//! Depends on `grid`. Nothing depends on `proof` within the kernel.

pub mod hash;
