//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Every hash computation
//! selects a [`HashDomain`], so identical bytes hashed for different purposes
//! never collide.

use sha2::{Digest, Sha256};

use crate::grid::occupancy::OccupancyGrid;

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon,
    /// empty algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// `OccupancyGrid` / `KnowledgeGrid` cell content.
    Grid,
    /// Serialized run report bytes.
    RunReport,
}

impl HashDomain {
    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::Grid => b"FOGWALK::GRID::V1\0",
            Self::RunReport => b"FOGWALK::RUN_REPORT::V1\0",
        }
    }

    pub const ALL: &'static [HashDomain] = &[Self::Grid, Self::RunReport];
}

/// SHA-256 of `domain || data`, formatted as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let full = format!("sha256:{}", hex::encode(hasher.finalize()));
    ContentHash { full, colon: 6 }
}

/// Hash of a grid: `dimension` as little-endian `u64`, then one byte per cell
/// in row-major order.
#[must_use]
pub fn grid_hash(grid: &OccupancyGrid) -> ContentHash {
    let cells = grid.cell_bytes();
    let mut data = Vec::with_capacity(8 + cells.len());
    data.extend_from_slice(&(grid.dimension() as u64).to_le_bytes());
    data.extend_from_slice(&cells);
    canonical_hash(HashDomain::Grid, &data)
}
