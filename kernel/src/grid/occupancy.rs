//! `OccupancyGrid`: a square matrix of free/blocked cells.
//!
//! Used directly as the ground-truth map and wrapped by
//! [`crate::grid::knowledge::KnowledgeGrid`] for the agent's belief map.
//!
//! # Layout
//!
//! Row-major `Vec<Cell>` of length `dimension * dimension`. The text form
//! (via `Display`) is one line per row with cells written as `0`/`1` and
//! separated by single spaces.

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::grid::position::Position;

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Cell {
    #[default]
    Free = 0,
    Blocked = 1,
}

impl Cell {
    /// Convert from the `0`/`1` matrix encoding. Returns `None` for other values.
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::Free),
            1 => Some(Self::Blocked),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

/// A square grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccupancyGrid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// An all-free `dimension × dimension` grid.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Cell::Free; dimension * dimension],
        }
    }

    /// Build from a `0`/`1` row matrix.
    ///
    /// `field` names the input in error messages (e.g. `"ground_truth"`).
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyGrid`] if there are no rows.
    /// - [`ConfigurationError::NonSquare`] if any row length differs from the
    ///   row count.
    /// - [`ConfigurationError::InvalidCell`] for entries other than `0`/`1`.
    pub fn from_rows<R: AsRef<[u8]>>(
        field: &'static str,
        rows: &[R],
    ) -> Result<Self, ConfigurationError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(ConfigurationError::EmptyGrid { field });
        }
        let mut cells = Vec::with_capacity(dimension * dimension);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dimension {
                return Err(ConfigurationError::NonSquare {
                    field,
                    row,
                    len: values.len(),
                    expected: dimension,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_byte(value).ok_or(ConfigurationError::InvalidCell {
                    field,
                    row,
                    col,
                    value,
                })?;
                cells.push(cell);
            }
        }
        Ok(Self { dimension, cells })
    }

    /// Side length `N`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        p.in_bounds(self.dimension)
    }

    /// Cell at `p`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, p: Position) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// True only for in-bounds blocked cells.
    #[must_use]
    pub fn is_blocked(&self, p: Position) -> bool {
        self.cell(p) == Some(Cell::Blocked)
    }

    /// Overwrite the cell at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::OutOfBounds`] if `p` is outside the grid.
    pub fn set(&mut self, p: Position, cell: Cell) -> Result<(), ConfigurationError> {
        let i = self.index(p).ok_or(ConfigurationError::OutOfBounds {
            field: "position",
            position: p,
            dimension: self.dimension,
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// All blocked positions in row-major order.
    pub fn blocked_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Blocked)
            .map(move |(i, _)| Position::new(i / dimension, i % dimension))
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Blocked).count()
    }

    /// The grid as a `0`/`1` row matrix.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        if self.dimension == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|c| c.to_byte()).collect())
            .collect()
    }

    /// Raw row-major cell bytes (one byte per cell).
    #[must_use]
    pub fn cell_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.to_byte()).collect()
    }

    fn index(&self, p: Position) -> Option<usize> {
        self.contains(p).then(|| p.row * self.dimension + p.col)
    }
}

impl std::fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
