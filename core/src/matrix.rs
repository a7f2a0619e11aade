//! Cost matrix data structures.
//!
//! This module defines the caller-facing input representation:
//! - [`CostMatrix`]: a dense R×C grid of tagged cells
//! - [`CostCell`]: a finite cost value plus a forbidden flag
//! - [`MatrixError`]: construction-time shape violations
//!
//! A forbidden pairing is carried as an explicit per-cell flag, never as a
//! reserved sentinel value, so any finite `f64` is a legal cost.

use crate::error_codes;
use thiserror::Error;

/// A single cell of a cost matrix.
///
/// `value` must be finite. When `forbidden` is set the pairing is excluded
/// from reduction, adjustment, and result extraction, and `value` is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCell {
    pub value: f64,
    pub forbidden: bool,
}

impl CostCell {
    /// An assignable cell with the given cost.
    pub fn allowed(value: f64) -> CostCell {
        CostCell {
            value,
            forbidden: false,
        }
    }

    /// A cell whose pairing is disallowed.
    pub fn blocked() -> CostCell {
        CostCell {
            value: 0.0,
            forbidden: true,
        }
    }
}

/// Errors produced while constructing a [`CostMatrix`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("[LAPMATCH_MATRIX_001] cost matrix must have at least one row and one column")]
    Empty,

    #[error(
        "[LAPMATCH_MATRIX_002] row {row} has {found} columns, expected {expected}. Suggestion: pad short rows explicitly, forbidden cells included."
    )]
    RaggedRow { row: u32, expected: u32, found: u32 },

    #[error(
        "[LAPMATCH_MATRIX_003] cost at ({row}, {col}) is not finite. Suggestion: mark disallowed pairings as forbidden instead of using infinities or NaN."
    )]
    NonFiniteCost { row: u32, col: u32 },
}

impl MatrixError {
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::Empty => error_codes::MATRIX_EMPTY,
            MatrixError::RaggedRow { .. } => error_codes::MATRIX_RAGGED_ROW,
            MatrixError::NonFiniteCost { .. } => error_codes::MATRIX_NON_FINITE,
        }
    }
}

/// A dense R×C cost matrix.
///
/// # Invariants
///
/// `cells.len() == nrows * ncols`, rows stored contiguously in row-major
/// order, and every non-forbidden cell holds a finite value. Both are
/// enforced at construction, so solving never re-checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    nrows: u32,
    ncols: u32,
    cells: Vec<CostCell>,
}

impl CostMatrix {
    /// Builds a matrix from rows of optional costs; `None` marks a forbidden
    /// pairing.
    pub fn from_rows(rows: &[Vec<Option<f64>>]) -> Result<CostMatrix, MatrixError> {
        let nrows = rows.len() as u32;
        let ncols = rows.first().map(|r| r.len() as u32).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::Empty);
        }

        let mut cells = Vec::with_capacity(nrows as usize * ncols as usize);
        for (r, row) in rows.iter().enumerate() {
            if row.len() as u32 != ncols {
                return Err(MatrixError::RaggedRow {
                    row: r as u32,
                    expected: ncols,
                    found: row.len() as u32,
                });
            }
            for (c, value) in row.iter().enumerate() {
                match value {
                    Some(v) if v.is_finite() => cells.push(CostCell::allowed(*v)),
                    Some(_) => {
                        return Err(MatrixError::NonFiniteCost {
                            row: r as u32,
                            col: c as u32,
                        });
                    }
                    None => cells.push(CostCell::blocked()),
                }
            }
        }

        Ok(CostMatrix {
            nrows,
            ncols,
            cells,
        })
    }

    /// Builds a matrix with every pairing assignable.
    pub fn from_values(rows: &[Vec<f64>]) -> Result<CostMatrix, MatrixError> {
        let wrapped: Vec<Vec<Option<f64>>> = rows
            .iter()
            .map(|row| row.iter().copied().map(Some).collect())
            .collect();
        CostMatrix::from_rows(&wrapped)
    }

    pub fn nrows(&self) -> u32 {
        self.nrows
    }

    pub fn ncols(&self) -> u32 {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()` or `col >= ncols()`.
    pub fn at(&self, row: u32, col: u32) -> CostCell {
        assert!(row < self.nrows && col < self.ncols, "cell out of bounds");
        self.cells[row as usize * self.ncols as usize + col as usize]
    }

    /// The cells of one row, in column order.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    pub fn row(&self, row: u32) -> &[CostCell] {
        assert!(row < self.nrows, "row out of bounds");
        let start = row as usize * self.ncols as usize;
        &self.cells[start..start + self.ncols as usize]
    }

    /// Marks the pairing at `(row, col)` as forbidden.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()` or `col >= ncols()`.
    pub fn forbid(&mut self, row: u32, col: u32) {
        assert!(row < self.nrows && col < self.ncols, "cell out of bounds");
        self.cells[row as usize * self.ncols as usize + col as usize] = CostCell::blocked();
    }

    /// Number of forbidden cells.
    pub fn forbidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.forbidden).count()
    }
}
