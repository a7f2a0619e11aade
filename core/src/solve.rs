//! Public solve entry point and result types.
//!
//! This module defines the types visible to callers of the solver:
//! - [`Assignment`]: the optimal pairing and its total cost
//! - [`AssignedPair`]: one row/column pairing with its original cost
//! - [`SolveError`]: typed failures; no partial state is ever returned

use crate::config::SolveConfig;
use crate::error_codes;
use crate::matrix::CostMatrix;
use crate::solver;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One pairing in a solved assignment. `cost` is the value from the
/// original, unreduced matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssignedPair {
    pub row: u32,
    pub col: u32,
    pub cost: f64,
}

/// A minimum-cost assignment.
///
/// Pairs are in row-major order and reference the caller's original matrix
/// coordinates; synthetic padding pairs and forbidden pairings never appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub pairs: Vec<AssignedPair>,
    pub total_cost: f64,
}

impl Assignment {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The column assigned to `row`, if any.
    pub fn column_of(&self, row: u32) -> Option<u32> {
        self.pairs.iter().find(|p| p.row == row).map(|p| p.col)
    }

    /// Whether every row (or column, whichever side is smaller) of `matrix`
    /// received a partner.
    pub fn is_complete_for(&self, matrix: &CostMatrix) -> bool {
        self.pairs.len() as u32 == matrix.nrows().min(matrix.ncols())
    }
}

/// Errors produced by [`solve`].
///
/// On error the solve produced no assignment at all; there is no partial
/// result to read.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolveError {
    #[error(
        "[LAPMATCH_SOLVE_001] matrix dimension {dim} exceeds the configured maximum {max}. Suggestion: raise `max_dimension` or split the problem."
    )]
    DimensionExceeded { dim: u32, max: u32 },

    #[error(
        "[LAPMATCH_SOLVE_002] row {row} has no assignable column: every cell is forbidden. Suggestion: relax the forbidden pairings or drop the row before solving."
    )]
    UnsolvableRow { row: u32 },

    #[error(
        "[LAPMATCH_SOLVE_003] no assignable cell remains for cost adjustment: the forbidden pattern admits no complete matching."
    )]
    NoFeasibleAdjustment,

    #[error(
        "[LAPMATCH_SOLVE_004] solver exceeded {limit} state transitions without converging. Suggestion: loosen `zero_tolerance` or raise `max_steps`."
    )]
    StepLimitExceeded { limit: u64 },
}

impl SolveError {
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::DimensionExceeded { .. } => error_codes::SOLVE_DIMENSION_EXCEEDED,
            SolveError::UnsolvableRow { .. } => error_codes::SOLVE_UNSOLVABLE_ROW,
            SolveError::NoFeasibleAdjustment => error_codes::SOLVE_NO_FEASIBLE_ADJUSTMENT,
            SolveError::StepLimitExceeded { .. } => error_codes::SOLVE_STEP_LIMIT,
        }
    }
}

/// Solves the minimum-cost assignment problem over `matrix`.
///
/// Rectangular matrices are padded to square internally; the result only
/// ever references the caller's coordinates. Scan order is row-major with
/// first-match-wins tie-breaking, so identical inputs yield identical
/// pairings, not merely identical totals.
pub fn solve(matrix: &CostMatrix, config: &SolveConfig) -> Result<Assignment, SolveError> {
    check_dimension(matrix, config)?;
    solver::run(matrix, config)
}

/// Like [`solve`], additionally recording counters, timings, and dual
/// labels into `metrics`.
#[cfg(feature = "solve-metrics")]
pub fn solve_with_metrics(
    matrix: &CostMatrix,
    config: &SolveConfig,
    metrics: &mut crate::perf::SolveMetrics,
) -> Result<Assignment, SolveError> {
    check_dimension(matrix, config)?;
    solver::run_with_metrics(matrix, config, metrics)
}

fn check_dimension(matrix: &CostMatrix, config: &SolveConfig) -> Result<(), SolveError> {
    let dim = matrix.nrows().max(matrix.ncols());
    if dim > config.max_dimension {
        return Err(SolveError::DimensionExceeded {
            dim,
            max: config.max_dimension,
        });
    }
    Ok(())
}

impl CostMatrix {
    /// Solves this matrix for the minimum-cost assignment. See [`solve`].
    pub fn solve(&self, config: &SolveConfig) -> Result<Assignment, SolveError> {
        solve(self, config)
    }
}
