//! JSON projection of solve results.

use crate::matrix::CostMatrix;
use crate::solve::{AssignedPair, Assignment};
use serde::Serialize;

/// A solve result paired with the shape of the instance it came from, for
/// consumers that need completeness without re-deriving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub rows: u32,
    pub cols: u32,
    pub assigned: usize,
    pub complete: bool,
    pub total_cost: f64,
    pub pairs: Vec<AssignedPair>,
}

/// Builds a [`SolveReport`] from a solved assignment and the matrix it was
/// solved against.
pub fn build_report(matrix: &CostMatrix, assignment: &Assignment) -> SolveReport {
    SolveReport {
        rows: matrix.nrows(),
        cols: matrix.ncols(),
        assigned: assignment.len(),
        complete: assignment.is_complete_for(matrix),
        total_cost: assignment.total_cost,
        pairs: assignment.pairs.clone(),
    }
}

pub fn serialize_report(report: &SolveReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn serialize_assignment(assignment: &Assignment) -> serde_json::Result<String> {
    serde_json::to_string(assignment)
}
