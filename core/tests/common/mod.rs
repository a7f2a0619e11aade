//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lapmatch::{Assignment, CostMatrix, SolveConfig};

/// Forbidden-cell shorthand for matrix literals.
pub const X: Option<f64> = None;

/// Assignable-cell shorthand for matrix literals.
pub fn c(value: f64) -> Option<f64> {
    Some(value)
}

pub fn matrix_of(values: &[&[f64]]) -> CostMatrix {
    let rows: Vec<Vec<f64>> = values.iter().map(|r| r.to_vec()).collect();
    CostMatrix::from_values(&rows).expect("well-formed matrix")
}

pub fn matrix_from(rows: &[&[Option<f64>]]) -> CostMatrix {
    let rows: Vec<Vec<Option<f64>>> = rows.iter().map(|r| r.to_vec()).collect();
    CostMatrix::from_rows(&rows).expect("well-formed matrix")
}

/// Rebuilds `matrix` with every assignable cost negated, the caller-side
/// maximization transform.
pub fn negated(matrix: &CostMatrix) -> CostMatrix {
    let rows: Vec<Vec<Option<f64>>> = (0..matrix.nrows())
        .map(|r| {
            matrix
                .row(r)
                .iter()
                .map(|cell| {
                    if cell.forbidden {
                        None
                    } else {
                        Some(-cell.value)
                    }
                })
                .collect()
        })
        .collect();
    CostMatrix::from_rows(&rows).expect("negation preserves shape")
}

pub fn solve_default(matrix: &CostMatrix) -> Assignment {
    matrix
        .solve(&SolveConfig::default())
        .expect("solvable instance")
}

pub fn pairs_of(assignment: &Assignment) -> Vec<(u32, u32)> {
    assignment.pairs.iter().map(|p| (p.row, p.col)).collect()
}

/// Totals are compared with the same loose epsilon the expected values were
/// recorded at.
pub fn assert_total(assignment: &Assignment, expected: f64) {
    assert!(
        (assignment.total_cost - expected).abs() < 1e-3,
        "total cost {} differs from expected {}",
        assignment.total_cost,
        expected
    );
}
