//! Assignment extraction from the final marks.

use crate::solve::{AssignedPair, Assignment};
use crate::solver::marks::{Mark, MarkMatrix};
use crate::solver::pad::PaddedProblem;

/// Collects starred cells inside the caller's original rectangle, skipping
/// synthetic and forbidden pairings, and totals their original costs.
///
/// Rows or columns whose star landed in the padding are simply absent;
/// callers detect that by comparing the pair count against the expected
/// side length.
pub(crate) fn extract(problem: &PaddedProblem, marks: &MarkMatrix) -> Assignment {
    let mut pairs = Vec::new();
    let mut total = 0.0;

    for row in 0..problem.rows {
        for col in 0..problem.cols {
            if marks.at(row, col) != Mark::Starred {
                continue;
            }
            let cell = problem.original.at(row, col);
            if cell.forbidden {
                continue;
            }
            pairs.push(AssignedPair {
                row,
                col,
                cost: cell.value,
            });
            total += cell.value;
        }
    }

    Assignment {
        pairs,
        total_cost: total,
    }
}
