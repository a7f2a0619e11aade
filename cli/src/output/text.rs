use crate::commands::solve::Verbosity;
use anyhow::Result;
use lapmatch::{CostMatrix, SolveReport};
use std::io::Write;

/// Echoes the cost matrix as the solver will see it: forbidden cells as `D`,
/// synthetic padding cells as zeros.
pub fn write_matrix<W: Write>(w: &mut W, matrix: &CostMatrix) -> Result<()> {
    let size = matrix.nrows().max(matrix.ncols());
    if matrix.is_square() {
        writeln!(w, "Cost matrix ({}x{}):", matrix.nrows(), matrix.ncols())?;
    } else {
        writeln!(
            w,
            "Cost matrix ({}x{}, padded to {}x{}):",
            matrix.nrows(),
            matrix.ncols(),
            size,
            size
        )?;
    }

    for row in 0..size {
        write!(w, "[")?;
        for col in 0..size {
            if col > 0 {
                write!(w, ", ")?;
            }
            if row < matrix.nrows() && col < matrix.ncols() {
                let cell = matrix.at(row, col);
                if cell.forbidden {
                    write!(w, "D")?;
                } else {
                    write!(w, "{:.4}", cell.value)?;
                }
            } else {
                write!(w, "{:.4}", 0.0)?;
            }
        }
        writeln!(w, "]")?;
    }
    writeln!(w)?;

    Ok(())
}

pub fn write_report<W: Write>(w: &mut W, report: &SolveReport, verbosity: Verbosity) -> Result<()> {
    if verbosity != Verbosity::Quiet {
        for pair in &report.pairs {
            writeln!(w, "row {} -> col {}  cost {:.4}", pair.row, pair.col, pair.cost)?;
        }
    }

    let expected = report.rows.min(report.cols);
    if report.complete {
        writeln!(
            w,
            "assigned {} of {}; total cost {:.4}",
            report.assigned, expected, report.total_cost
        )?;
    } else {
        writeln!(
            w,
            "assigned {} of {} (partial); total cost {:.4}",
            report.assigned, expected, report.total_cost
        )?;
    }

    Ok(())
}
