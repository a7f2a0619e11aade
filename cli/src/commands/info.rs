use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

pub fn run(path: &str) -> Result<ExitCode> {
    let matrix = super::load_matrix(path)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let rows = matrix.nrows();
    let cols = matrix.ncols();
    let total = rows as usize * cols as usize;
    let forbidden = matrix.forbidden_count();
    let size = rows.max(cols);

    writeln!(handle, "Matrix: {}", path)?;
    if matrix.is_square() {
        writeln!(handle, "Shape: {}x{} (square)", rows, cols)?;
    } else {
        writeln!(handle, "Shape: {}x{} (padded to {}x{} when solved)", rows, cols, size, size)?;
    }
    writeln!(
        handle,
        "Cells: {} total, {} forbidden ({:.1}%)",
        total,
        forbidden,
        100.0 * forbidden as f64 / total as f64
    )?;

    for row in 0..rows {
        let allowed = matrix.row(row).iter().filter(|c| !c.forbidden).count();
        if allowed == 0 {
            writeln!(handle, "  row {}: no assignable column", row)?;
        }
    }

    let unusable_rows = (0..rows)
        .filter(|&r| matrix.row(r).iter().all(|c| c.forbidden))
        .count();
    if unusable_rows == 0 {
        writeln!(handle, "Every row has at least one assignable column.")?;
    }

    Ok(ExitCode::SUCCESS)
}
