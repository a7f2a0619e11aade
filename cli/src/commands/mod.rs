pub mod info;
pub mod solve;

use anyhow::{Context, Result};
use lapmatch::CostMatrix;
use serde::Deserialize;
use std::fs;

/// Matrix files are JSON: either a bare array of rows, or an object with a
/// `rows` field. `null` marks a forbidden pairing.
#[derive(Deserialize)]
#[serde(untagged)]
enum MatrixFile {
    Bare(Vec<Vec<Option<f64>>>),
    Wrapped { rows: Vec<Vec<Option<f64>>> },
}

pub(crate) fn load_matrix(path: &str) -> Result<CostMatrix> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read matrix file: {}", path))?;

    let parsed: MatrixFile = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse matrix file: {}", path))?;

    let rows = match parsed {
        MatrixFile::Bare(rows) => rows,
        MatrixFile::Wrapped { rows } => rows,
    };

    let matrix =
        CostMatrix::from_rows(&rows).with_context(|| format!("Invalid matrix in {}", path))?;
    Ok(matrix)
}
