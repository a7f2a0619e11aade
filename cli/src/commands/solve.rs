use crate::output::{json, text};
use crate::OutputFormat;
use anyhow::Result;
use lapmatch::{build_report, Assignment, CostMatrix, SolveConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &str,
    format: OutputFormat,
    maximize: bool,
    exact: bool,
    tolerance: Option<f64>,
    quiet: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let matrix = super::load_matrix(path)?;

    let mut config = if exact {
        SolveConfig::exact()
    } else {
        SolveConfig::default()
    };
    if let Some(tol) = tolerance {
        config.zero_tolerance = tol;
        config.validate()?;
    }

    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if verbosity == Verbosity::Verbose && format == OutputFormat::Text {
        text::write_matrix(&mut handle, &matrix)?;
    }

    // The solver always minimizes; maximization negates costs on the way in
    // and negates the reported result back.
    let solved = if maximize {
        negate_assignment(negated(&matrix)?.solve(&config)?)
    } else {
        matrix.solve(&config)?
    };

    let report = build_report(&matrix, &solved);

    match format {
        OutputFormat::Text => text::write_report(&mut handle, &report, verbosity)?,
        OutputFormat::Json => json::write_report(&mut handle, &report)?,
    }
    handle.flush()?;

    if report.complete {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn negated(matrix: &CostMatrix) -> Result<CostMatrix> {
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
    Ok(CostMatrix::from_rows(&rows)?)
}

fn negate_assignment(mut assignment: Assignment) -> Assignment {
    for pair in &mut assignment.pairs {
        pair.cost = -pair.cost;
    }
    assignment.total_cost = -assignment.total_cost;
    assignment
}
