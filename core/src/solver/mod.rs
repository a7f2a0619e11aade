//! Covering-based Hungarian solver pipeline.
//!
//! The pipeline is strictly Pad → state machine → Extract:
//!
//! 1. **Padding** (`pad.rs`): an R×C instance becomes an N×N square
//!    problem, N = max(R,C), with synthetic cells that are zero-cost in the
//!    working matrix and forbidden in the original.
//! 2. **State machine** (`engine.rs`): row reduction, zero starring, the
//!    covering test, zero priming, path augmentation, and dual adjustment,
//!    driven by an explicit `Step` dispatch loop.
//! 3. **Extraction** (`extract.rs`): starred cells inside the original
//!    rectangle become the result; costs come from the untouched original
//!    matrix.
//!
//! Every structure here is created per solve and sized to N; nothing is
//! shared between solves, so concurrent solves need no coordination.

mod engine;
mod extract;
mod marks;
mod pad;

use crate::config::SolveConfig;
use crate::matrix::CostMatrix;
#[cfg(feature = "solve-metrics")]
use crate::perf::SolveMetrics;
use crate::solve::{Assignment, SolveError};
use self::engine::Engine;
use self::pad::PaddedProblem;

pub(crate) fn run(matrix: &CostMatrix, config: &SolveConfig) -> Result<Assignment, SolveError> {
    let mut problem = PaddedProblem::new(matrix);
    let mut engine = Engine::new(&mut problem, config);
    engine.run(config.max_steps)?;
    let marks = engine.into_marks();
    Ok(extract::extract(&problem, &marks))
}

#[cfg(feature = "solve-metrics")]
pub(crate) fn run_with_metrics(
    matrix: &CostMatrix,
    config: &SolveConfig,
    metrics: &mut SolveMetrics,
) -> Result<Assignment, SolveError> {
    metrics.start();
    let mut problem = PaddedProblem::new(matrix);
    let mut engine = Engine::with_metrics(&mut problem, config, metrics);
    let outcome = engine.run(config.max_steps);
    let marks = engine.into_marks();
    metrics.finish();
    outcome?;
    Ok(extract::extract(&problem, &marks))
}
