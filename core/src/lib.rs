//! lapmatch: minimum-cost bipartite assignment over cost matrices.
//!
//! This crate provides:
//! - Solving the assignment problem (Hungarian/Munkres) for square and
//!   rectangular real-valued cost matrices
//! - Forbidden pairings via an explicit per-cell flag, never a sentinel value
//! - Typed failure results for infeasible instances
//! - JSON serialization of solve reports
//!
//! # Quick Start
//!
//! ```
//! use lapmatch::{CostMatrix, SolveConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = CostMatrix::from_values(&[
//!     vec![400.0, 150.0, 400.0],
//!     vec![400.0, 450.0, 600.0],
//!     vec![300.0, 225.0, 300.0],
//! ])?;
//!
//! let assignment = matrix.solve(&SolveConfig::default())?;
//! assert_eq!(assignment.total_cost, 850.0);
//! # Ok(())
//! # }
//! ```
//!
//! The solver always minimizes; to maximize, negate every finite cost
//! before solving and negate the returned total back.

mod config;
mod error_codes;
mod matrix;
mod output;
#[cfg(feature = "solve-metrics")]
pub mod perf;
mod solve;
mod solver;

pub use config::{ConfigError, SolveConfig, SolveConfigBuilder};
pub use matrix::{CostCell, CostMatrix, MatrixError};
pub use output::json::{SolveReport, build_report, serialize_assignment, serialize_report};
#[cfg(feature = "solve-metrics")]
pub use solve::solve_with_metrics;
pub use solve::{AssignedPair, Assignment, SolveError, solve};
