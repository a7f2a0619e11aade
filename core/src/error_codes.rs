//! Stable error codes attached to user-facing errors.
//!
//! Codes are part of the public contract: messages may be reworded, codes
//! may not be reused for a different condition.

pub const MATRIX_EMPTY: &str = "LAPMATCH_MATRIX_001";
pub const MATRIX_RAGGED_ROW: &str = "LAPMATCH_MATRIX_002";
pub const MATRIX_NON_FINITE: &str = "LAPMATCH_MATRIX_003";

pub const SOLVE_DIMENSION_EXCEEDED: &str = "LAPMATCH_SOLVE_001";
pub const SOLVE_UNSOLVABLE_ROW: &str = "LAPMATCH_SOLVE_002";
pub const SOLVE_NO_FEASIBLE_ADJUSTMENT: &str = "LAPMATCH_SOLVE_003";
pub const SOLVE_STEP_LIMIT: &str = "LAPMATCH_SOLVE_004";
