mod common;

use common::{assert_total, c, matrix_from, matrix_of, negated, pairs_of, solve_default, X};
use lapmatch::{build_report, serialize_report, SolveConfig, SolveError};
use std::collections::HashSet;

#[test]
fn square_matrix_assigns_every_row_and_column() {
    let m = matrix_of(&[&[7.0, 2.0, 9.0], &[4.0, 8.0, 3.0], &[6.0, 5.0, 1.0]]);
    let assignment = solve_default(&m);

    assert_eq!(assignment.len(), 3);
    let rows: HashSet<u32> = assignment.pairs.iter().map(|p| p.row).collect();
    let cols: HashSet<u32> = assignment.pairs.iter().map(|p| p.col).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(cols.len(), 3);
}

#[test]
fn tie_break_is_row_major_first_match() {
    // Every assignment of this matrix costs 2; the scan order decides.
    let m = matrix_of(&[&[1.0, 1.0], &[1.0, 1.0]]);
    let assignment = solve_default(&m);

    assert_eq!(pairs_of(&assignment), vec![(0, 0), (1, 1)]);
    assert_eq!(assignment.total_cost, 2.0);
}

#[test]
fn repeated_solves_return_identical_pairs() {
    let m = matrix_of(&[
        &[10.0, 10.0, 8.0, 11.0],
        &[9.0, 8.0, 1.0, 1.0],
        &[9.0, 7.0, 4.0, 10.0],
    ]);

    let first = solve_default(&m);
    let second = solve_default(&m);
    assert_eq!(first, second);
}

#[test]
fn known_square_minimum() {
    let m = matrix_of(&[
        &[400.0, 150.0, 400.0],
        &[400.0, 450.0, 600.0],
        &[300.0, 225.0, 300.0],
    ]);
    let assignment = solve_default(&m);

    assert_total(&assignment, 850.0);
    assert_eq!(pairs_of(&assignment), vec![(0, 1), (1, 0), (2, 2)]);
}

#[test]
fn negated_costs_select_complementary_maximum() {
    let m = matrix_of(&[
        &[400.0, 150.0, 400.0],
        &[400.0, 450.0, 600.0],
        &[300.0, 225.0, 300.0],
    ]);
    let max_run = solve_default(&negated(&m));

    assert_total(&max_run, -1225.0);
    assert_eq!(-max_run.total_cost, 1225.0);
}

#[test]
fn rectangular_matrix_minimizes_over_real_columns() {
    let m = matrix_of(&[
        &[10.0, 10.0, 8.0, 11.0],
        &[9.0, 8.0, 1.0, 1.0],
        &[9.0, 7.0, 4.0, 10.0],
    ]);
    let assignment = solve_default(&m);

    assert_eq!(assignment.len(), 3);
    assert_total(&assignment, 15.0);
    for pair in &assignment.pairs {
        assert!(pair.row < 3 && pair.col < 4);
    }
}

#[test]
fn rectangular_total_matches_exhaustive_optimum() {
    let values: &[&[f64]] = &[
        &[10.0, 10.0, 8.0, 11.0],
        &[9.0, 8.0, 1.0, 1.0],
        &[9.0, 7.0, 4.0, 10.0],
    ];
    let assignment = solve_default(&matrix_of(values));
    assert!((assignment.total_cost - exhaustive_minimum(values)).abs() < 1e-9);
}

#[test]
fn more_rows_than_columns_assigns_column_count() {
    let m = matrix_of(&[
        &[0.8768, -1.0],
        &[-1.0, 0.8997],
        &[-1.0, -1.0],
        &[-1.0, -1.0],
        &[-1.0, -1.0],
        &[-1.0, -1.0],
        &[-1.0, -1.0],
    ]);
    let assignment = solve_default(&m);

    assert_eq!(assignment.len(), 2);
    assert!(assignment.is_complete_for(&m));
    assert_total(&assignment, -2.0);
}

#[test]
fn entirely_forbidden_row_is_unsolvable() {
    let m = matrix_from(&[&[c(1.0), c(2.0)], &[X, X]]);
    let err = m.solve(&SolveConfig::default()).expect_err("infeasible row");

    assert_eq!(err, SolveError::UnsolvableRow { row: 1 });
    assert_eq!(err.code(), "LAPMATCH_SOLVE_002");
}

#[test]
fn forbidden_diagonal_forces_assignment() {
    let m = matrix_from(&[
        &[c(1.0), X, X, X],
        &[X, c(2.0), X, X],
        &[X, X, c(3.0), X],
        &[X, X, X, c(4.0)],
    ]);
    let assignment = solve_default(&m);

    assert_eq!(pairs_of(&assignment), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    assert_total(&assignment, 10.0);
}

#[test]
fn blocked_matching_reports_no_feasible_adjustment() {
    // Both rows can only use column 0, so no complete matching exists even
    // though every row has an assignable cell.
    let m = matrix_from(&[&[c(1.0), X], &[c(2.0), X]]);
    let err = m.solve(&SolveConfig::default()).expect_err("blocked matching");

    assert_eq!(err, SolveError::NoFeasibleAdjustment);
    assert_eq!(err.code(), "LAPMATCH_SOLVE_003");
}

#[test]
fn dimension_bound_rejected_before_solving() {
    let m = matrix_of(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
    let config = SolveConfig::builder()
        .max_dimension(2)
        .build()
        .expect("valid config");

    let err = m.solve(&config).expect_err("dimension bound");
    assert_eq!(err, SolveError::DimensionExceeded { dim: 3, max: 2 });
    assert_eq!(err.code(), "LAPMATCH_SOLVE_001");
}

#[test]
fn step_cap_aborts_without_convergence() {
    let m = matrix_of(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let config = SolveConfig::builder()
        .max_steps(1)
        .build()
        .expect("valid config");

    let err = m.solve(&config).expect_err("step cap");
    assert_eq!(err, SolveError::StepLimitExceeded { limit: 1 });
    assert_eq!(err.code(), "LAPMATCH_SOLVE_004");
}

#[test]
fn exact_config_solves_integer_costs() {
    let m = matrix_of(&[
        &[400.0, 150.0, 400.0],
        &[400.0, 450.0, 600.0],
        &[300.0, 225.0, 300.0],
    ]);
    let assignment = m.solve(&SolveConfig::exact()).expect("integer costs");

    assert_total(&assignment, 850.0);
    assert_eq!(pairs_of(&assignment), vec![(0, 1), (1, 0), (2, 2)]);
}

#[test]
fn fractional_costs_solve_within_tolerance() {
    let m = matrix_of(&[
        &[10.1, 10.2, 8.3],
        &[9.4, 8.5, 1.6],
        &[9.7, 7.8, 4.9],
    ]);
    let assignment = solve_default(&m);
    assert_total(&assignment, 19.5);
}

#[test]
fn column_lookup_follows_pairs() {
    let m = matrix_of(&[&[1.0, 5.0], &[5.0, 1.0]]);
    let assignment = solve_default(&m);

    assert_eq!(assignment.column_of(0), Some(0));
    assert_eq!(assignment.column_of(1), Some(1));
    assert_eq!(assignment.column_of(7), None);
}

#[test]
fn report_reflects_shape_and_completeness() {
    let m = matrix_of(&[&[2.0, 9.0, 4.0], &[3.0, 1.0, 7.0]]);
    let assignment = solve_default(&m);
    let report = build_report(&m, &assignment);

    assert_eq!(report.rows, 2);
    assert_eq!(report.cols, 3);
    assert_eq!(report.assigned, 2);
    assert!(report.complete);

    let json = serialize_report(&report).expect("serialize report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("well-formed json");
    assert_eq!(value["assigned"], 2);
    assert_eq!(value["pairs"].as_array().map(|p| p.len()), Some(2));
}

/// Reference optimum by trying every injection of rows into columns.
fn exhaustive_minimum(values: &[&[f64]]) -> f64 {
    fn descend(values: &[&[f64]], row: usize, used: &mut [bool], acc: f64, best: &mut f64) {
        if row == values.len() {
            if acc < *best {
                *best = acc;
            }
            return;
        }
        for col in 0..values[row].len() {
            if used[col] {
                continue;
            }
            used[col] = true;
            descend(values, row + 1, used, acc + values[row][col], best);
            used[col] = false;
        }
    }

    let mut best = f64::MAX;
    let mut used = vec![false; values[0].len()];
    descend(values, 0, &mut used, 0.0, &mut best);
    best
}
