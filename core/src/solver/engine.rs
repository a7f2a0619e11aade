//! The solving state machine.
//!
//! Each state handler performs one phase of the covering-based Hungarian
//! algorithm and returns the next state, or a typed error for the two
//! infeasibility conditions. The dispatch loop in [`Engine::run`] replaces
//! the classical numbered-step control flow with an explicit `Step` enum
//! and enforces the defensive transition cap.
//!
//! Every scan is row-major, top-to-bottom, left-to-right, first match wins.
//! That tie-break is observable: it decides which of several cost-equal
//! optimal assignments is returned.

use crate::config::SolveConfig;
#[cfg(feature = "solve-metrics")]
use crate::perf::{DualLabels, SolveMetrics};
use crate::solve::SolveError;
use crate::solver::marks::{CoverState, Mark, MarkMatrix};
use crate::solver::pad::PaddedProblem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    RowReduce,
    StarZeros,
    CoverColumns,
    FindZero,
    Augment { origin: (u32, u32) },
    Adjust,
    Done,
}

pub(crate) struct Engine<'a> {
    problem: &'a mut PaddedProblem,
    size: u32,
    tolerance: f64,
    marks: MarkMatrix,
    covers: CoverState,
    #[cfg(feature = "solve-metrics")]
    metrics: Option<&'a mut SolveMetrics>,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(problem: &'a mut PaddedProblem, config: &SolveConfig) -> Engine<'a> {
        let size = problem.size();
        Engine {
            problem,
            size,
            tolerance: config.zero_tolerance,
            marks: MarkMatrix::new(size),
            covers: CoverState::new(size),
            #[cfg(feature = "solve-metrics")]
            metrics: None,
        }
    }

    #[cfg(feature = "solve-metrics")]
    pub(crate) fn with_metrics(
        problem: &'a mut PaddedProblem,
        config: &SolveConfig,
        metrics: &'a mut SolveMetrics,
    ) -> Engine<'a> {
        let size = problem.size();
        metrics.dual_labels = Some(DualLabels::zeroed(size));
        let mut engine = Engine::new(problem, config);
        engine.metrics = Some(metrics);
        engine
    }

    pub(crate) fn into_marks(self) -> MarkMatrix {
        self.marks
    }

    /// Runs the machine to completion or to a typed failure.
    pub(crate) fn run(&mut self, max_steps: u64) -> Result<(), SolveError> {
        let mut step = Step::RowReduce;
        let mut transitions: u64 = 0;

        loop {
            transitions += 1;
            if transitions > max_steps {
                return Err(SolveError::StepLimitExceeded { limit: max_steps });
            }

            step = match step {
                Step::RowReduce => self.reduce_rows()?,
                Step::StarZeros => self.star_zeros(),
                Step::CoverColumns => self.cover_columns(),
                Step::FindZero => self.find_zero(),
                Step::Augment { origin } => self.augment(origin),
                Step::Adjust => self.adjust()?,
                Step::Done => {
                    #[cfg(feature = "solve-metrics")]
                    if let Some(m) = self.metrics.as_deref_mut() {
                        m.transitions = transitions;
                    }
                    return Ok(());
                }
            };
        }
    }

    /// Zero test shared by starring and priming. The same tolerance must be
    /// used by both phases or the machine can stall between them.
    fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.tolerance
    }

    /// Subtracts each row's minimum assignable value from that row.
    fn reduce_rows(&mut self) -> Result<Step, SolveError> {
        for row in 0..self.size {
            let mut min: Option<f64> = None;
            for col in 0..self.size {
                let cell = self.problem.working.at(row, col);
                if cell.forbidden {
                    continue;
                }
                min = Some(min.map_or(cell.value, |m: f64| m.min(cell.value)));
            }

            let Some(min) = min else {
                return Err(SolveError::UnsolvableRow { row });
            };

            for col in 0..self.size {
                let cell = self.problem.working.at_mut(row, col);
                if !cell.forbidden {
                    cell.value -= min;
                }
            }

            #[cfg(feature = "solve-metrics")]
            if let Some(m) = self.metrics.as_deref_mut() {
                if let Some(labels) = m.dual_labels.as_mut() {
                    labels.rows[row as usize] = min;
                }
            }
        }

        Ok(Step::StarZeros)
    }

    /// Greedily stars assignable zeros, at most one per row and column.
    fn star_zeros(&mut self) -> Step {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.covers.row_covered(row) || self.covers.col_covered(col) {
                    continue;
                }
                let cell = self.problem.working.at(row, col);
                if cell.forbidden || !self.is_zero(cell.value) {
                    continue;
                }
                self.marks.set(row, col, Mark::Starred);
                self.covers.cover_row(row);
                self.covers.cover_col(col);

                #[cfg(feature = "solve-metrics")]
                if let Some(m) = self.metrics.as_deref_mut() {
                    m.stars += 1;
                }
                break;
            }
        }
        self.covers.clear();
        Step::CoverColumns
    }

    /// Covers every starred column; a full cover means the matching is
    /// complete.
    fn cover_columns(&mut self) -> Step {
        let mut covered: u32 = 0;
        for col in 0..self.size {
            if self.marks.star_in_col(col).is_some() {
                self.covers.cover_col(col);
                covered += 1;
            }
        }

        if covered >= self.size {
            Step::Done
        } else {
            Step::FindZero
        }
    }

    /// Primes uncovered assignable zeros until one lands in a star-free row
    /// (the augmenting-path origin) or none remain.
    fn find_zero(&mut self) -> Step {
        while let Some((row, col)) = self.first_uncovered_zero() {
            self.marks.set(row, col, Mark::Primed);

            #[cfg(feature = "solve-metrics")]
            if let Some(m) = self.metrics.as_deref_mut() {
                m.primes += 1;
            }

            match self.marks.star_in_row(row) {
                Some(star_col) => {
                    self.covers.cover_row(row);
                    self.covers.uncover_col(star_col);
                }
                None => return Step::Augment { origin: (row, col) },
            }
        }
        Step::Adjust
    }

    fn first_uncovered_zero(&self) -> Option<(u32, u32)> {
        for row in 0..self.size {
            if self.covers.row_covered(row) {
                continue;
            }
            for col in 0..self.size {
                if self.covers.col_covered(col) {
                    continue;
                }
                let cell = self.problem.working.at(row, col);
                if !cell.forbidden && self.is_zero(cell.value) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Flips marks along the alternating prime/star path from `origin`,
    /// growing the matching by one, then resets covers and primes.
    fn augment(&mut self, origin: (u32, u32)) -> Step {
        let mut path = Vec::with_capacity(2 * self.size as usize + 1);
        path.push(origin);

        let mut col = origin.1;
        loop {
            let Some(star_row) = self.marks.star_in_col(col) else {
                break;
            };
            path.push((star_row, col));

            let Some(prime_col) = self.marks.prime_in_row(star_row) else {
                break;
            };
            path.push((star_row, prime_col));
            col = prime_col;
        }

        for &(r, c) in &path {
            let next = if self.marks.at(r, c) == Mark::Starred {
                Mark::None
            } else {
                Mark::Starred
            };
            self.marks.set(r, c, next);
        }

        self.covers.clear();
        self.marks.clear_primes();

        #[cfg(feature = "solve-metrics")]
        if let Some(m) = self.metrics.as_deref_mut() {
            m.augmentations += 1;
        }

        Step::CoverColumns
    }

    /// Shifts costs by the smallest uncovered assignable value: covered rows
    /// gain it, uncovered columns lose it. Forbidden cells are untouched, so
    /// their status and the true costs survive verbatim.
    fn adjust(&mut self) -> Result<Step, SolveError> {
        let mut delta: Option<f64> = None;
        for row in 0..self.size {
            if self.covers.row_covered(row) {
                continue;
            }
            for col in 0..self.size {
                if self.covers.col_covered(col) {
                    continue;
                }
                let cell = self.problem.working.at(row, col);
                if cell.forbidden {
                    continue;
                }
                delta = Some(delta.map_or(cell.value, |d: f64| d.min(cell.value)));
            }
        }

        let Some(delta) = delta else {
            return Err(SolveError::NoFeasibleAdjustment);
        };

        for row in 0..self.size {
            let row_covered = self.covers.row_covered(row);
            for col in 0..self.size {
                let col_covered = self.covers.col_covered(col);
                let cell = self.problem.working.at_mut(row, col);
                if cell.forbidden {
                    continue;
                }
                if row_covered {
                    cell.value += delta;
                }
                if !col_covered {
                    cell.value -= delta;
                }
            }
        }

        #[cfg(feature = "solve-metrics")]
        if let Some(m) = self.metrics.as_deref_mut() {
            m.adjustments += 1;
            m.delta_applied += delta;
            if let Some(labels) = m.dual_labels.as_mut() {
                for row in 0..self.size {
                    if self.covers.row_covered(row) {
                        labels.rows[row as usize] -= delta;
                    }
                }
                for col in 0..self.size {
                    if self.covers.col_covered(col) {
                        labels.cols[col as usize] += delta;
                    }
                }
            }
        }

        Ok(Step::FindZero)
    }
}
