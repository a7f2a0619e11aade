//! Optional solve instrumentation, compiled in with the `solve-metrics`
//! feature.
//!
//! Metrics are write-only from the engine's perspective: nothing in the
//! solving loop ever reads them back, so enabling the feature cannot change
//! which assignment is returned.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Per-row/column dual labels, tracked alongside reduction and adjustment.
///
/// The covering-based algorithm does not need these for correctness; they
/// are diagnostics for comparing a run against the equivalent
/// linear-programming dual. Row labels start at the subtracted row minima,
/// then follow each adjustment (covered rows lose δ, covered columns
/// gain δ).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DualLabels {
    pub rows: Vec<f64>,
    pub cols: Vec<f64>,
}

impl DualLabels {
    pub fn zeroed(size: u32) -> DualLabels {
        DualLabels {
            rows: vec![0.0; size as usize],
            cols: vec![0.0; size as usize],
        }
    }
}

/// Counters and timings for one solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveMetrics {
    /// State-machine transitions executed.
    pub transitions: u64,
    /// Zeros starred during the initial greedy pass.
    pub stars: u64,
    /// Zeros primed while searching for augmenting paths.
    pub primes: u64,
    /// Augmenting paths applied.
    pub augmentations: u64,
    /// Dual adjustment rounds.
    pub adjustments: u64,
    /// Sum of all applied adjustment deltas.
    pub delta_applied: f64,
    /// Wall-clock time for the padded solve.
    pub total_time_ms: u64,
    /// Dual labels at the end of the run.
    pub dual_labels: Option<DualLabels>,
    #[serde(skip)]
    started: Option<Instant>,
}

impl SolveMetrics {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(started) = self.started.take() {
            self.total_time_ms += started.elapsed().as_millis() as u64;
        }
    }
}
