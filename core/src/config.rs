//! Configuration for the assignment solver.
//!
//! `SolveConfig` centralizes all numeric knobs so no tolerance or limit is
//! hardcoded inside the solver loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Absolute tolerance used by the zero tests during starring and priming.
    /// `0.0` demands exact zeros, which is only safe for integer-valued costs.
    pub zero_tolerance: f64,
    /// Upper bound on the padded problem size N = max(rows, cols).
    pub max_dimension: u32,
    /// Defensive cap on state-machine transitions for one solve.
    pub max_steps: u64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: 1e-6,
            max_dimension: 4_096,
            max_steps: 10_000_000,
        }
    }
}

impl SolveConfig {
    /// Default tolerance-based configuration, suitable for fractional costs.
    pub fn tolerant() -> Self {
        Self::default()
    }

    /// Exact zero comparison. Only safe when every reduction and adjustment
    /// stays exactly representable, e.g. integer-valued costs.
    pub fn exact() -> Self {
        Self {
            zero_tolerance: 0.0,
            ..Default::default()
        }
    }

    pub fn builder() -> SolveConfigBuilder {
        SolveConfigBuilder {
            inner: SolveConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zero_tolerance.is_finite() || self.zero_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.zero_tolerance,
            });
        }
        if self.max_dimension == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "max_dimension",
                value: 0,
            });
        }
        if self.max_steps == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "max_steps",
                value: 0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zero_tolerance must be finite and non-negative (got {value})")]
    InvalidTolerance { value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

#[derive(Debug, Clone)]
pub struct SolveConfigBuilder {
    inner: SolveConfig,
}

impl Default for SolveConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveConfigBuilder {
    pub fn new() -> Self {
        SolveConfig::builder()
    }

    pub fn zero_tolerance(mut self, value: f64) -> Self {
        self.inner.zero_tolerance = value;
        self
    }

    pub fn max_dimension(mut self, value: u32) -> Self {
        self.inner.max_dimension = value;
        self
    }

    pub fn max_steps(mut self, value: u64) -> Self {
        self.inner.max_steps = value;
        self
    }

    pub fn build(self) -> Result<SolveConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = SolveConfig::default();
        cfg.validate().expect("default config validates");
        assert_eq!(cfg.zero_tolerance, 1e-6);
        assert_eq!(cfg.max_dimension, 4_096);
    }

    #[test]
    fn serde_roundtrip_preserves_defaults() {
        let cfg = SolveConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize default config");
        let parsed: SolveConfig = serde_json::from_str(&json).expect("deserialize default config");
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: SolveConfig = serde_json::from_str("{}").expect("deserialize empty object");
        assert_eq!(parsed, SolveConfig::default());
    }

    #[test]
    fn builder_rejects_negative_tolerance() {
        let err = SolveConfig::builder()
            .zero_tolerance(-1.0)
            .build()
            .expect_err("negative tolerance must be rejected");
        assert!(matches!(err, ConfigError::InvalidTolerance { value } if value == -1.0));
    }

    #[test]
    fn builder_rejects_zero_limits() {
        let err = SolveConfig::builder()
            .max_dimension(0)
            .build()
            .expect_err("zero max_dimension must be rejected");
        assert!(matches!(
            err,
            ConfigError::NonPositiveLimit {
                field: "max_dimension",
                ..
            }
        ));
    }

    #[test]
    fn exact_preset_disables_tolerance() {
        let cfg = SolveConfig::exact();
        assert_eq!(cfg.zero_tolerance, 0.0);
        assert_eq!(cfg.max_dimension, SolveConfig::default().max_dimension);
    }
}
