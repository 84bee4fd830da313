//! Driver and observer settings.
//!
//! Phase durations are deliberately absent: they are fixed by the timing
//! table. What can be configured is how long one time unit lasts for a
//! wall-clock driver and how much transition history is retained.
//!
//! Validation collects every violation instead of stopping at the first.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Longest accepted time unit.
pub const MAX_TIME_UNIT_MS: u64 = 60_000;

/// Runtime settings.
///
/// # Example
///
/// ```rust
/// use crosswalk::config::CrosswalkConfig;
///
/// let config = CrosswalkConfig::from_json_str(r#"{ "time_unit_ms": 250 }"#).unwrap();
/// assert_eq!(config.time_unit_ms, 250);
/// assert_eq!(config.history_capacity, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrosswalkConfig {
    /// Wall-clock length of one time unit, in milliseconds
    pub time_unit_ms: u64,
    /// Transition records kept by the history observer
    pub history_capacity: usize,
    /// Attach the logging observer
    pub log_signals: bool,
}

impl Default for CrosswalkConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: 1000,
            history_capacity: 64,
            log_signals: true,
        }
    }
}

impl CrosswalkConfig {
    /// Parse and validate JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![self.check_time_unit(), self.check_history()];
        Validation::all_vec(checks).map(|_| ())
    }

    /// Consume the config, returning it if valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    fn check_time_unit(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if (1..=MAX_TIME_UNIT_MS).contains(&self.time_unit_ms) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::TimeUnitOutOfRange {
                value: self.time_unit_ms,
                max: MAX_TIME_UNIT_MS,
            })
        }
    }

    fn check_history(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if self.history_capacity > 0 {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::EmptyHistory)
        }
    }
}
