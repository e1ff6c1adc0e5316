//! Error types for scheduler-core.

use thiserror::Error;

/// Errors raised when validating the interval configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base interval for '{response}' must be positive, got {base_hours}h")]
    NonPositiveBase {
        response: &'static str,
        base_hours: f64,
    },

    #[error("multiplier for '{response}' must not be negative, got {multiplier}")]
    NegativeMultiplier {
        response: &'static str,
        multiplier: f64,
    },
}
