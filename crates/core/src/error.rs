//! Core error types

use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Risk thresholds do not satisfy 0 < warning < critical < 100
    #[error("Invalid risk thresholds: warning={warning}, critical={critical} (must satisfy 0 < warning < critical < 100)")]
    InvalidThresholds {
        /// Lower (warning) threshold
        warning: u8,
        /// Upper (critical) threshold
        critical: u8,
    },

    /// Telemetry log capacity must be positive
    #[error("Invalid log capacity: {0} (must be positive)")]
    InvalidCapacity(usize),
}
