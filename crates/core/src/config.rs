//! Configuration management for QuakeLens.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Risk classification thresholds for sector status tiers.
///
/// A sector scoring at or above `critical` is CRITICAL, at or above
/// `warning` (but below `critical`) is WARNING, and STABLE otherwise.
/// Boundary scores resolve to the stricter tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskThresholds {
    /// Lower bound of the WARNING tier (inclusive)
    pub warning: u8,
    /// Lower bound of the CRITICAL tier (inclusive)
    pub critical: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warning: 40,
            critical: 70,
        }
    }
}

impl RiskThresholds {
    /// Validate that thresholds satisfy `0 < warning < critical < 100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warning == 0 || self.warning >= self.critical || self.critical >= 100 {
            return Err(ConfigError::InvalidThresholds {
                warning: self.warning,
                critical: self.critical,
            });
        }
        Ok(())
    }
}

/// Top-level configuration for the situation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SituationConfig {
    /// Maximum number of retained telemetry log entries
    pub log_capacity: usize,
    /// Sector risk classification thresholds
    pub risk_thresholds: RiskThresholds,
}

impl Default for SituationConfig {
    fn default() -> Self {
        Self {
            log_capacity: 50,
            risk_thresholds: RiskThresholds::default(),
        }
    }
}

impl SituationConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.log_capacity));
        }
        self.risk_thresholds.validate()
    }
}
