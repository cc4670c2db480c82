//! Core functionality for the QuakeLens situational-awareness system.
//!
//! This crate provides the configuration surface, structured logging
//! bootstrap, and shared utilities used by the situation-model crates.
//! It contains no domain logic of its own.

pub mod config;
pub mod error;
pub mod logging;
pub mod time;

pub use config::{RiskThresholds, SituationConfig};
pub use error::ConfigError;
