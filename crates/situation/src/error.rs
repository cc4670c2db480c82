//! Situation model errors
//!
//! All errors are local validation failures on the calling operation.
//! A rejected mutation never leaves a partial write behind.

use thiserror::Error;

/// Errors produced by the situation stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SituationError {
    /// Health report for a source that was never registered
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    /// Operation on a sector id that does not exist
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    /// Operation on a task id that does not exist
    #[error("Unknown task: {0}")]
    UnknownTask(String),

    /// Sector registration with an id that already exists
    #[error("Duplicate sector: {0}")]
    DuplicateSector(String),

    /// Task creation with an id that already exists
    #[error("Duplicate task: {0}")]
    DuplicateTask(String),

    /// A value fell outside its permitted range
    #[error("Invalid range for {field}: {value}")]
    InvalidRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Progress regression attempted on a task already at 100%
    #[error("Task {0} is terminal: progress cannot regress below 100")]
    TerminalTask(String),

    /// Construction-time configuration failure
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for situation store operations
pub type Result<T> = std::result::Result<T, SituationError>;
