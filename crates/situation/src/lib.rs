//! Situation-state aggregation model for the QuakeLens C2 surface.
//!
//! This crate contains the stores behind the command dashboard, decoupled
//! from any rendering framework:
//! - Source health registry for ingestion feeds
//! - Per-sector risk model with pure status classification
//! - Bounded, newest-first telemetry log
//! - Mission task queue with priority ordering
//! - Immutable composite situation snapshots
//!
//! Each store is independently synchronized; ingestion adapters write and
//! the renderer reads copy-on-read snapshots that never observe later
//! mutations.

pub mod catalog;
pub mod error;
pub mod missions;
pub mod model;
pub mod sectors;
pub mod snapshot;
pub mod sources;
pub mod telemetry;
pub mod types;

pub use error::{Result, SituationError};
pub use missions::MissionQueue;
pub use model::SituationModel;
pub use sectors::{classify, SectorRiskModel};
pub use snapshot::{SituationSnapshot, SituationSummary};
pub use sources::SourceHealthRegistry;
pub use telemetry::TelemetryLog;
pub use types::{
    Coordinate, LogEntry, MissionTask, Sector, SectorStatus, SourceHealth, SourceState,
    TaskPriority,
};
