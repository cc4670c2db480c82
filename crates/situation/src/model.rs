//! Situation model facade
//!
//! Owns the four independently synchronized stores and wires the
//! configuration into them at construction. Ingestion adapters and the
//! operator control surface mutate through the store handles; the renderer
//! polls [`SituationModel::snapshot`].

use crate::error::{Result, SituationError};
use crate::missions::MissionQueue;
use crate::sectors::SectorRiskModel;
use crate::snapshot::SituationSnapshot;
use crate::sources::SourceHealthRegistry;
use crate::telemetry::TelemetryLog;
use quakelens_core::SituationConfig;

/// Top-level handle over the situation stores
#[derive(Debug, Clone)]
pub struct SituationModel {
    sources: SourceHealthRegistry,
    sectors: SectorRiskModel,
    telemetry: TelemetryLog,
    missions: MissionQueue,
}

impl SituationModel {
    /// Create a model from a validated configuration
    ///
    /// Fails with `InvalidConfig` if the thresholds or log capacity are
    /// out of range.
    pub fn new(config: SituationConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SituationError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            sources: SourceHealthRegistry::new(),
            sectors: SectorRiskModel::with_validated_thresholds(config.risk_thresholds)?,
            telemetry: TelemetryLog::new(config.log_capacity)?,
            missions: MissionQueue::new(),
        })
    }

    /// Create a model with the default configuration
    pub fn with_defaults() -> Self {
        Self {
            sources: SourceHealthRegistry::new(),
            sectors: SectorRiskModel::new(),
            telemetry: TelemetryLog::default(),
            missions: MissionQueue::new(),
        }
    }

    /// Source health registry handle
    pub fn sources(&self) -> &SourceHealthRegistry {
        &self.sources
    }

    /// Sector risk model handle
    pub fn sectors(&self) -> &SectorRiskModel {
        &self.sectors
    }

    /// Telemetry log handle
    pub fn telemetry(&self) -> &TelemetryLog {
        &self.telemetry
    }

    /// Mission queue handle
    pub fn missions(&self) -> &MissionQueue {
        &self.missions
    }

    /// Assemble an immutable composite snapshot of all four stores
    pub fn snapshot(&self) -> SituationSnapshot {
        SituationSnapshot::assemble(&self.sources, &self.sectors, &self.telemetry, &self.missions)
    }
}

impl Default for SituationModel {
    fn default() -> Self {
        Self::with_defaults()
    }
}
