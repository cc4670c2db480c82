//! Situation snapshot assembly
//!
//! Composes the four stores' snapshots into a single immutable value, the
//! only object the renderer consumes. Assembly performs one atomic read
//! round per store; cross-store atomicity is intentionally not provided,
//! matching the loosely-coupled nature of the aggregates. A deployment
//! that needs stronger consistency can serialize callers around the whole
//! assembly.

use crate::missions::MissionQueue;
use crate::sectors::SectorRiskModel;
use crate::sources::SourceHealthRegistry;
use crate::telemetry::TelemetryLog;
use crate::types::{LogEntry, MissionTask, Sector, SectorStatus, SourceHealth, SourceState};
use quakelens_core::time::current_timestamp_ms;
use serde::{Deserialize, Serialize};

/// Aggregate counts for the dashboard's KPI row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SituationSummary {
    /// Number of sectors in the CRITICAL tier
    pub critical_sectors: usize,
    /// Number of sectors in the WARNING tier
    pub warning_sectors: usize,
    /// Number of sectors in the STABLE tier
    pub stable_sectors: usize,
    /// Sum of node counts across all sectors
    pub total_nodes: u64,
    /// Mean risk score across sectors (0.0 when no sectors exist)
    pub mean_risk: f64,
    /// City-wide stability index: 100 minus the mean risk
    pub stability_index: f64,
    /// Sources in a non-Offline state
    pub active_sources: usize,
    /// Tasks with progress below 100%
    pub tasks_in_progress: usize,
    /// Tasks at 100% progress
    pub tasks_complete: usize,
}

impl SituationSummary {
    fn compute(
        sectors: &[Sector],
        sources: &[SourceHealth],
        missions: &[MissionTask],
    ) -> Self {
        let critical_sectors = sectors
            .iter()
            .filter(|s| s.status == SectorStatus::Critical)
            .count();
        let warning_sectors = sectors
            .iter()
            .filter(|s| s.status == SectorStatus::Warning)
            .count();
        let stable_sectors = sectors.len() - critical_sectors - warning_sectors;
        let total_nodes = sectors.iter().map(|s| s.node_count as u64).sum();

        let mean_risk = if sectors.is_empty() {
            0.0
        } else {
            sectors.iter().map(|s| s.risk_score as f64).sum::<f64>() / sectors.len() as f64
        };

        let active_sources = sources
            .iter()
            .filter(|s| s.state != SourceState::Offline)
            .count();
        let tasks_complete = missions.iter().filter(|t| t.is_terminal()).count();

        Self {
            critical_sectors,
            warning_sectors,
            stable_sectors,
            total_nodes,
            mean_risk,
            stability_index: 100.0 - mean_risk,
            active_sources,
            tasks_in_progress: missions.len() - tasks_complete,
            tasks_complete,
        }
    }
}

/// Immutable, point-in-time composite view of the situation state
///
/// Fully materialized: consumers may hold it indefinitely without
/// observing later store mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SituationSnapshot {
    /// Sectors, most critical first
    pub sectors: Vec<Sector>,
    /// Source health entries in registration order
    pub sources: Vec<SourceHealth>,
    /// Retained telemetry entries, newest first
    pub log: Vec<LogEntry>,
    /// Mission tasks, most urgent first
    pub missions: Vec<MissionTask>,
    /// Aggregate KPI counts derived from the three lists above
    pub summary: SituationSummary,
    /// Assembly timestamp (Unix epoch milliseconds)
    pub generated_at_ms: u64,
}

impl SituationSnapshot {
    /// Assemble a snapshot from the four stores
    ///
    /// Each store is read exactly once; the per-store read is atomic but
    /// writes landing between reads of different stores may or may not be
    /// included.
    pub fn assemble(
        sources: &SourceHealthRegistry,
        sectors: &SectorRiskModel,
        log: &TelemetryLog,
        missions: &MissionQueue,
    ) -> Self {
        let sectors = sectors.snapshot();
        let sources = sources.snapshot();
        let log = log.snapshot();
        let missions = missions.snapshot();
        let summary = SituationSummary::compute(&sectors, &sources, &missions);

        Self {
            sectors,
            sources,
            log,
            missions,
            summary,
            generated_at_ms: current_timestamp_ms(),
        }
    }
}
