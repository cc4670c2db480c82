//! Sector risk model
//!
//! Holds per-sector metrics and derives each sector's status tier from its
//! risk score. The risk-to-status mapping lives in the pure [`classify`]
//! function so it can be tested without any store or renderer.

use crate::error::{Result, SituationError};
use crate::types::{Coordinate, Sector, SectorStatus};
use quakelens_core::RiskThresholds;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Classify a risk score into a status tier
///
/// Thresholds are inclusive at the lower bound of each tier, so exact
/// threshold scores resolve to the stricter tier: with defaults,
/// `classify(70) == Critical` and `classify(40) == Warning`.
pub fn classify(score: u8, thresholds: &RiskThresholds) -> SectorStatus {
    if score >= thresholds.critical {
        SectorStatus::Critical
    } else if score >= thresholds.warning {
        SectorStatus::Warning
    } else {
        SectorStatus::Stable
    }
}

/// Thread-safe store of sector risk state
///
/// Sectors are created at bootstrap from a fixed catalog and never deleted
/// during a session; only their risk score and node count change.
#[derive(Debug, Clone)]
pub struct SectorRiskModel {
    thresholds: RiskThresholds,
    sectors: Arc<Mutex<HashMap<String, Sector>>>,
}

impl SectorRiskModel {
    /// Create a model with default thresholds (warning 40, critical 70)
    pub fn new() -> Self {
        Self::with_thresholds(RiskThresholds::default())
    }

    /// Create a model with custom classification thresholds
    ///
    /// Fails with `InvalidConfig` unless `0 < warning < critical < 100`.
    pub fn with_validated_thresholds(thresholds: RiskThresholds) -> Result<Self> {
        thresholds
            .validate()
            .map_err(|e| SituationError::InvalidConfig(e.to_string()))?;
        Ok(Self::with_thresholds(thresholds))
    }

    fn with_thresholds(thresholds: RiskThresholds) -> Self {
        Self {
            thresholds,
            sectors: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the thresholds this model classifies with
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Register a sector with an initial risk score of zero
    ///
    /// Fails with `DuplicateSector` if the id already exists.
    pub fn register_sector(
        &self,
        id: &str,
        label: &str,
        initial_node_count: u32,
        position: Coordinate,
    ) -> Result<()> {
        let mut sectors = self.sectors.lock().unwrap();
        if sectors.contains_key(id) {
            return Err(SituationError::DuplicateSector(id.to_string()));
        }

        info!(sector = id, label, "registered sector");
        sectors.insert(
            id.to_string(),
            Sector {
                id: id.to_string(),
                label: label.to_string(),
                risk_score: 0,
                status: classify(0, &self.thresholds),
                node_count: initial_node_count,
                position,
            },
        );
        Ok(())
    }

    /// Update a sector's risk score and recompute its status tier
    ///
    /// Fails with `UnknownSector` before any value check. Scores above
    /// 100 are rejected with `InvalidRange` rather than clamped, so
    /// upstream ingestion bugs surface instead of hiding.
    pub fn update_risk(&self, id: &str, new_risk_score: u8) -> Result<()> {
        let mut sectors = self.sectors.lock().unwrap();
        let sector = sectors
            .get_mut(id)
            .ok_or_else(|| SituationError::UnknownSector(id.to_string()))?;

        if new_risk_score > 100 {
            return Err(SituationError::InvalidRange {
                field: "risk_score",
                value: new_risk_score as i64,
            });
        }

        sector.risk_score = new_risk_score;
        sector.status = classify(new_risk_score, &self.thresholds);
        if sector.status.is_critical() {
            warn!(sector = id, risk = new_risk_score, "sector entered CRITICAL tier");
        } else {
            debug!(sector = id, risk = new_risk_score, status = ?sector.status, "sector risk updated");
        }
        Ok(())
    }

    /// Adjust a sector's node count by a signed delta
    ///
    /// Fails with `InvalidRange` if the result would go negative or
    /// exceed `u32::MAX`; the stored count is unchanged on rejection.
    pub fn update_node_count(&self, id: &str, delta: i64) -> Result<()> {
        let mut sectors = self.sectors.lock().unwrap();
        let sector = sectors
            .get_mut(id)
            .ok_or_else(|| SituationError::UnknownSector(id.to_string()))?;

        // i128 holds any u32 + i64 sum without overflow
        let updated = sector.node_count as i128 + delta as i128;
        sector.node_count = u32::try_from(updated).map_err(|_| SituationError::InvalidRange {
            field: "node_count",
            value: updated.clamp(i64::MIN as i128, i64::MAX as i128) as i64,
        })?;
        Ok(())
    }

    /// Get an immutable copy of all sectors, most critical first
    ///
    /// Ordered by descending risk score, ties broken by ascending id. The
    /// renderer's "most critical first" display depends on this ordering.
    pub fn snapshot(&self) -> Vec<Sector> {
        let sectors = self.sectors.lock().unwrap();
        let mut out: Vec<Sector> = sectors.values().cloned().collect();
        out.sort_by(|a, b| {
            b.risk_score
                .cmp(&a.risk_score)
                .then_with(|| a.id.cmp(&b.id))
        });
        out
    }
}

impl Default for SectorRiskModel {
    fn default() -> Self {
        Self::new()
    }
}
