//! Source health registry
//!
//! Tracks liveness and coverage of each ingestion source (satellite, UAV
//! swarm, citizen mesh, infrastructure feed). One entry per known source,
//! updated in place on each health report.

use crate::error::{Result, SituationError};
use crate::types::{SourceHealth, SourceState};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Thread-safe registry of ingestion source health
///
/// Entries keep their registration order, which is the order `snapshot`
/// returns them in.
#[derive(Debug, Clone, Default)]
pub struct SourceHealthRegistry {
    entries: Arc<Mutex<Vec<SourceHealth>>>,
}

impl SourceHealthRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source by name
    ///
    /// Idempotent: registering an already-known source is a no-op and does
    /// not disturb its current state or coverage. New sources start
    /// `Offline` with zero coverage.
    pub fn register_source(&self, name: &str) {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.source_name == name) {
            return;
        }
        debug!(source = name, "registered ingestion source");
        entries.push(SourceHealth {
            source_name: name.to_string(),
            state: SourceState::Offline,
            coverage_pct: 0,
        });
    }

    /// Overwrite a source's health report
    ///
    /// Fails with `UnknownSource` if the name was never registered and with
    /// `InvalidRange` if coverage is above 100 or violates the offline
    /// invariant: `Offline` requires zero coverage, every other state
    /// requires nonzero coverage. The unknown-source check runs first so
    /// a bad report from an unregistered feed is diagnosed as such. The
    /// entry is replaced as a single logical write.
    pub fn report_health(&self, name: &str, state: SourceState, coverage_pct: u8) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.source_name == name)
            .ok_or_else(|| SituationError::UnknownSource(name.to_string()))?;

        if coverage_pct > 100 {
            return Err(SituationError::InvalidRange {
                field: "coverage_pct",
                value: coverage_pct as i64,
            });
        }
        let offline = state == SourceState::Offline;
        if (offline && coverage_pct != 0) || (!offline && coverage_pct == 0) {
            warn!(
                source = name,
                ?state,
                coverage_pct,
                "rejected health report violating offline/coverage invariant"
            );
            return Err(SituationError::InvalidRange {
                field: "coverage_pct",
                value: coverage_pct as i64,
            });
        }

        entry.state = state;
        entry.coverage_pct = coverage_pct;
        debug!(source = name, ?state, coverage_pct, "source health updated");
        Ok(())
    }

    /// Get an immutable copy of all entries in registration order
    pub fn snapshot(&self) -> Vec<SourceHealth> {
        self.entries.lock().unwrap().clone()
    }
}
