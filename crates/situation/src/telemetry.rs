//! Telemetry log
//!
//! Append-only, capacity-bounded, time-ordered event stream behind the
//! dashboard's tactical telemetry feed. Ring-buffer semantics: when an
//! insertion overflows the capacity, the single oldest entry is evicted.

use crate::error::{Result, SituationError};
use crate::types::LogEntry;
use quakelens_core::time::current_timestamp_ms;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// Default number of retained entries
pub const DEFAULT_LOG_CAPACITY: usize = 50;

#[derive(Debug, Default)]
struct LogState {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
}

/// Thread-safe bounded telemetry log
///
/// Sequence numbers increase monotonically across the life of the log and
/// are never reused, including after eviction.
#[derive(Debug, Clone)]
pub struct TelemetryLog {
    capacity: usize,
    state: Arc<Mutex<LogState>>,
}

impl TelemetryLog {
    /// Create a log retaining at most `capacity` entries
    ///
    /// Fails with `InvalidConfig` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SituationError::InvalidConfig(
                "log capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            state: Arc::new(Mutex::new(LogState::default())),
        })
    }

    /// Get the configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an entry with an explicit timestamp
    ///
    /// Assigns the next sequence number and evicts the oldest entry if the
    /// insertion overflows the capacity. Returns the assigned sequence
    /// number.
    pub fn append(&self, origin_node: &str, message: &str, timestamp_ms: u64) -> u64 {
        let mut state = self.state.lock().unwrap();
        let seq = state.next_seq;
        state.next_seq += 1;

        state.entries.push_back(LogEntry {
            seq,
            timestamp_ms,
            origin_node: origin_node.to_string(),
            message: message.to_string(),
        });
        // Insertions are one-at-a-time, so one eviction is always enough
        if state.entries.len() > self.capacity {
            state.entries.pop_front();
        }
        trace!(seq, origin = origin_node, "telemetry appended");
        seq
    }

    /// Append an entry stamped with the current wall-clock time
    pub fn append_now(&self, origin_node: &str, message: &str) -> u64 {
        self.append(origin_node, message, current_timestamp_ms())
    }

    /// Get up to `limit` most-recent entries, newest first
    ///
    /// Fails with `InvalidRange` if `limit` is zero. Never returns more
    /// than the current size.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        if limit == 0 {
            return Err(SituationError::InvalidRange {
                field: "limit",
                value: 0,
            });
        }
        let state = self.state.lock().unwrap();
        Ok(state.entries.iter().rev().take(limit).cloned().collect())
    }

    /// Get all retained entries, newest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        let state = self.state.lock().unwrap();
        state.entries.iter().rev().cloned().collect()
    }

    /// Number of currently retained entries
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    /// Check whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LOG_CAPACITY,
            state: Arc::new(Mutex::new(LogState::default())),
        }
    }
}
