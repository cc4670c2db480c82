//! Situation model types
//!
//! This module defines the plain data types shared by the situation stores.
//! All of them are serde-serializable so the renderer can consume snapshot
//! values directly.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Geographic coordinate of a sector centroid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// Liveness state of an ingestion source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceState {
    /// Fully synchronized with the source
    Synced,
    /// Actively streaming
    Active,
    /// Streaming but degraded by congestion
    Congested,
    /// Source is unreachable
    Offline,
}

/// Health record for a single ingestion source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceHealth {
    /// Unique source name
    pub source_name: String,
    /// Liveness state
    pub state: SourceState,
    /// Coverage percentage (0-100); zero iff state is Offline
    pub coverage_pct: u8,
}

/// Derived risk status tier for a sector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorStatus {
    /// Risk score below the warning threshold
    Stable,
    /// Risk score at or above the warning threshold
    Warning,
    /// Risk score at or above the critical threshold
    Critical,
}

impl SectorStatus {
    /// Get severity level (0-2, higher is worse)
    pub fn severity_level(&self) -> u8 {
        match self {
            SectorStatus::Stable => 0,
            SectorStatus::Warning => 1,
            SectorStatus::Critical => 2,
        }
    }

    /// Check if the tier demands operator attention
    pub fn is_critical(&self) -> bool {
        matches!(self, SectorStatus::Critical)
    }
}

/// A tracked geographic/administrative zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sector {
    /// Unique, stable sector key (e.g. "S-07")
    pub id: String,
    /// Human-readable sector name
    pub label: String,
    /// Current risk score (0-100)
    pub risk_score: u8,
    /// Status tier derived from the risk score
    pub status: SectorStatus,
    /// Number of mesh nodes reporting from this sector
    pub node_count: u32,
    /// Sector centroid position
    pub position: Coordinate,
}

/// A single telemetry log entry
///
/// Entries are immutable after insertion and ordered by their sequence
/// number, which is assigned at insertion and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    /// Monotonically increasing sequence number
    pub seq: u64,
    /// Entry timestamp (Unix epoch milliseconds)
    pub timestamp_ms: u64,
    /// Node that originated the event
    pub origin_node: String,
    /// Event message
    pub message: String,
}

/// Mission task priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskPriority {
    /// Routine task
    Normal,
    /// Elevated priority
    High,
    /// Highest priority, preempts all others in display order
    Critical,
}

impl TaskPriority {
    /// Get severity level (0-2, higher is more urgent)
    pub fn severity_level(&self) -> u8 {
        match self {
            TaskPriority::Normal => 0,
            TaskPriority::High => 1,
            TaskPriority::Critical => 2,
        }
    }
}

/// An operator-tracked mission task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionTask {
    /// Unique task identifier (e.g. "M-1")
    pub task_id: String,
    /// Task description
    pub description: String,
    /// Completion percentage (0-100); 100 is terminal
    pub progress_pct: u8,
    /// Current priority
    pub priority: TaskPriority,
}

impl MissionTask {
    /// Check whether the task is terminal (progress at 100%)
    pub fn is_terminal(&self) -> bool {
        self.progress_pct == 100
    }
}
