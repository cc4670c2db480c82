//! Wall-clock helpers
//!
//! The situation stores take explicit timestamps so tests can inject a
//! clock; this module supplies the default wall-clock source.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Get current timestamp in milliseconds since Unix epoch
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis() as u64
}
