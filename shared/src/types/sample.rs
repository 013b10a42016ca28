//! Trace sample types
//!
//! These types represent rows of the profiler trace and the per-timestamp
//! buckets they are aggregated into.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the source trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the profiler started counting
    pub timestamp: f64,

    /// Hardware event name as spelled by the profiler
    pub event: String,

    /// Counter reading for this sampling interval
    pub value: f64,
}

/// All counter readings observed at one timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Timestamp shared by the readings
    pub time: f64,

    /// Event name to counter value; a later reading for the same event at
    /// the same timestamp overwrites the earlier one
    pub counters: HashMap<String, f64>,
}

impl TimePoint {
    /// Create an empty bucket at the given timestamp
    pub fn new(time: f64) -> Self {
        Self {
            time,
            counters: HashMap::new(),
        }
    }

    /// Record a counter reading
    pub fn record(&mut self, event: &str, value: f64) {
        self.counters.insert(event.to_string(), value);
    }

    /// Counter value with the missing-event fallback: hardware or firmware
    /// may omit an event entirely, and an absent counter reads as zero
    pub fn counter(&self, event: &str) -> f64 {
        self.counters.get(event).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_counter_reads_zero() {
        let point = TimePoint::new(1.0);
        assert_eq!(point.counter("inst_retired"), 0.0);
    }

    #[test]
    fn test_later_reading_overwrites() {
        let mut point = TimePoint::new(1.0);
        point.record("inst_retired", 100.0);
        point.record("inst_retired", 250.0);
        assert_eq!(point.counter("inst_retired"), 250.0);
    }
}
