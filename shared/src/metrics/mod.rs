//! Derived throughput metrics
//!
//! Samples are bucketed by timestamp and fed through architecture-specific
//! formulas. Two aggregation modes exist: a whole-trace cumulative total and
//! a rate over the final sampling interval.

pub mod arch;
pub mod cumulative;
pub mod interval;

pub use arch::Arch;

use crate::types::sample::{Sample, TimePoint};
use std::collections::HashMap;

/// Bucket samples by exact timestamp and sort buckets by ascending time
///
/// Input order decides overwrites within a bucket; output order is
/// chronological regardless of trace order.
pub fn chronological_points(samples: &[Sample]) -> Vec<TimePoint> {
    let mut points: Vec<TimePoint> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for sample in samples {
        let slot = *index.entry(sample.timestamp.to_bits()).or_insert_with(|| {
            points.push(TimePoint::new(sample.timestamp));
            points.len() - 1
        });
        points[slot].record(&sample.event, sample.value);
    }

    points.sort_by(|a, b| a.time.total_cmp(&b.time));
    points
}

/// Bucket consecutive samples sharing a timestamp, preserving trace order
///
/// A point is completed whenever the timestamp changes; a timestamp that
/// reappears later in the trace starts a new point.
pub fn interval_points(samples: &[Sample]) -> Vec<TimePoint> {
    let mut points: Vec<TimePoint> = Vec::new();

    for sample in samples {
        match points.last_mut() {
            Some(point) if point.time == sample.timestamp => {
                point.record(&sample.event, sample.value);
            }
            _ => {
                let mut point = TimePoint::new(sample.timestamp);
                point.record(&sample.event, sample.value);
                points.push(point);
            }
        }
    }

    points
}
