//! Whole-trace cumulative BOPs
//!
//! Sums the per-interval bottleneck-operation count across every timestamp
//! in the trace.

use super::{chronological_points, Arch};
use crate::error::MetricsError;
use crate::types::report::CumulativeReport;
use crate::types::sample::Sample;
use tracing::debug;

/// Build the cumulative report for a parsed trace
///
/// Only strictly positive per-interval counts accumulate: a counter reset or
/// multiplexing artifact can make an interval go negative, and such
/// intervals are discarded rather than subtracted.
pub fn build_report(
    arch: Arch,
    samples: &[Sample],
    interval: &str,
) -> Result<CumulativeReport, MetricsError> {
    if samples.is_empty() {
        return Err(MetricsError::NoData);
    }

    let points = chronological_points(samples);
    if points.is_empty() {
        return Err(MetricsError::NoTimestamps);
    }

    let mut total = 0.0;
    for point in &points {
        let step = arch.bops_count(point);
        if step > 0.0 {
            total += step;
        } else {
            debug!("Discarding non-positive step {} at t={}", step, point.time);
        }
    }

    Ok(CumulativeReport {
        arch: arch.as_str().to_string(),
        interval: interval.to_string(),
        bops: total as i64,
    })
}
