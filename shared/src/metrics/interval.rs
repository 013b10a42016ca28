//! Final-interval BOPs and GFLOPS rates
//!
//! Uses only the last two timestamps of the trace: their spacing is the
//! interval duration, and the final point's counters become rates.

use super::{interval_points, Arch};
use crate::error::MetricsError;
use crate::types::report::{Gflops, IntervalReport};
use crate::types::sample::Sample;

/// Counts are per sampling interval; rates are reported in billions per second
const GIGA: f64 = 1e9;

/// Build the last-interval report for a parsed trace
pub fn build_report(arch: Arch, samples: &[Sample]) -> Result<IntervalReport, MetricsError> {
    if samples.is_empty() {
        return Err(MetricsError::NoData);
    }

    let points = interval_points(samples);
    let [.., previous, last] = points.as_slice() else {
        return Err(MetricsError::NotEnoughPoints);
    };

    let duration = last.time - previous.time;
    if duration <= 0.0 {
        return Err(MetricsError::NonPositiveDuration(duration));
    }

    let scale = duration * GIGA;
    let gflops = match arch.flop_count(last) {
        Some(flops) => Gflops::PerSecond(flops / scale),
        None => Gflops::NotAvailable,
    };

    Ok(IntervalReport {
        arch: arch.as_str().to_string(),
        interval_duration: duration,
        bops: arch.bops_count(last) / scale,
        gflops,
    })
}
