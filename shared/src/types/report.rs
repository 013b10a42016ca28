//! Report types emitted to the benchmarking harness
//!
//! Field declaration order is part of the output contract: the harness
//! parses the emitted JSON block literally, so it must not change.

use serde::{Serialize, Serializer};

/// Whole-trace report: positive per-interval BOPs summed across the run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeReport {
    /// Architecture tag the formulas were keyed by
    pub arch: String,

    /// User-supplied sampling interval label, echoed verbatim
    pub interval: String,

    /// Total bottleneck operations, truncated to an integer
    #[serde(rename = "BOPs")]
    pub bops: i64,
}

/// Final-interval report: rates normalized by the last sampling interval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalReport {
    pub arch: String,

    /// Seconds between the final two timestamps
    pub interval_duration: f64,

    /// Billions of bottleneck operations per second
    #[serde(rename = "BOPs")]
    pub bops: f64,

    /// Billions of floating-point operations per second
    #[serde(rename = "GFLOPS")]
    pub gflops: Gflops,
}

/// GFLOPS estimate, or `"N/A"` where the counters cannot express one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gflops {
    PerSecond(f64),
    NotAvailable,
}

impl Serialize for Gflops {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Gflops::PerSecond(value) => serializer.serialize_f64(*value),
            Gflops::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}
