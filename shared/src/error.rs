//! Run-level error type
//!
//! Row-level problems in a trace are recovered by skipping the row; anything
//! in this enum aborts the whole run and is reported to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole run
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The trace file could not be opened
    #[error("failed to open trace {path}")]
    OpenTrace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trace contained no parseable rows
    #[error("no data parsed")]
    NoData,

    /// Rows were parsed but no timestamp bucket could be formed
    #[error("no timestamps found")]
    NoTimestamps,

    /// The last-interval computation needs at least two timestamps
    #[error("not enough data points")]
    NotEnoughPoints,

    /// The final two timestamps are not strictly increasing
    #[error("non-positive interval duration {0}")]
    NonPositiveDuration(f64),

    /// The architecture tag matched no known counter set
    #[error("unknown architecture {0:?} (expected \"x86\" or \"arm\")")]
    UnknownArch(String),
}
