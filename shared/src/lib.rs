//! Shared types and trace processing for Bopmeter
//!
//! This crate contains the perf CSV trace parser, timestamp bucketing, the
//! architecture-specific throughput formulas, and the JSON report rendering
//! used by the command-line tool.

pub mod error;
pub mod metrics;
pub mod parser;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use error::MetricsError;
pub use metrics::Arch;
pub use types::{report::*, sample::*};
