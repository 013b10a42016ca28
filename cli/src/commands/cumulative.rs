//! Cumulative BOPs command implementation

use anyhow::{Context, Result};
use bopmeter_shared::metrics::{self, Arch};
use bopmeter_shared::parser::{self, ColumnLayout};
use bopmeter_shared::render;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub struct CumulativeArgs {
    /// perf CSV trace file
    pub trace: PathBuf,

    /// Architecture tag (x86 or arm)
    pub arch: String,

    /// Sampling interval label, echoed verbatim into the report
    #[arg(default_value = "1s")]
    pub interval: String,
}

pub fn run(args: &CumulativeArgs) -> Result<String> {
    let arch: Arch = args.arch.parse()?;
    let samples = parser::parse_trace(&args.trace, ColumnLayout::UnitAware)?;
    debug!("Parsed {} samples from {}", samples.len(), args.trace.display());

    let report = metrics::cumulative::build_report(arch, &samples, &args.interval)?;
    render::to_json_block(&report).context("Failed to render report")
}
