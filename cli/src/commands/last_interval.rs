//! Last-interval command implementation

use anyhow::{Context, Result};
use bopmeter_shared::metrics::{self, Arch};
use bopmeter_shared::parser::{self, ColumnLayout};
use bopmeter_shared::render;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub struct LastIntervalArgs {
    /// perf CSV trace file
    pub trace: PathBuf,

    /// Architecture tag (x86 or arm)
    pub arch: String,
}

pub fn run(args: &LastIntervalArgs) -> Result<String> {
    let arch: Arch = args.arch.parse()?;
    let samples = parser::parse_trace(&args.trace, ColumnLayout::Fixed)?;
    debug!("Parsed {} samples from {}", samples.len(), args.trace.display());

    let report = metrics::interval::build_report(arch, &samples)?;
    render::to_json_block(&report).context("Failed to render report")
}
