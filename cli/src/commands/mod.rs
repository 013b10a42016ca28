//! CLI subcommands

pub mod cumulative;
pub mod last_interval;
