//! CLI for Bopmeter
//!
//! Derives throughput metrics from a perf counter trace. Two subcommands
//! cover the two report modes:
//! - cumulative: positive per-interval BOPs summed over the whole trace
//! - last-interval: BOPs/GFLOPS rates over the final sampling interval
//!
//! Reports and error payloads both go to stdout, where the benchmarking
//! harness reads them; logging goes to stderr.

use bopmeter_shared::render;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "bopmeter")]
#[command(about = "Derive BOPs/GFLOPS metrics from a perf counter trace", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum positive per-interval BOPs across the whole trace
    Cumulative(commands::cumulative::CumulativeArgs),

    /// Report BOPs and GFLOPS rates over the final sampling interval
    LastInterval(commands::last_interval::LastIntervalArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rendered = match cli.command {
        Commands::Cumulative(args) => commands::cumulative::run(&args),
        Commands::LastInterval(args) => commands::last_interval::run(&args),
    };

    match rendered {
        Ok(block) => {
            println!("{}", block);
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Run-level failures are part of the stdout contract too.
            println!("{}", render::error_payload(&format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
