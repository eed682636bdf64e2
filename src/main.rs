mod binner;
mod config;
mod correlate;
mod error;
mod manager;
mod reader;
mod report;
mod stats;

use crate::config::Config;
use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::Parser;
use std::{io::BufWriter, path::PathBuf};

/// Cross-correlate the packet throughput of two arrival-time traces.
///
/// Each trace holds one arrival timestamp (in milliseconds) per line,
/// sorted ascending. Arrivals are binned into BIN_DURATION-wide buckets and
/// the binned series are cross-correlated at lags of -1 to +1 minute.
/// Pass the same file twice to get the autocorrelation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Bin width in milliseconds.
    #[arg(allow_hyphen_values = true)]
    bin_duration: String,

    trace1: PathBuf,

    trace2: PathBuf,

    /// TOML file overriding the lag window and output precision.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        let program = std::env::args().next().unwrap_or_else(|| "xcor".to_string());
        eprintln!("{program}: {error:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    log::info!("{cfg:#?}");

    let mgr = Manager::new(cfg, &args.bin_duration).context("failed to construct mgr")?;

    let corr = mgr.correlate_traces(&args.trace1, &args.trace2)?;

    let mut writer = BufWriter::new(std::io::stdout().lock());
    mgr.write_results(&mut writer, &corr)?;

    Ok(())
}
