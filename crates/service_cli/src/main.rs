//! coprime-pi - π from the Density of Coprime Pairs
//!
//! Counts the coprime ordered pairs in `[1, N] x [1, N]` for the fixed
//! reference bound `N = 10000`, inverts `P(coprime) → 6/π²` and reports the
//! estimate together with the time the computation took.
//!
//! # Output
//!
//! ```text
//! calcPi: <seconds> seconds
//! N: 10000
//! pi: <estimate>
//! ```
//!
//! Logs go to stderr so stdout carries only the report.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the estimation engine.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coprime_estimator::{Enumeration, GcdKernel};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{CliConfig, LogLevel, OutputFormat};

/// Estimate π from the probability that two integers are coprime
#[derive(Parser, Debug)]
#[command(name = "coprime-pi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// GCD kernel (euclidean, binary)
    #[arg(long)]
    gcd: Option<GcdKernel>,

    /// Grid enumeration (full, symmetric)
    #[arg(long)]
    enumeration: Option<Enumeration>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COPRIME_PI_LOG_LEVEL")]
    log_level: Option<LogLevel>,
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Settings after merging defaults, the configuration file and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    log_level: LogLevel,
    kernel: GcdKernel,
    enumeration: Enumeration,
    format: OutputFormat,
}

/// Flags win over the file, the file over defaults; `--verbose` wins over any log level.
fn resolve(cli: &Cli, file: CliConfig) -> Settings {
    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        cli.log_level.unwrap_or(file.log_level)
    };

    Settings {
        log_level,
        kernel: cli.gcd.unwrap_or(file.gcd),
        enumeration: cli.enumeration.unwrap_or(file.enumeration),
        format: cli.format.unwrap_or(file.format),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file_config = CliConfig::load_or_default(cli.config.as_deref())?;

    let settings = resolve(&cli, file_config);
    init_tracing(settings.log_level);

    if let Some(path) = &cli.config {
        info!(path = %path.display(), "Configuration loaded");
    }

    commands::estimate::run(settings.kernel, settings.enumeration, settings.format)?;
    Ok(())
}
