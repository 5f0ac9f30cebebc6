//! Estimate command implementation
//!
//! Runs the coprime-pair π estimator over the reference grid and writes the
//! result to stdout.

use serde::Serialize;
use std::io::Write;
use tracing::info;

use coprime_estimator::{Enumeration, EstimatorConfig, GcdKernel, PiEstimate, PiEstimator};

use crate::config::OutputFormat;
use crate::Result;

/// Grid bound used by every run.
pub const REFERENCE_BOUND: u64 = 10_000;

#[derive(Serialize)]
struct EstimateReport {
    bound: u64,
    gcd: &'static str,
    enumeration: &'static str,
    coprime_pairs: u64,
    total_pairs: u64,
    probability: f64,
    pi: f64,
    elapsed_secs: f64,
}

/// Run the estimate command
pub fn run(kernel: GcdKernel, enumeration: Enumeration, format: OutputFormat) -> Result<()> {
    info!("Starting estimation...");
    info!("  N: {}", REFERENCE_BOUND);
    info!("  GCD kernel: {}", kernel);
    info!("  Enumeration: {}", enumeration);

    let config = EstimatorConfig::builder()
        .bound(REFERENCE_BOUND)
        .gcd_kernel(kernel)
        .enumeration(enumeration)
        .build()?;
    let estimate = PiEstimator::new(config).estimate();

    info!(
        coprime_pairs = estimate.coprime_pairs,
        abs_error = estimate.abs_error(),
        "Estimation complete"
    );

    let rendered = match format {
        OutputFormat::Text => render_text(&estimate),
        OutputFormat::Json => render_json(&estimate, kernel, enumeration)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Three-line report: elapsed seconds, `N` and the estimate.
pub fn render_text(estimate: &PiEstimate) -> String {
    format!(
        "calcPi: {:.6} seconds\nN: {}\npi: {}\n",
        estimate.elapsed.as_secs_f64(),
        estimate.bound,
        estimate.pi
    )
}

/// Single-line JSON report.
pub fn render_json(
    estimate: &PiEstimate,
    kernel: GcdKernel,
    enumeration: Enumeration,
) -> Result<String> {
    let report = EstimateReport {
        bound: estimate.bound.get(),
        gcd: kernel.as_str(),
        enumeration: enumeration.as_str(),
        coprime_pairs: estimate.coprime_pairs,
        total_pairs: estimate.total_pairs,
        probability: estimate.probability,
        pi: estimate.pi,
        elapsed_secs: estimate.elapsed.as_secs_f64(),
    };
    Ok(serde_json::to_string(&report)? + "\n")
}
