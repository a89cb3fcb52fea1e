//! Benchmark report JSON reader.
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_handling::BenchmarkReport;

/// Read the benchmark report written by the harness.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<BenchmarkReport> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read benchmark report: {}", path.as_ref().display()))?;
    let report: BenchmarkReport = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse benchmark report: {}", path.as_ref().display()))?;

    log::debug!(
        "Loaded report {}: {} latency entries, {} baselines, {} ablations, {} throughput samples",
        path.as_ref().display(),
        report.latency.as_ref().map_or(0, |l| l.len()),
        report.baselines.as_ref().map_or(0, |b| b.len()),
        report.ablations.as_ref().map_or(0, |a| a.len()),
        report.throughput.as_ref().map_or(0, |t| t.len()),
    );
    Ok(report)
}
