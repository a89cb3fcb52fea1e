//! Scaling table CSV reader.
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_handling::{ScalingRow, ScalingTable};

/// Read the `materials,verify_latency_ms,query_latency_ms` table.
pub fn load_scaling<P: AsRef<Path>>(path: P) -> Result<ScalingTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open scaling table: {}", path.as_ref().display()))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<ScalingRow>().enumerate() {
        // Row numbers are 1-based and skip the header line.
        let row = record.with_context(|| {
            format!(
                "Failed to parse row {} of scaling table: {}",
                idx + 1,
                path.as_ref().display()
            )
        })?;
        rows.push(row);
    }

    let table = ScalingTable::from_rows(rows);
    log::debug!(
        "Loaded scaling table {} with {} rows",
        path.as_ref().display(),
        table.len()
    );
    Ok(table)
}
