use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the inputs live, where figures go, and how dense the raster output is.
///
/// Relative `report_file`, `scaling_file` and `output_dir` are resolved against
/// `results_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub results_dir: PathBuf,
    pub report_file: PathBuf,
    pub scaling_file: PathBuf,
    pub output_dir: PathBuf,
    pub raster_dpi: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            report_file: PathBuf::from("benchmark-report.json"),
            scaling_file: PathBuf::from("scaling.csv"),
            output_dir: PathBuf::from("figures"),
            raster_dpi: 300,
        }
    }
}

impl FigureConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: FigureConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.raster_dpi == 0 {
            anyhow::bail!("raster_dpi must be greater than zero");
        }
        Ok(())
    }

    pub fn report_path(&self) -> PathBuf {
        self.results_dir.join(&self.report_file)
    }

    pub fn scaling_path(&self) -> PathBuf {
        self.results_dir.join(&self.scaling_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.results_dir.join(&self.output_dir)
    }
}
