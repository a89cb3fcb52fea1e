//! Load the benchmark artifacts once and write every figure to disk.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::FigureConfig;
use crate::data_handling::{BenchmarkReport, ScalingTable};
use crate::io::{load_report, load_scaling};
use crate::report::ablation::{ablation_series, AblationFigure};
use crate::report::baselines::{baseline_series, BaselineFigure};
use crate::report::confusion::{confusion_series, ConfusionFigure};
use crate::report::latency::{latency_series, LatencyFigure};
use crate::report::scaling::{scaling_series, ScalingFigure};
use crate::report::throughput::{throughput_series, ThroughputFigure};
use crate::report::{ChartKind, DrawResult, Figure, OutputFormat, Theme};

/// Both input artifacts, read before any chart is drawn.
#[derive(Debug, Clone)]
pub struct BenchmarkInputs {
    pub report: BenchmarkReport,
    pub scaling: ScalingTable,
}

impl BenchmarkInputs {
    pub fn load(config: &FigureConfig) -> Result<Self> {
        let report_path = config.report_path();
        let scaling_path = config.scaling_path();
        log::info!("Reading benchmark report from {}", report_path.display());
        let report = load_report(&report_path)?;
        log::info!("Reading scaling table from {}", scaling_path.display());
        let scaling = load_scaling(&scaling_path)?;
        Ok(Self { report, scaling })
    }
}

/// Create the figure directory if it does not exist yet.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

fn draw_and_present<F: Figure, DB: DrawingBackend>(
    figure: &F,
    root: &DrawingArea<DB, Shift>,
    theme: &Theme,
) -> DrawResult<(), DB> {
    root.fill(&WHITE)?;
    figure.draw(root, theme)?;
    root.present()
}

/// Write `figure` as a vector and a raster file into `out_dir`.
///
/// Each drawing surface lives only for the duration of its own file.
pub fn save_figure<F: Figure>(figure: &F, out_dir: &Path, raster_dpi: u32) -> Result<Vec<PathBuf>> {
    let kind = figure.kind();
    let mut written = Vec::with_capacity(OutputFormat::ALL.len());

    for format in OutputFormat::ALL {
        let path = format.path_for(out_dir, kind);
        match format {
            OutputFormat::Vector => {
                let theme = Theme::vector();
                let root = SVGBackend::new(&path, theme.canvas_size(kind.size_inches()))
                    .into_drawing_area();
                draw_and_present(figure, &root, &theme)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            OutputFormat::Raster => {
                let theme = Theme::raster(raster_dpi);
                let root = BitMapBackend::new(&path, theme.canvas_size(kind.size_inches()))
                    .into_drawing_area();
                draw_and_present(figure, &root, &theme)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Build one chart from the loaded inputs and write both of its files.
pub fn render_chart(
    kind: ChartKind,
    inputs: &BenchmarkInputs,
    out_dir: &Path,
    raster_dpi: u32,
) -> Result<Vec<PathBuf>> {
    let context = || format!("Cannot build the {} figure", kind.file_stem());
    let report = &inputs.report;

    match kind {
        ChartKind::Confusion => {
            let series = confusion_series(report).with_context(context)?;
            save_figure(&ConfusionFigure { series }, out_dir, raster_dpi)
        }
        ChartKind::Scaling => {
            let series = scaling_series(&inputs.scaling).with_context(context)?;
            save_figure(&ScalingFigure { series }, out_dir, raster_dpi)
        }
        ChartKind::LatencyDistribution => {
            let series = latency_series(report).with_context(context)?;
            save_figure(&LatencyFigure { series }, out_dir, raster_dpi)
        }
        ChartKind::BaselineComparison => {
            let series = baseline_series(report).with_context(context)?;
            save_figure(&BaselineFigure { series }, out_dir, raster_dpi)
        }
        ChartKind::Ablation => {
            let series = ablation_series(report).with_context(context)?;
            save_figure(&AblationFigure { series }, out_dir, raster_dpi)
        }
        ChartKind::Throughput => {
            let series = throughput_series(report).with_context(context)?;
            save_figure(&ThroughputFigure { series }, out_dir, raster_dpi)
        }
    }
}
