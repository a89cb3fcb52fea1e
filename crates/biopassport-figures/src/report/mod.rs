//! The six benchmark figures.
//!
//! Each chart module exposes a `*_series` function that extracts plain data
//! from the loaded results and a figure type implementing [`Figure`] that draws
//! that data onto any plotters backend.
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::DrawingBackend;

pub mod ablation;
pub mod baselines;
pub mod confusion;
pub mod latency;
pub mod scaling;
pub mod style;
pub mod throughput;

pub use style::Theme;

/// Result of drawing onto a backend `DB`.
pub type DrawResult<T, DB> = Result<T, DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// The fixed set of figures, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Confusion,
    Scaling,
    LatencyDistribution,
    BaselineComparison,
    Ablation,
    Throughput,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Confusion,
        ChartKind::Scaling,
        ChartKind::LatencyDistribution,
        ChartKind::BaselineComparison,
        ChartKind::Ablation,
        ChartKind::Throughput,
    ];

    /// File name shared by the vector and raster outputs, without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Confusion => "confusion_f1_scores",
            ChartKind::Scaling => "scaling_o1",
            ChartKind::LatencyDistribution => "latency_distribution",
            ChartKind::BaselineComparison => "baseline_comparison",
            ChartKind::Ablation => "ablation_study",
            ChartKind::Throughput => "throughput",
        }
    }

    /// Figure size in inches.
    pub fn size_inches(self) -> (f64, f64) {
        match self {
            ChartKind::Confusion => (8.0, 4.0),
            ChartKind::Scaling => (6.0, 4.0),
            ChartKind::LatencyDistribution => (8.0, 4.0),
            ChartKind::BaselineComparison => (10.0, 4.0),
            ChartKind::Ablation => (7.0, 4.0),
            ChartKind::Throughput => (6.0, 4.0),
        }
    }

    pub fn output_paths(self, dir: &Path) -> [PathBuf; 2] {
        OutputFormat::ALL.map(|format| format.path_for(dir, self))
    }
}

/// Every figure is written once per format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Vector,
    Raster,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Vector, OutputFormat::Raster];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Vector => "svg",
            OutputFormat::Raster => "png",
        }
    }

    pub fn path_for(self, dir: &Path, kind: ChartKind) -> PathBuf {
        dir.join(format!("{}.{}", kind.file_stem(), self.extension()))
    }
}

/// A chart ready to be drawn.
pub trait Figure {
    fn kind(&self) -> ChartKind;

    /// Draw onto a white-filled root area. Sizes are taken from `theme`.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB>;
}
