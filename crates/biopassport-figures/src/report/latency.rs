//! p50/p95/p99 latency of every benchmarked operation.
use plotters::coord::Shift;
use plotters::prelude::*;
use serde_json::{Map, Value};

use super::style::{self, BarSeries, Theme};
use super::{ChartKind, DrawResult, Figure};
use crate::data_handling::{BenchmarkReport, Percentiles};
use crate::error::FigureError;

const BAR_WIDTH: f64 = 0.25;

/// Short axis labels for the harness's operation names, applied in order.
pub const DISPLAY_NAMES: [(&str, &str); 6] = [
    ("registerMaterial", "Register"),
    ("issueCredential", "Issue Cred"),
    ("initiateTransfer", "Init Transfer"),
    ("acceptTransfer", "Accept Transfer"),
    ("verifyMaterialOnChain", "Verify (Chain)"),
    ("verifyMaterialFull", "Verify (Full)"),
];

pub fn display_name(operation: &str) -> String {
    DISPLAY_NAMES
        .iter()
        .fold(operation.to_string(), |name, &(from, to)| name.replace(from, to))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatencySeries {
    /// Display names, in report order.
    pub operations: Vec<String>,
    pub stats: Vec<Percentiles>,
}

impl LatencySeries {
    pub fn p50(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.p50).collect()
    }

    pub fn p95(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.p95).collect()
    }

    pub fn p99(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.p99).collect()
    }

    pub fn y_max(&self) -> f64 {
        let max = self
            .stats
            .iter()
            .map(|s| s.p50.max(s.p95).max(s.p99))
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            max * 1.15
        } else {
            1.0
        }
    }
}

fn percentile(
    operation: &str,
    stats: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, FigureError> {
    stats
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| FigureError::InvalidField {
            entry: operation.to_string(),
            field,
        })
}

/// Operations whose entry is a mapping with a `p50` field; other entries are
/// summary values and are skipped.
pub fn latency_series(report: &BenchmarkReport) -> Result<LatencySeries, FigureError> {
    let mut series = LatencySeries {
        operations: Vec::new(),
        stats: Vec::new(),
    };

    for (operation, entry) in report.latency()? {
        let Some(stats) = entry.as_object().filter(|o| o.contains_key("p50")) else {
            log::debug!("Skipping latency entry '{}' without percentiles", operation);
            continue;
        };
        series.operations.push(display_name(operation));
        series.stats.push(Percentiles {
            p50: percentile(operation, stats, "p50")?,
            p95: percentile(operation, stats, "p95")?,
            p99: percentile(operation, stats, "p99")?,
        });
    }

    if series.stats.is_empty() {
        return Err(FigureError::EmptySeries("latency distribution"));
    }
    Ok(series)
}

pub struct LatencyFigure {
    pub series: LatencySeries,
}

impl Figure for LatencyFigure {
    fn kind(&self) -> ChartKind {
        ChartKind::LatencyDistribution
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB> {
        let labels = &self.series.operations;

        let mut chart = ChartBuilder::on(root)
            .caption("Operation Latency Distribution", theme.font(style::TITLE_PT))
            .margin(theme.px(10.0))
            .x_label_area_size(theme.px(40.0))
            .y_label_area_size(theme.px(50.0))
            .build_cartesian_2d(style::category_range(labels.len()), 0.0..self.series.y_max())?;

        style::draw_category_mesh(&mut chart, labels, "Operation", "Latency (ms)", theme)?;

        let (p50, p95, p99) = (self.series.p50(), self.series.p95(), self.series.p99());
        style::draw_grouped_bars(
            &mut chart,
            &[
                BarSeries {
                    label: "p50",
                    values: &p50,
                    color: style::SUCCESS_GREEN,
                    outlined: false,
                },
                BarSeries {
                    label: "p95",
                    values: &p95,
                    color: style::WARNING_ORANGE,
                    outlined: false,
                },
                BarSeries {
                    label: "p99",
                    values: &p99,
                    color: style::ALERT_RED,
                    outlined: false,
                },
            ],
            BAR_WIDTH,
            theme,
        )?;

        style::draw_legend(&mut chart, SeriesLabelPosition::UpperRight, theme)
    }
}
