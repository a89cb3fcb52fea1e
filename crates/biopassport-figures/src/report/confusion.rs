//! Detection accuracy per anomaly type: on-chain only vs. full verification.
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{self, BarSeries, Theme};
use super::{ChartKind, DrawResult, Figure};
use crate::data_handling::BenchmarkReport;
use crate::error::FigureError;

const Y_MAX: f64 = 110.0;
const REFERENCE_LINE: f64 = 100.0;
const BAR_WIDTH: f64 = 0.35;
const LEGEND_STRIP: f64 = 22.0;
const ON_CHAIN_LABEL: &str = "On-Chain Only";
const FULL_LABEL: &str = "Full Verification";

/// F1 scores in percent, one entry per on-chain anomaly type.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionSeries {
    pub anomaly_types: Vec<String>,
    pub on_chain_f1: Vec<f64>,
    pub full_f1: Vec<f64>,
}

impl ConfusionSeries {
    pub fn labels(&self) -> Vec<String> {
        self.anomaly_types.iter().map(|a| a.replace('_', " ")).collect()
    }
}

/// Pair every on-chain anomaly type with the full-verification result of the
/// same type.
pub fn confusion_series(report: &BenchmarkReport) -> Result<ConfusionSeries, FigureError> {
    let matrices = report.confusion_matrices()?;
    if matrices.on_chain.is_empty() {
        return Err(FigureError::EmptySeries("confusion"));
    }

    let mut series = ConfusionSeries {
        anomaly_types: Vec::with_capacity(matrices.on_chain.len()),
        on_chain_f1: Vec::with_capacity(matrices.on_chain.len()),
        full_f1: Vec::with_capacity(matrices.on_chain.len()),
    };

    for (idx, on_chain) in matrices.on_chain.iter().enumerate() {
        let full = matrices
            .full
            .iter()
            .find(|f| f.anomaly_type == on_chain.anomaly_type)
            .ok_or_else(|| FigureError::UnmatchedAnomaly(on_chain.anomaly_type.clone()))?;

        if matrices.full.get(idx).map(|f| &f.anomaly_type) != Some(&on_chain.anomaly_type) {
            log::warn!(
                "Full-verification results are not in on-chain order; matched '{}' by anomaly type",
                on_chain.anomaly_type
            );
        }

        series.anomaly_types.push(on_chain.anomaly_type.clone());
        series.on_chain_f1.push(on_chain.confusion_matrix.f1_score * 100.0);
        series.full_f1.push(full.confusion_matrix.f1_score * 100.0);
    }

    if matrices.full.len() > matrices.on_chain.len() {
        log::warn!(
            "Ignoring {} full-verification result(s) with no on-chain counterpart",
            matrices.full.len() - matrices.on_chain.len()
        );
    }

    Ok(series)
}

/// Rounded integer percentage shown above a bar; zero-height bars stay bare.
pub fn bar_label(value: f64) -> Option<String> {
    (value > 0.0).then(|| format!("{:.0}", value))
}

pub struct ConfusionFigure {
    pub series: ConfusionSeries,
}

impl Figure for ConfusionFigure {
    fn kind(&self) -> ChartKind {
        ChartKind::Confusion
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB> {
        let labels = self.series.labels();
        let x_range = style::category_range(labels.len());

        // Value labels fill the top of the fixed axis; the legend goes above the plot.
        let titled = root.titled("Detection Accuracy by Anomaly Type", theme.font(style::TITLE_PT))?;
        let (legend_strip, plot) = titled.split_vertically(theme.px(LEGEND_STRIP));
        style::draw_legend_row(
            &legend_strip,
            &[(ON_CHAIN_LABEL, style::PRIMARY_BLUE), (FULL_LABEL, style::SUCCESS_GREEN)],
            theme,
        )?;

        let mut chart = ChartBuilder::on(&plot)
            .margin(theme.px(10.0))
            .x_label_area_size(theme.px(40.0))
            .y_label_area_size(theme.px(50.0))
            .build_cartesian_2d(x_range.clone(), 0.0..Y_MAX)?;

        style::draw_category_mesh(&mut chart, &labels, "Anomaly Type", "F1 Score (%)", theme)?;

        chart.draw_series(
            style::dashed_hline(x_range.start, x_range.end, REFERENCE_LINE, 40)
                .into_iter()
                .map(|segment| {
                    PathElement::new(segment.to_vec(), style::REFERENCE_GREY.mix(0.5))
                }),
        )?;

        let tops = style::draw_grouped_bars(
            &mut chart,
            &[
                BarSeries {
                    label: ON_CHAIN_LABEL,
                    values: &self.series.on_chain_f1,
                    color: style::PRIMARY_BLUE,
                    outlined: true,
                },
                BarSeries {
                    label: FULL_LABEL,
                    values: &self.series.full_f1,
                    color: style::SUCCESS_GREEN,
                    outlined: true,
                },
            ],
            BAR_WIDTH,
            theme,
        )?;

        let label_font = theme
            .font(7.0)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let lift = theme.offset(3.0);
        for top in tops.iter().flatten() {
            if let Some(text) = bar_label(top.1) {
                chart.draw_series(std::iter::once(
                    EmptyElement::at(*top) + Text::new(text, (0, -lift), label_font.clone()),
                ))?;
            }
        }

        Ok(())
    }
}
