//! Pass rate of malicious inputs with each security feature enabled and
//! disabled. A higher ablated pass rate means more false accepts.
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{self, BarSeries, Theme};
use super::{ChartKind, DrawResult, Figure};
use crate::data_handling::BenchmarkReport;
use crate::error::FigureError;

const BAR_WIDTH: f64 = 0.35;
const MIN_Y_MAX: f64 = 60.0;

/// Pass rates in percent, one entry per ablated feature.
#[derive(Debug, Clone, PartialEq)]
pub struct AblationSeries {
    pub features: Vec<String>,
    pub baseline_pct: Vec<f64>,
    pub ablated_pct: Vec<f64>,
}

impl AblationSeries {
    /// Percentage-point change per feature, rounded to one decimal.
    pub fn deltas(&self) -> Vec<f64> {
        self.baseline_pct
            .iter()
            .zip(&self.ablated_pct)
            .map(|(base, ablated)| ((ablated - base) * 10.0).round() / 10.0)
            .collect()
    }

    pub fn y_max(&self) -> f64 {
        let max = self
            .baseline_pct
            .iter()
            .chain(&self.ablated_pct)
            .fold(0.0_f64, |acc, &v| acc.max(v));
        MIN_Y_MAX.max(max * 1.3)
    }
}

pub fn ablation_series(report: &BenchmarkReport) -> Result<AblationSeries, FigureError> {
    let ablations = report.ablations()?;
    if ablations.is_empty() {
        return Err(FigureError::EmptySeries("ablation"));
    }

    Ok(AblationSeries {
        features: ablations.iter().map(|a| a.name.clone()).collect(),
        baseline_pct: ablations.iter().map(|a| a.baseline_pass_rate * 100.0).collect(),
        ablated_pct: ablations.iter().map(|a| a.ablated_pass_rate * 100.0).collect(),
    })
}

/// First annotation line above an ablated bar, e.g. `+40.0%`.
pub fn delta_label(delta: f64) -> String {
    format!("{:+.1}%", delta)
}

pub struct AblationFigure {
    pub series: AblationSeries,
}

impl Figure for AblationFigure {
    fn kind(&self) -> ChartKind {
        ChartKind::Ablation
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB> {
        let labels = &self.series.features;

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Ablation Study: Impact of Disabling Security Features",
                theme.font(style::TITLE_PT),
            )
            .margin(theme.px(10.0))
            .x_label_area_size(theme.px(40.0))
            .y_label_area_size(theme.px(50.0))
            .build_cartesian_2d(style::category_range(labels.len()), 0.0..self.series.y_max())?;

        style::draw_category_mesh(&mut chart, labels, "Security Feature", "Pass Rate (%)", theme)?;

        let tops = style::draw_grouped_bars(
            &mut chart,
            &[
                BarSeries {
                    label: "Full BioPassport",
                    values: &self.series.baseline_pct,
                    color: style::SUCCESS_GREEN,
                    outlined: true,
                },
                BarSeries {
                    label: "Feature Disabled",
                    values: &self.series.ablated_pct,
                    color: style::ALERT_RED,
                    outlined: true,
                },
            ],
            BAR_WIDTH,
            theme,
        )?;

        let font = theme
            .bold_font(8.0)
            .color(&style::ALERT_RED)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let lift = theme.offset(5.0);
        let line = theme.line_height(8.0);
        let ablated_tops = tops.last().cloned().unwrap_or_default();
        chart.draw_series(ablated_tops.into_iter().zip(self.series.deltas()).map(
            |(top, delta)| {
                EmptyElement::at(top)
                    + Text::new(delta_label(delta), (0, -lift - line), font.clone())
                    + Text::new("false accepts", (0, -lift), font.clone())
            },
        ))?;

        style::draw_legend(&mut chart, SeriesLabelPosition::UpperLeft, theme)
    }
}
