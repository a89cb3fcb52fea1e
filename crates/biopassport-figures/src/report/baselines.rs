//! Latency and security of the prototype against reference systems, as two
//! horizontal bar panels.
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{self, Theme};
use super::{ChartKind, DrawResult, Figure};
use crate::data_handling::BenchmarkReport;
use crate::error::FigureError;

/// Suffix marking a baseline whose numbers come from analysis, not a run.
pub const THEORETICAL_MARKER: &str = " [theoretical]";

const BAR_HEIGHT: f64 = 0.8;

/// Baseline name as shown on the axis, with the theoretical marker shortened
/// to an asterisk.
pub fn short_name(name: &str) -> String {
    name.replace(THEORETICAL_MARKER, "*")
}

pub fn latency_label(latency_ms: f64) -> String {
    format!("{:.1}ms", latency_ms)
}

/// Scores are printed as given: whole numbers without a fraction.
pub fn security_label(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}%", score)
    } else {
        format!("{}%", score)
    }
}

pub fn bar_color(idx: usize) -> RGBColor {
    style::BASELINE_PALETTE[idx % style::BASELINE_PALETTE.len()]
}

/// One entry per baseline, in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineSeries {
    pub names: Vec<String>,
    pub latency_p50_ms: Vec<f64>,
    pub throughput_ops: Vec<f64>,
    pub security_scores: Vec<f64>,
}

pub fn baseline_series(report: &BenchmarkReport) -> Result<BaselineSeries, FigureError> {
    let baselines = report.baselines()?;
    if baselines.is_empty() {
        return Err(FigureError::EmptySeries("baseline comparison"));
    }

    Ok(BaselineSeries {
        names: baselines.iter().map(|b| short_name(&b.name)).collect(),
        latency_p50_ms: baselines.iter().map(|b| b.latency_ms.p50).collect(),
        throughput_ops: baselines.iter().map(|b| b.throughput_ops).collect(),
        security_scores: baselines.iter().map(|b| b.security_score).collect(),
    })
}

pub struct BaselineFigure {
    pub series: BaselineSeries,
}

struct Panel<'p> {
    title: &'p str,
    x_desc: &'p str,
    values: &'p [f64],
    labels: Vec<String>,
    x_max: f64,
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    names: &[String],
    panel: Panel<'_>,
    theme: &Theme,
) -> DrawResult<(), DB> {
    let n = names.len();
    // First baseline on top: row i sits at y = n - 1 - i.
    let top_down: Vec<String> = names.iter().rev().cloned().collect();
    let row = |i: usize| (n - 1 - i) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, theme.font(style::TITLE_PT))
        .margin(theme.px(10.0))
        .x_label_area_size(theme.px(40.0))
        .y_label_area_size(theme.px(120.0))
        .build_cartesian_2d(0.0..panel.x_max, style::category_range(n))?;

    let formatter = |y: &f64| style::category_label(&top_down, *y);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .y_labels(n + 1)
        .y_label_formatter(&formatter)
        .x_desc(panel.x_desc)
        .label_style(theme.font(style::TICK_PT))
        .axis_desc_style(theme.font(style::AXIS_LABEL_PT))
        .draw()?;

    let bars: Vec<[(f64, f64); 2]> = panel
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            [
                (0.0, row(i) - BAR_HEIGHT / 2.0),
                (v, row(i) + BAR_HEIGHT / 2.0),
            ]
        })
        .collect();

    chart.draw_series(
        bars.iter()
            .enumerate()
            .map(|(i, corners)| Rectangle::new(*corners, bar_color(i).filled())),
    )?;
    let stroke = theme.px(0.5);
    chart.draw_series(
        bars.iter()
            .map(|corners| Rectangle::new(*corners, BLACK.stroke_width(stroke))),
    )?;

    let font = theme
        .font(style::TICK_PT)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let gap = theme.offset(3.0);
    chart.draw_series(panel.values.iter().zip(panel.labels).enumerate().map(
        |(i, (&v, label))| EmptyElement::at((v, row(i))) + Text::new(label, (gap, 0), font.clone()),
    ))?;

    Ok(())
}

impl Figure for BaselineFigure {
    fn kind(&self) -> ChartKind {
        ChartKind::BaselineComparison
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB> {
        let panels = root.split_evenly((1, 2));
        let series = &self.series;

        let max_latency = series
            .latency_p50_ms
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        draw_panel(
            &panels[0],
            &series.names,
            Panel {
                title: "Latency Comparison",
                x_desc: "p50 Latency (ms)",
                values: &series.latency_p50_ms,
                labels: series.latency_p50_ms.iter().map(|&v| latency_label(v)).collect(),
                x_max: if max_latency > 0.0 { max_latency * 1.3 } else { 1.0 },
            },
            theme,
        )?;

        let max_score = series
            .security_scores
            .iter()
            .copied()
            .fold(100.0_f64, f64::max);
        draw_panel(
            &panels[1],
            &series.names,
            Panel {
                title: "Security Comparison",
                x_desc: "Security Score (%)",
                values: &series.security_scores,
                labels: series.security_scores.iter().map(|&v| security_label(v)).collect(),
                x_max: max_score * 1.15,
            },
            theme,
        )
    }
}
