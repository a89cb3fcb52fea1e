//! Operations per second against the number of concurrent clients.
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{self, Theme};
use super::{ChartKind, DrawResult, Figure};
use crate::data_handling::BenchmarkReport;
use crate::error::FigureError;

#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputSeries {
    pub concurrency: Vec<f64>,
    pub ops_per_second: Vec<f64>,
    /// Index of the first sample reaching the maximum rate.
    pub peak: usize,
}

impl ThroughputSeries {
    pub fn peak_point(&self) -> (f64, f64) {
        (self.concurrency[self.peak], self.ops_per_second[self.peak])
    }

    pub fn x_range(&self) -> std::ops::Range<f64> {
        let lo = self.concurrency.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self.concurrency.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
        (lo - pad)..(hi + pad)
    }

    /// Headroom above the peak leaves space for its annotation.
    pub fn y_max(&self) -> f64 {
        let (_, peak) = self.peak_point();
        if peak > 0.0 {
            peak * 1.25
        } else {
            1.0
        }
    }
}

/// Index of the first occurrence of the largest value.
pub fn first_max_index(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, &v)| match best {
            Some((_, max)) if v <= max => best,
            _ => Some((idx, v)),
        })
        .map(|(idx, _)| idx)
}

pub fn peak_label(ops_per_second: f64) -> String {
    format!("Peak: {:.1} ops/s", ops_per_second)
}

pub fn throughput_series(report: &BenchmarkReport) -> Result<ThroughputSeries, FigureError> {
    let samples = report.throughput()?;
    let ops_per_second: Vec<f64> = samples.iter().map(|s| s.ops_per_second).collect();
    let peak = first_max_index(&ops_per_second).ok_or(FigureError::EmptySeries("throughput"))?;

    Ok(ThroughputSeries {
        concurrency: samples.iter().map(|s| s.concurrency as f64).collect(),
        ops_per_second,
        peak,
    })
}

pub struct ThroughputFigure {
    pub series: ThroughputSeries,
}

impl Figure for ThroughputFigure {
    fn kind(&self) -> ChartKind {
        ChartKind::Throughput
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB> {
        let series = &self.series;
        let x_range = series.x_range();

        let mut chart = ChartBuilder::on(root)
            .caption("Throughput vs Concurrency", theme.font(style::TITLE_PT))
            .margin(theme.px(10.0))
            .x_label_area_size(theme.px(40.0))
            .y_label_area_size(theme.px(55.0))
            .build_cartesian_2d(x_range.clone(), 0.0..series.y_max())?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.15))
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .x_desc("Concurrent Clients")
            .y_desc("Operations per Second")
            .label_style(theme.font(style::TICK_PT))
            .axis_desc_style(theme.font(style::AXIS_LABEL_PT))
            .draw()?;

        let points: Vec<(f64, f64)> = series
            .concurrency
            .iter()
            .copied()
            .zip(series.ops_per_second.iter().copied())
            .collect();

        chart.draw_series(AreaSeries::new(
            points.iter().copied(),
            0.0,
            style::PRIMARY_BLUE.mix(0.2),
        ))?;
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            style::PRIMARY_BLUE.stroke_width(theme.px(2.0)),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, theme.px(5.0), style::PRIMARY_BLUE.filled())),
        )?;

        // Point the annotation back towards the middle of the plot so it
        // stays inside the drawing area.
        let peak = series.peak_point();
        let leftwards = peak.0 > (x_range.start + x_range.end) / 2.0;
        let reach = theme.offset(18.0);
        let dx = if leftwards { -reach } else { reach };
        let anchor = if leftwards { HPos::Right } else { HPos::Left };
        let font = theme
            .bold_font(style::TICK_PT)
            .color(&BLACK)
            .pos(Pos::new(anchor, VPos::Bottom));
        let arrow = style::REFERENCE_GREY.stroke_width(theme.px(1.0));
        let head = theme.offset(4.0);
        let tip = theme.offset(4.0);
        let tip_x = if leftwards { -tip } else { tip };
        let head_x = if leftwards { -head } else { head };

        chart.draw_series(std::iter::once(
            EmptyElement::at(peak)
                + PathElement::new(vec![(dx, -reach), (tip_x, -tip)], arrow)
                + PathElement::new(
                    vec![(tip_x + head_x, -tip), (tip_x, -tip), (tip_x, -tip - head)],
                    arrow,
                )
                + Text::new(peak_label(peak.1), (dx, -reach), font),
        ))?;

        Ok(())
    }
}
