//! Verification and query latency against the number of materials on chain,
//! contrasted with a linearly growing reference.
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::style::{self, Theme};
use super::{ChartKind, DrawResult, Figure};
use crate::data_handling::ScalingTable;
use crate::error::FigureError;

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingSeries {
    pub materials: Vec<f64>,
    pub verify_ms: Vec<f64>,
    pub query_ms: Vec<f64>,
    /// What verify latency would be if it grew linearly with chain size.
    pub linear_reference_ms: Vec<f64>,
}

impl ScalingSeries {
    /// Upper bound of the latency axis: 10% headroom over every plotted value.
    pub fn y_max(&self) -> f64 {
        let max = self
            .verify_ms
            .iter()
            .chain(&self.query_ms)
            .chain(&self.linear_reference_ms)
            .fold(0.0_f64, |acc, &v| acc.max(v));
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    /// Padded range of the logarithmic material axis.
    pub fn x_range(&self) -> std::ops::Range<f64> {
        let lo = self.materials.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self.materials.iter().copied().fold(0.0_f64, f64::max);
        (lo / 1.5)..(hi * 1.5)
    }
}

/// `anchor * materials[i] / materials[0]`: equal to `anchor` at the first row.
pub fn linear_reference(materials: &[u64], anchor: f64) -> Vec<f64> {
    match materials.first() {
        Some(&first) if first > 0 => materials
            .iter()
            .map(|&m| anchor * (m as f64 / first as f64))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn scaling_series(table: &ScalingTable) -> Result<ScalingSeries, FigureError> {
    if table.is_empty() {
        return Err(FigureError::EmptySeries("scaling"));
    }
    if let Some(&bad) = table.materials.iter().find(|&&m| m == 0) {
        return Err(FigureError::NonPositiveMaterials(bad));
    }

    Ok(ScalingSeries {
        materials: table.materials.iter().map(|&m| m as f64).collect(),
        verify_ms: table.verify_latency_ms.clone(),
        query_ms: table.query_latency_ms.clone(),
        linear_reference_ms: linear_reference(&table.materials, table.verify_latency_ms[0]),
    })
}

pub struct ScalingFigure {
    pub series: ScalingSeries,
}

impl ScalingFigure {
    fn points<'s>(&'s self, values: &'s [f64]) -> impl Iterator<Item = (f64, f64)> + 's {
        self.series.materials.iter().copied().zip(values.iter().copied())
    }
}

impl Figure for ScalingFigure {
    fn kind(&self) -> ChartKind {
        ChartKind::Scaling
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &Theme,
    ) -> DrawResult<(), DB> {
        let mut chart = ChartBuilder::on(root)
            .caption(
                "Verification Latency vs Chain Size",
                theme.font(style::TITLE_PT),
            )
            .margin(theme.px(10.0))
            .x_label_area_size(theme.px(40.0))
            .y_label_area_size(theme.px(50.0))
            .build_cartesian_2d(self.series.x_range().log_scale(), 0.0..self.series.y_max())?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.15))
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .x_desc("Number of Materials on Chain")
            .y_desc("Latency (ms)")
            .label_style(theme.font(style::TICK_PT))
            .axis_desc_style(theme.font(style::AXIS_LABEL_PT))
            .draw()?;

        let line = theme.px(2.0);
        let marker = theme.px(4.0);
        let legend_len = theme.offset(style::LEGEND_GLYPH);

        let verify_style = style::PRIMARY_BLUE.stroke_width(line);
        chart
            .draw_series(LineSeries::new(
                self.points(&self.series.verify_ms),
                verify_style,
            ))?
            .label("Verify Material")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], verify_style));
        chart.draw_series(
            self.points(&self.series.verify_ms)
                .map(|p| Circle::new(p, marker, style::PRIMARY_BLUE.filled())),
        )?;

        let query_style = style::ALERT_RED.stroke_width(line);
        chart
            .draw_series(LineSeries::new(
                self.points(&self.series.query_ms),
                query_style,
            ))?
            .label("Get History")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], query_style));
        let half = marker as i32;
        chart.draw_series(self.points(&self.series.query_ms).map(|p| {
            EmptyElement::at(p)
                + Rectangle::new([(-half, -half), (half, half)], style::ALERT_RED.filled())
        }))?;

        let reference_style = style::REFERENCE_GREY.mix(0.7).stroke_width(theme.px(1.0));
        let (dash, gap) = theme.reference_dash();
        let reference: Vec<(f64, f64)> = self.points(&self.series.linear_reference_ms).collect();
        chart
            .draw_series(DashedLineSeries::new(reference, dash, gap, reference_style))?
            .label("O(n) reference")
            .legend(move |(x, y)| {
                let half = legend_len / 2;
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(0, 0), (half - gap as i32, 0)], reference_style)
                    + PathElement::new(vec![(half, 0), (legend_len, 0)], reference_style)
            });

        style::draw_legend(&mut chart, SeriesLabelPosition::UpperLeft, theme)
    }
}
