//! Publication style shared by every figure: fonts, palette and the small
//! drawing helpers the bar charts have in common.
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::{CoordTranslate, Shift};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::DrawResult;

/// Pixels per inch of the vector output. Raster output scales from this.
pub const VECTOR_DPI: u32 = 100;

pub const PRIMARY_BLUE: RGBColor = RGBColor(0x4A, 0x90, 0xD9);
pub const SUCCESS_GREEN: RGBColor = RGBColor(0x2E, 0xCC, 0x71);
pub const WARNING_ORANGE: RGBColor = RGBColor(0xF3, 0x9C, 0x12);
pub const ALERT_RED: RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
pub const NEUTRAL_GREY: RGBColor = RGBColor(0x95, 0xA5, 0xA6);
pub const REFERENCE_GREY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Bar colours of the baseline comparison, cycled when there are more bars.
pub const BASELINE_PALETTE: [RGBColor; 3] = [NEUTRAL_GREY, WARNING_ORANGE, SUCCESS_GREEN];

/// Font sizes in points.
pub const TITLE_PT: f64 = 12.0;
pub const AXIS_LABEL_PT: f64 = 11.0;
pub const TICK_PT: f64 = 9.0;
pub const LEGEND_PT: f64 = 9.0;

/// Width of a legend swatch or line sample, in vector pixels.
pub const LEGEND_GLYPH: f64 = 16.0;

/// Chart cartesian context used by every linear figure.
pub type LinearChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Converts the figure's nominal sizes into backend pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    scale: f64,
}

impl Theme {
    pub fn vector() -> Self {
        Self { scale: 1.0 }
    }

    pub fn raster(dpi: u32) -> Self {
        Self {
            scale: dpi as f64 / VECTOR_DPI as f64,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn canvas_size(&self, inches: (f64, f64)) -> (u32, u32) {
        let ppi = VECTOR_DPI as f64 * self.scale;
        (
            (inches.0 * ppi).round() as u32,
            (inches.1 * ppi).round() as u32,
        )
    }

    /// A length in vector pixels, scaled. Never collapses to zero.
    pub fn px(&self, length: f64) -> u32 {
        (length * self.scale).round().max(1.0) as u32
    }

    /// A signed pixel offset, scaled.
    pub fn offset(&self, length: f64) -> i32 {
        (length * self.scale).round() as i32
    }

    pub fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::Serif, self.font_px(points), FontStyle::Normal)
    }

    pub fn bold_font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::Serif, self.font_px(points), FontStyle::Bold)
    }

    /// Space reserved left of each legend label. Always wider than a glyph.
    pub fn legend_area(&self) -> u32 {
        self.px(LEGEND_GLYPH + 8.0)
    }

    /// Dash and gap lengths of reference lines.
    pub fn reference_dash(&self) -> (u32, u32) {
        (self.px(4.0), self.px(3.0))
    }

    /// Baseline-to-baseline distance of stacked text lines.
    pub fn line_height(&self, points: f64) -> i32 {
        (self.font_px(points) * 1.2).round() as i32
    }

    fn font_px(&self, points: f64) -> f64 {
        points * VECTOR_DPI as f64 / 72.0 * self.scale
    }
}

/// Centre offsets of `groups` bars of `width` placed side by side around a
/// category position.
pub fn group_offsets(groups: usize, width: f64) -> Vec<f64> {
    let middle = (groups as f64 - 1.0) / 2.0;
    (0..groups).map(|k| (k as f64 - middle) * width).collect()
}

/// Tick label of a categorical axis laid out at 0, 1, 2, ...
pub fn category_label(labels: &[String], position: f64) -> String {
    let idx = position.round();
    if (position - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Axis range holding `count` categories centred on integer positions.
pub fn category_range(count: usize) -> std::ops::Range<f64> {
    -0.5..(count as f64 - 0.5)
}

/// Dash segments of a horizontal line from `x0` to `x1` at height `y`.
pub fn dashed_hline(x0: f64, x1: f64, y: f64, dashes: usize) -> Vec<[(f64, f64); 2]> {
    let step = (x1 - x0) / dashes.max(1) as f64;
    (0..dashes.max(1))
        .map(|i| {
            let start = x0 + step * i as f64;
            [(start, y), (start + step * 0.6, y)]
        })
        .collect()
}

/// One coloured series of a grouped bar chart.
pub struct BarSeries<'s> {
    pub label: &'s str,
    pub values: &'s [f64],
    pub color: RGBColor,
    pub outlined: bool,
}

/// Mesh of a bar chart with named categories on the x axis and a light grid
/// on the value axis only.
pub fn draw_category_mesh<DB: DrawingBackend>(
    chart: &mut LinearChart<'_, DB>,
    categories: &[String],
    x_desc: &str,
    y_desc: &str,
    theme: &Theme,
) -> DrawResult<(), DB> {
    let formatter = |x: &f64| category_label(categories, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .x_labels(categories.len() + 1)
        .x_label_formatter(&formatter)
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(theme.font(TICK_PT))
        .axis_desc_style(theme.font(AXIS_LABEL_PT))
        .draw()
}

/// Draw grouped bars and return the top-centre coordinate of every bar, per
/// series, for annotations.
pub fn draw_grouped_bars<DB: DrawingBackend>(
    chart: &mut LinearChart<'_, DB>,
    series: &[BarSeries<'_>],
    width: f64,
    theme: &Theme,
) -> DrawResult<Vec<Vec<(f64, f64)>>, DB> {
    let offsets = group_offsets(series.len(), width);
    let mut tops = Vec::with_capacity(series.len());

    for (bars, offset) in series.iter().zip(offsets) {
        let color = bars.color;
        let rects: Vec<[(f64, f64); 2]> = bars
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let centre = i as f64 + offset;
                [(centre - width / 2.0, 0.0), (centre + width / 2.0, v)]
            })
            .collect();

        let half = theme.offset(5.0);
        let glyph = theme.offset(LEGEND_GLYPH);
        chart
            .draw_series(
                rects
                    .iter()
                    .map(|corners| Rectangle::new(*corners, color.filled())),
            )?
            .label(bars.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - half), (x + glyph, y + half)], color.filled())
            });

        if bars.outlined {
            let stroke = theme.px(0.5);
            chart.draw_series(
                rects
                    .iter()
                    .map(|corners| Rectangle::new(*corners, BLACK.stroke_width(stroke))),
            )?;
        }

        tops.push(
            rects
                .iter()
                .map(|[(x0, _), (x1, y)]| ((x0 + x1) / 2.0, *y))
                .collect(),
        );
    }

    Ok(tops)
}

/// Legend box in the given corner.
pub fn draw_legend<'a, DB: DrawingBackend + 'a, CT: CoordTranslate>(
    chart: &mut ChartContext<'a, DB, CT>,
    position: SeriesLabelPosition,
    theme: &Theme,
) -> DrawResult<(), DB> {
    chart
        .configure_series_labels()
        .position(position)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .legend_area_size(theme.legend_area())
        .label_font(theme.font(LEGEND_PT))
        .draw()
}

/// Centred single-row legend filling `area`, for charts whose plot has no
/// free corner.
pub fn draw_legend_row<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[(&str, RGBColor)],
    theme: &Theme,
) -> DrawResult<(), DB> {
    let text_style = theme
        .font(LEGEND_PT)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let glyph = theme.offset(LEGEND_GLYPH);
    let half = theme.offset(5.0);
    let gap = theme.offset(6.0);
    let spacing = theme.offset(18.0);

    let mut widths = Vec::with_capacity(entries.len());
    for (label, _) in entries {
        let (text_width, _) = area.estimate_text_size(label, &text_style)?;
        widths.push(glyph + gap + text_width as i32);
    }
    let total = widths.iter().sum::<i32>() + spacing * (entries.len() as i32 - 1).max(0);

    let (width, height) = area.dim_in_pixel();
    let mut x = (width as i32 - total).max(0) / 2;
    let y = height as i32 / 2;
    for ((label, color), entry_width) in entries.iter().zip(widths) {
        area.draw(&Rectangle::new(
            [(x, y - half), (x + glyph, y + half)],
            color.filled(),
        ))?;
        area.draw(&Text::new(*label, (x + glyph + gap, y), text_style.clone()))?;
        x += entry_width + spacing;
    }
    Ok(())
}
