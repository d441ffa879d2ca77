// File: crates/charts/src/charts/line.rs
// Summary: Monotone line chart of a per-year average series.

use crate::axis::{self, Orientation};
use crate::error::ChartError;
use crate::path::{line_path, Curve};
use crate::scale::LinearScale;
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;
use crate::types::{Frame, Margin};

/// One point of the series: a year and its averaged value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Defaults: 1000x500, margins 40/30/40/60, coral line.
#[derive(Clone, Debug)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub line_color: &'static str,
    pub palette: Palette,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub aria_label: String,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: Margin::new(40.0, 30.0, 40.0, 60.0),
            line_color: "#FF7F50",
            palette: Palette::standard(),
            title: None,
            x_label: None,
            y_label: None,
            aria_label: "Line Chart".to_string(),
        }
    }
}

/// Render a single-series line chart to an SVG document string.
///
/// The x-domain spans the data extent; the y-domain runs from zero to the
/// rounded-up maximum and is niced. The line interpolates monotonically so
/// averages never appear to overshoot between years.
pub fn render(data: &[LinePoint], config: &LineChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let frame = Frame::resolve(config.width, config.height, config.margin)?;
    let palette = &config.palette;

    let x_min = data.iter().map(|d| d.x).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|d| d.x).fold(f64::NEG_INFINITY, f64::max);
    let y_max = data.iter().map(|d| d.y).fold(0.0f64, f64::max);

    let x = LinearScale::new((x_min, x_max), (0.0, frame.inner_width));
    let y = LinearScale::new((0.0, y_max.ceil()), (frame.inner_height, 0.0)).nice(8);

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);
    doc.open_group(&format!(
        "translate({}, {})",
        num(frame.margin.left),
        num(frame.margin.top)
    ));

    let x_ticks = x.ticks(10);
    let y_ticks = y.ticks(8);

    // Gridlines in both orientations.
    for &t in &y_ticks {
        axis::grid_line(&mut doc, Orientation::Y, y.scale(t), frame.inner_width, palette);
    }
    for &t in &x_ticks {
        axis::grid_line(&mut doc, Orientation::X, x.scale(t), frame.inner_height, palette);
    }

    let points: Vec<(f64, f64)> = data.iter().map(|d| (x.scale(d.x), y.scale(d.y))).collect();
    let line = line_path(&points, Curve::MonotoneX);
    doc.elem(
        "path",
        &[
            ("d", line.into_string()),
            ("fill", "none".to_string()),
            ("stroke", config.line_color.to_string()),
            ("stroke-width", "2".to_string()),
        ],
    );

    // Axes.
    let x_pairs: Vec<(f64, String)> = x_ticks.iter().map(|&t| (x.scale(t), num(t))).collect();
    doc.open_group(&format!("translate(0, {})", num(frame.inner_height)));
    axis::draw_axis(&mut doc, Orientation::X, frame.inner_width, &x_pairs, 12.0, palette);
    if let Some(label) = &config.x_label {
        axis::axis_caption(&mut doc, frame.inner_width / 2.0, 40.0, false, label, palette);
    }
    doc.close_group();

    let y_pairs: Vec<(f64, String)> = y_ticks.iter().map(|&t| (y.scale(t), num(t))).collect();
    axis::draw_axis(&mut doc, Orientation::Y, frame.inner_height, &y_pairs, 12.0, palette);
    if let Some(label) = &config.y_label {
        axis::axis_caption(&mut doc, -frame.inner_height / 2.0, -40.0, true, label, palette);
    }

    if let Some(t) = &config.title {
        axis::title(&mut doc, frame.inner_width / 2.0, -frame.margin.top / 2.0, t, palette);
    }

    doc.close_group();
    Ok(doc.finish())
}
