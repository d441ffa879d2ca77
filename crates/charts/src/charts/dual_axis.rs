// File: crates/charts/src/charts/dual_axis.rs
// Summary: Dual-axis chart: release-count area (left) plus a line on a right axis.

use crate::axis::{self, Orientation};
use crate::error::ChartError;
use crate::path::{area_path, line_path, Curve};
use crate::scale::LinearScale;
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;
use crate::types::{Frame, Margin};

/// One year of the dataset: how many releases and their average polyphony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualAxisPoint {
    pub year: f64,
    pub release_count: f64,
    pub average_polyphony: f64,
}

/// Defaults: 1000x500, margins 40/60/40/60, pink area, purple line.
#[derive(Clone, Debug)]
pub struct DualAxisChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub area_color: &'static str,
    pub line_color: &'static str,
    pub palette: Palette,
    pub title: Option<String>,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub aria_label: String,
}

impl Default for DualAxisChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: Margin::new(40.0, 60.0, 40.0, 60.0),
            area_color: "#FFB6C1",
            line_color: "#800080",
            palette: Palette::standard(),
            title: None,
            left_label: None,
            right_label: None,
            aria_label: "Dual Axis Chart".to_string(),
        }
    }
}

/// Render a dual-axis chart to an SVG document string.
///
/// The left axis scales the area series (release counts), the right axis the
/// line series (average polyphony); both y-domains start at zero and are
/// niced independently.
pub fn render(data: &[DualAxisPoint], config: &DualAxisChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let frame = Frame::resolve(config.width, config.height, config.margin)?;
    let palette = &config.palette;

    let x_min = data.iter().map(|d| d.year).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|d| d.year).fold(f64::NEG_INFINITY, f64::max);
    let count_max = data.iter().map(|d| d.release_count).fold(0.0f64, f64::max);
    let poly_max = data.iter().map(|d| d.average_polyphony).fold(0.0f64, f64::max);

    let x = LinearScale::new((x_min, x_max), (0.0, frame.inner_width));
    let y_left = LinearScale::new((0.0, count_max), (frame.inner_height, 0.0)).nice(6);
    let y_right = LinearScale::new((0.0, poly_max), (frame.inner_height, 0.0)).nice(6);

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);
    doc.open_group(&format!(
        "translate({}, {})",
        num(frame.margin.left),
        num(frame.margin.top)
    ));

    // Gridlines follow the left axis.
    for t in y_left.ticks(6) {
        axis::grid_line(&mut doc, Orientation::Y, y_left.scale(t), frame.inner_width, palette);
    }

    // Area series on the left scale.
    let area_points: Vec<(f64, f64)> = data
        .iter()
        .map(|d| (x.scale(d.year), y_left.scale(d.release_count)))
        .collect();
    let area = area_path(&area_points, frame.inner_height, Curve::MonotoneX);
    doc.elem(
        "path",
        &[
            ("d", area.into_string()),
            ("fill", config.area_color.to_string()),
            ("fill-opacity", "0.7".to_string()),
        ],
    );

    // Line series on the right scale.
    let line_points: Vec<(f64, f64)> = data
        .iter()
        .map(|d| (x.scale(d.year), y_right.scale(d.average_polyphony)))
        .collect();
    let line = line_path(&line_points, Curve::MonotoneX);
    doc.elem(
        "path",
        &[
            ("d", line.into_string()),
            ("fill", "none".to_string()),
            ("stroke", config.line_color.to_string()),
            ("stroke-width", "2".to_string()),
        ],
    );

    // Bottom x axis.
    let x_pairs: Vec<(f64, String)> =
        x.ticks(10).into_iter().map(|t| (x.scale(t), num(t))).collect();
    doc.open_group(&format!("translate(0, {})", num(frame.inner_height)));
    axis::draw_axis(&mut doc, Orientation::X, frame.inner_width, &x_pairs, 12.0, palette);
    doc.close_group();

    // Left y axis, tinted like its series.
    let left_pairs: Vec<(f64, String)> =
        y_left.ticks(6).into_iter().map(|t| (y_left.scale(t), num(t))).collect();
    axis::draw_axis(&mut doc, Orientation::Y, frame.inner_height, &left_pairs, 12.0, palette);
    if let Some(label) = &config.left_label {
        axis::axis_caption(&mut doc, -frame.inner_height / 2.0, -40.0, true, label, palette);
    }

    // Right y axis: same geometry mirrored to the right edge.
    doc.open_group(&format!("translate({}, 0)", num(frame.inner_width)));
    doc.elem(
        "line",
        &[
            ("x1", "0".to_string()),
            ("x2", "0".to_string()),
            ("y1", "0".to_string()),
            ("y2", num(frame.inner_height)),
            ("stroke", palette.axis.to_string()),
        ],
    );
    for t in y_right.ticks(6) {
        let offset = y_right.scale(t);
        doc.open_group(&format!("translate(0, {})", num(offset)));
        doc.elem("line", &[("x2", "6".to_string()), ("stroke", palette.axis.to_string())]);
        doc.text(
            &[
                ("x", "9".to_string()),
                ("dy", ".32em".to_string()),
                ("text-anchor", "start".to_string()),
                ("fill", palette.label.to_string()),
                ("font-size", "12px".to_string()),
            ],
            &num(t),
        );
        doc.close_group();
    }
    if let Some(label) = &config.right_label {
        doc.text(
            &[
                ("x", num(frame.inner_height / 2.0)),
                ("y", "-45".to_string()),
                ("text-anchor", "middle".to_string()),
                ("fill", palette.label.to_string()),
                ("font-size", "14px".to_string()),
                ("transform", "rotate(90)".to_string()),
            ],
            label,
        );
    }
    doc.close_group();

    if let Some(t) = &config.title {
        axis::title(&mut doc, frame.inner_width / 2.0, -frame.margin.top / 2.0, t, palette);
    }

    doc.close_group();
    Ok(doc.finish())
}
