// File: crates/charts/src/charts/scatter.rs
// Summary: Scatter plot with polynomial trend line and prediction markers.

use synthviz_stats::{fit_polynomial, Observation};

use crate::axis::{self, Orientation};
use crate::error::ChartError;
use crate::path::{line_path, Curve};
use crate::scale::LinearScale;
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;
use crate::types::{Frame, Margin};

/// Step between trend-line samples across the x-domain.
const TREND_SAMPLE_STEP: f64 = 0.1;

/// Defaults: 900x500, margins 40/40/60/60, degree-2 trend, purple points,
/// red prediction markers, orange fit line.
#[derive(Clone, Debug)]
pub struct ScatterChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub point_color: &'static str,
    pub prediction_color: &'static str,
    pub line_color: &'static str,
    pub palette: Palette,
    /// Polynomial degree for the trend line; `None` draws points only.
    pub trend_degree: Option<usize>,
    pub point_radius: f64,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Legend entries: (series, fit, prediction), drawn top-right when set.
    pub legend: Option<(String, String, String)>,
    pub aria_label: String,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            margin: Margin::new(40.0, 40.0, 60.0, 60.0),
            point_color: "#800080",
            prediction_color: "#FF0000",
            line_color: "#FFA500",
            palette: Palette::standard(),
            trend_degree: Some(2),
            point_radius: 5.0,
            title: None,
            x_label: None,
            y_label: None,
            legend: None,
            aria_label: "Scatter Plot".to_string(),
        }
    }
}

/// Render a scatter chart to an SVG document string.
///
/// Prediction-flagged observations are drawn in the prediction color and
/// excluded from the fit. A singular fit (too few distinct x-values for the
/// requested degree) propagates as an error.
pub fn render(data: &[Observation], config: &ScatterChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let frame = Frame::resolve(config.width, config.height, config.margin)?;
    let palette = &config.palette;

    let x_min = data.iter().map(|o| o.x).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|o| o.x).fold(f64::NEG_INFINITY, f64::max);
    let y_max = data.iter().map(|o| o.y).fold(0.0f64, f64::max);

    let x = LinearScale::new((x_min, x_max), (0.0, frame.inner_width)).nice(8);
    let y = LinearScale::new((0.0, y_max), (frame.inner_height, 0.0)).nice(8);

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);
    doc.open_group(&format!(
        "translate({}, {})",
        num(frame.margin.left),
        num(frame.margin.top)
    ));

    let x_ticks = x.ticks(8);
    let y_ticks = y.ticks(8);

    for &t in &y_ticks {
        axis::grid_line(&mut doc, Orientation::Y, y.scale(t), frame.inner_width, palette);
    }
    for &t in &x_ticks {
        axis::grid_line(&mut doc, Orientation::X, x.scale(t), frame.inner_height, palette);
    }

    // Trend line under the points, sampled densely across the data x-range.
    if let Some(degree) = config.trend_degree {
        let model = fit_polynomial(data, degree)?;
        let mut samples = Vec::new();
        let mut t = x_min;
        while t < x_max {
            samples.push((x.scale(t), y.scale(model.predict(t))));
            t += TREND_SAMPLE_STEP;
        }
        samples.push((x.scale(x_max), y.scale(model.predict(x_max))));
        let path = line_path(&samples, Curve::MonotoneX);
        doc.elem(
            "path",
            &[
                ("d", path.into_string()),
                ("fill", "none".to_string()),
                ("stroke", config.line_color.to_string()),
                ("stroke-width", "2".to_string()),
            ],
        );
    }

    // Points; predictions get their own color.
    for o in data {
        let fill = if o.prediction { config.prediction_color } else { config.point_color };
        doc.elem(
            "circle",
            &[
                ("cx", num(x.scale(o.x))),
                ("cy", num(y.scale(o.y))),
                ("r", num(config.point_radius)),
                ("fill", fill.to_string()),
            ],
        );
    }

    // Axes.
    let x_pairs: Vec<(f64, String)> = x_ticks.iter().map(|&t| (x.scale(t), num(t))).collect();
    doc.open_group(&format!("translate(0, {})", num(frame.inner_height)));
    axis::draw_axis(&mut doc, Orientation::X, frame.inner_width, &x_pairs, 12.0, palette);
    if let Some(label) = &config.x_label {
        axis::axis_caption(&mut doc, frame.inner_width / 2.0, 45.0, false, label, palette);
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

    if let Some((series, fit, prediction)) = &config.legend {
        draw_legend(&mut doc, frame.inner_width - 200.0, config, series, fit, prediction);
    }

    doc.close_group();
    Ok(doc.finish())
}

/// Three-row legend: point sample, fit line sample, prediction sample.
fn draw_legend(
    doc: &mut SvgDoc,
    x: f64,
    config: &ScatterChartConfig,
    series: &str,
    fit: &str,
    prediction: &str,
) {
    doc.open_group(&format!("translate({}, 0)", num(x)));

    doc.elem(
        "circle",
        &[
            ("cx", "0".to_string()),
            ("cy", "0".to_string()),
            ("r", "5".to_string()),
            ("fill", config.point_color.to_string()),
        ],
    );
    doc.text(
        &[("x", "10".to_string()), ("y", "4".to_string()), ("font-size", "12px".to_string())],
        series,
    );

    doc.elem(
        "path",
        &[
            ("d", "M0,25 L20,25".to_string()),
            ("stroke", config.line_color.to_string()),
            ("stroke-width", "2".to_string()),
        ],
    );
    doc.text(
        &[("x", "25".to_string()), ("y", "29".to_string()), ("font-size", "12px".to_string())],
        fit,
    );

    doc.elem(
        "circle",
        &[
            ("cx", "0".to_string()),
            ("cy", "50".to_string()),
            ("r", "5".to_string()),
            ("fill", config.prediction_color.to_string()),
        ],
    );
    doc.text(
        &[("x", "10".to_string()), ("y", "54".to_string()), ("font-size", "12px".to_string())],
        prediction,
    );

    doc.close_group();
}
