// File: crates/charts/src/charts/density.rs
// Summary: Smoothed density area chart over a one-dimensional sample.

use synthviz_stats::compute_density;

use crate::axis::{self, Orientation};
use crate::error::ChartError;
use crate::path::{area_path, Curve};
use crate::scale::LinearScale;
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;
use crate::types::{Frame, Margin};

/// Defaults: 800x400, margins 20/30/30/40, bandwidth 5, violet fill.
#[derive(Clone, Debug)]
pub struct DensityChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub color: &'static str,
    pub bandwidth: f64,
    pub palette: Palette,
    pub title: Option<String>,
    pub aria_label: String,
}

impl Default for DensityChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margin::new(20.0, 30.0, 30.0, 40.0),
            color: "#9370DB",
            bandwidth: 5.0,
            palette: Palette::standard(),
            title: None,
            aria_label: "Density Chart".to_string(),
        }
    }
}

/// Render a density chart for `sample` to an SVG document string.
///
/// The density curve comes from the Epanechnikov estimator; invalid input
/// (empty sample, non-positive bandwidth) propagates as an error rather than
/// producing degenerate geometry.
pub fn render(sample: &[f64], config: &DensityChartConfig) -> Result<String, ChartError> {
    let frame = Frame::resolve(config.width, config.height, config.margin)?;
    let palette = &config.palette;

    let curve = compute_density(sample, config.bandwidth)?;

    let x_min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let x = LinearScale::new((x_min, x_max), (0.0, frame.inner_width));

    let d_max = curve.iter().fold(0.0f64, |m, p| m.max(p.density));
    let y = LinearScale::new((0.0, d_max), (frame.inner_height, 0.0));

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);
    doc.open_group(&format!(
        "translate({}, {})",
        num(frame.margin.left),
        num(frame.margin.top)
    ));

    let x_ticks = x.ticks(10);
    let y_ticks = y.ticks(5);

    // Gridlines in both orientations.
    for &t in &x_ticks {
        axis::grid_line(&mut doc, Orientation::X, x.scale(t), frame.inner_height, palette);
    }
    for &t in &y_ticks {
        axis::grid_line(&mut doc, Orientation::Y, y.scale(t), frame.inner_width, palette);
    }

    // Density area with a basis spline, filled at 60% opacity.
    let points: Vec<(f64, f64)> =
        curve.iter().map(|p| (x.scale(p.x), y.scale(p.density))).collect();
    let area = area_path(&points, frame.inner_height, Curve::Basis);
    doc.elem(
        "path",
        &[
            ("d", area.into_string()),
            ("fill", config.color.to_string()),
            ("fill-opacity", "0.6".to_string()),
            ("stroke", config.color.to_string()),
            ("stroke-width", "1".to_string()),
        ],
    );

    // X axis along the bottom.
    let x_pairs: Vec<(f64, String)> = x_ticks.iter().map(|&t| (x.scale(t), num(t))).collect();
    doc.open_group(&format!("translate(0, {})", num(frame.inner_height)));
    axis::draw_axis(&mut doc, Orientation::X, frame.inner_width, &x_pairs, 10.0, palette);
    doc.close_group();

    // Y axis with three-decimal density labels.
    let y_pairs: Vec<(f64, String)> =
        y_ticks.iter().map(|&t| (y.scale(t), format!("{:.3}", t))).collect();
    axis::draw_axis(&mut doc, Orientation::Y, frame.inner_height, &y_pairs, 10.0, palette);

    if let Some(t) = &config.title {
        axis::title(&mut doc, frame.inner_width / 2.0, -frame.margin.top / 2.0, t, palette);
    }

    doc.close_group();
    Ok(doc.finish())
}
