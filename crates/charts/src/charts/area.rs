// File: crates/charts/src/charts/area.rs
// Summary: Stacked area chart of digital vs analog release counts by year.

use crate::axis::{self, Orientation};
use crate::error::ChartError;
use crate::path::{area_path, line_path, Curve};
use crate::scale::LinearScale;
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;
use crate::types::{Frame, Margin};

/// One year of the architecture split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchPoint {
    pub year: f64,
    pub digital: f64,
    pub analog: f64,
}

/// Defaults: 900x500 with a wide right margin for the legend, orange digital
/// over purple analog.
#[derive(Clone, Debug)]
pub struct AreaChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub digital_color: &'static str,
    pub analog_color: &'static str,
    pub digital_label: String,
    pub analog_label: String,
    pub palette: Palette,
    pub title: Option<String>,
    pub aria_label: String,
}

impl Default for AreaChartConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            margin: Margin::new(40.0, 120.0, 40.0, 60.0),
            digital_color: "#FFA500",
            analog_color: "#9370DB",
            digital_label: "Digital".to_string(),
            analog_label: "Analog".to_string(),
            palette: Palette::standard(),
            title: None,
            aria_label: "Architecture Area Chart".to_string(),
        }
    }
}

/// Render the stacked area chart to an SVG document string.
///
/// Analog forms the lower band (baseline 0 to analog), digital stacks on top
/// (analog to analog + digital); the y-domain covers the stacked total.
pub fn render(data: &[ArchPoint], config: &AreaChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let frame = Frame::resolve(config.width, config.height, config.margin)?;
    let palette = &config.palette;

    let x_min = data.iter().map(|d| d.year).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|d| d.year).fold(f64::NEG_INFINITY, f64::max);
    let total_max = data.iter().map(|d| d.analog + d.digital).fold(0.0f64, f64::max);

    let x = LinearScale::new((x_min, x_max), (0.0, frame.inner_width));
    let y = LinearScale::new((0.0, total_max), (frame.inner_height, 0.0)).nice(8);

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);
    doc.open_group(&format!(
        "translate({}, {})",
        num(frame.margin.left),
        num(frame.margin.top)
    ));

    for t in y.ticks(8) {
        axis::grid_line(&mut doc, Orientation::Y, y.scale(t), frame.inner_width, palette);
    }

    // Lower band: analog from the baseline.
    let analog_top: Vec<(f64, f64)> =
        data.iter().map(|d| (x.scale(d.year), y.scale(d.analog))).collect();
    let analog_area = area_path(&analog_top, frame.inner_height, Curve::MonotoneX);
    doc.elem(
        "path",
        &[
            ("d", analog_area.into_string()),
            ("fill", config.analog_color.to_string()),
            ("fill-opacity", "0.8".to_string()),
        ],
    );

    // Upper band: digital stacked on analog. Drawn as the stacked topline
    // closed against the analog topline (forward then reversed).
    let stacked_top: Vec<(f64, f64)> = data
        .iter()
        .map(|d| (x.scale(d.year), y.scale(d.analog + d.digital)))
        .collect();
    let mut band = line_path(&stacked_top, Curve::MonotoneX);
    let reversed: Vec<(f64, f64)> = analog_top.iter().rev().cloned().collect();
    for &(px, py) in &reversed {
        band.line_to(px, py);
    }
    band.close();
    doc.elem(
        "path",
        &[
            ("d", band.into_string()),
            ("fill", config.digital_color.to_string()),
            ("fill-opacity", "0.8".to_string()),
        ],
    );

    // Axes.
    let x_pairs: Vec<(f64, String)> =
        x.ticks(10).into_iter().map(|t| (x.scale(t), num(t))).collect();
    doc.open_group(&format!("translate(0, {})", num(frame.inner_height)));
    axis::draw_axis(&mut doc, Orientation::X, frame.inner_width, &x_pairs, 12.0, palette);
    doc.close_group();

    let y_pairs: Vec<(f64, String)> =
        y.ticks(8).into_iter().map(|t| (y.scale(t), num(t))).collect();
    axis::draw_axis(&mut doc, Orientation::Y, frame.inner_height, &y_pairs, 12.0, palette);

    // Legend in the right margin.
    doc.open_group(&format!("translate({}, 10)", num(frame.inner_width + 20.0)));
    for (i, (color, label)) in [
        (config.digital_color, &config.digital_label),
        (config.analog_color, &config.analog_label),
    ]
    .iter()
    .enumerate()
    {
        let row = i as f64 * 24.0;
        doc.elem(
            "rect",
            &[
                ("x", "0".to_string()),
                ("y", num(row)),
                ("width", "16".to_string()),
                ("height", "16".to_string()),
                ("fill", color.to_string()),
            ],
        );
        doc.text(
            &[
                ("x", "22".to_string()),
                ("y", num(row + 12.0)),
                ("font-size", "12px".to_string()),
                ("fill", palette.label.to_string()),
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
