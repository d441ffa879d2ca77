// File: crates/charts/src/charts/bar.rs
// Summary: Categorical bar chart with band x-scale and per-bar color hook.

use crate::axis::{self, Orientation};
use crate::error::ChartError;
use crate::scale::{BandScale, LinearScale};
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;
use crate::types::{Frame, Margin};

/// One bar: a category label and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Bar fill selection.
#[derive(Clone, Copy, Debug)]
pub enum BarColor {
    Uniform(&'static str),
    /// Color computed from the datum (e.g. a year-era ramp).
    PerBar(fn(&BarDatum) -> &'static str),
}

impl BarColor {
    fn fill(&self, d: &BarDatum) -> &'static str {
        match self {
            BarColor::Uniform(c) => c,
            BarColor::PerBar(f) => f(d),
        }
    }
}

/// Defaults: 1000x500, margins 20/30/40/60, uniform blue bars, every label
/// shown, 10 y ticks.
#[derive(Clone, Debug)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub color: BarColor,
    pub palette: Palette,
    /// Keep only the labels this predicate accepts (the release chart shows
    /// every fifth year); `None` keeps all of them.
    pub label_filter: Option<fn(&str) -> bool>,
    /// Gap fraction of a band step; the variants range from 0.1 (years) to
    /// 0.3 (architectures).
    pub band_padding: f64,
    pub y_ticks: usize,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub aria_label: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: Margin::new(20.0, 30.0, 40.0, 60.0),
            color: BarColor::Uniform("#4169E1"),
            palette: Palette::standard(),
            label_filter: None,
            band_padding: 0.1,
            y_ticks: 10,
            title: None,
            x_label: None,
            y_label: None,
            aria_label: "Bar Chart".to_string(),
        }
    }
}

/// Render a bar chart to an SVG document string.
pub fn render(data: &[BarDatum], config: &BarChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let frame = Frame::resolve(config.width, config.height, config.margin)?;
    let palette = &config.palette;

    let keys: Vec<String> = data.iter().map(|d| d.label.clone()).collect();
    let x = BandScale::new(keys, (0.0, frame.inner_width), config.band_padding);

    let max_value = data.iter().fold(0.0f64, |m, d| m.max(d.value));
    let y = LinearScale::new((0.0, max_value.ceil()), (frame.inner_height, 0.0))
        .nice(config.y_ticks);

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);
    doc.open_group(&format!(
        "translate({}, {})",
        num(frame.margin.left),
        num(frame.margin.top)
    ));

    // Horizontal gridlines behind the bars.
    for t in y.ticks(config.y_ticks) {
        axis::grid_line(&mut doc, Orientation::Y, y.scale(t), frame.inner_width, palette);
    }

    // Bars.
    for (i, d) in data.iter().enumerate() {
        let x0 = x.position_at(i);
        let top = y.scale(d.value);
        doc.elem(
            "rect",
            &[
                ("x", num(x0)),
                ("y", num(top)),
                ("width", num(x.bandwidth())),
                ("height", num(frame.inner_height - top)),
                ("fill", config.color.fill(d).to_string()),
            ],
        );
    }

    // X axis: band ticks centered under each bar, optionally filtered.
    let x_ticks: Vec<(f64, String)> = data
        .iter()
        .enumerate()
        .filter(|(_, d)| config.label_filter.map_or(true, |keep| keep(&d.label)))
        .map(|(i, d)| (x.position_at(i) + x.bandwidth() / 2.0, d.label.clone()))
        .collect();
    doc.open_group(&format!("translate(0, {})", num(frame.inner_height)));
    axis::draw_axis(&mut doc, Orientation::X, frame.inner_width, &x_ticks, 12.0, palette);
    if let Some(label) = &config.x_label {
        axis::axis_caption(&mut doc, frame.inner_width / 2.0, 35.0, false, label, palette);
    }
    doc.close_group();

    // Y axis.
    let y_tick_pairs: Vec<(f64, String)> = y
        .ticks(config.y_ticks)
        .into_iter()
        .map(|t| (y.scale(t), num(t)))
        .collect();
    axis::draw_axis(&mut doc, Orientation::Y, frame.inner_height, &y_tick_pairs, 12.0, palette);
    if let Some(label) = &config.y_label {
        axis::axis_caption(&mut doc, -frame.inner_height / 2.0, -40.0, true, label, palette);
    }

    if let Some(t) = &config.title {
        axis::title(&mut doc, frame.inner_width / 2.0, -frame.margin.top / 2.0, t, palette);
    }

    doc.close_group();
    Ok(doc.finish())
}
