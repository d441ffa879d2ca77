// File: crates/charts/src/charts/donut.rs
// Summary: Donut chart with percentage labels inside and value labels outside.

use std::f64::consts::TAU;

use crate::axis;
use crate::error::ChartError;
use crate::path::{annular_sector, arc_centroid, arc_label_position};
use crate::svg::{num, SvgDoc};
use crate::theme::Palette;

/// One slice: the category label and how often it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutEntry {
    pub label: String,
    pub count: f64,
}

/// Defaults: 600x600 with radii 100/250 and the ten-color category palette.
#[derive(Clone, Debug)]
pub struct DonutChartConfig {
    pub width: f64,
    pub height: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub palette: Palette,
    pub title: Option<String>,
    pub aria_label: String,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            inner_radius: 100.0,
            outer_radius: 250.0,
            palette: Palette::standard(),
            title: None,
            aria_label: "Donut Chart".to_string(),
        }
    }
}

/// Render a donut chart to an SVG document string.
///
/// Slices are sorted by count descending and sweep clockwise from 12
/// o'clock; each shows its percentage at the arc centroid and its label just
/// outside the outer edge. The viewBox is centered so arc geometry works in
/// origin coordinates.
pub fn render(data: &[DonutEntry], config: &DonutChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let total: f64 = data.iter().map(|d| d.count).sum();
    if !(total > 0.0) {
        return Err(ChartError::EmptyData);
    }

    let mut order: Vec<&DonutEntry> = data.iter().collect();
    order.sort_by(|a, b| b.count.partial_cmp(&a.count).unwrap_or(std::cmp::Ordering::Equal));

    let mut doc = SvgDoc::new(config.width, config.height)
        .with_view_box(-config.width / 2.0, -config.height / 2.0, config.width, config.height)
        .with_label(&config.aria_label);

    let palette = &config.palette;
    let mut angle = 0.0f64;
    for (i, entry) in order.iter().enumerate() {
        let sweep = entry.count / total * TAU;
        let start = angle;
        let end = angle + sweep;
        angle = end;

        doc.open_group("");
        let sector = annular_sector(start, end, config.inner_radius, config.outer_radius);
        doc.elem(
            "path",
            &[
                ("d", sector.into_string()),
                ("fill", palette.color(i).to_string()),
                ("stroke", "white".to_string()),
                ("stroke-width", "2".to_string()),
            ],
        );

        // Category label outside the ring.
        let (lx, ly) = arc_label_position(start, end, config.outer_radius + 30.0);
        doc.text(
            &[
                ("x", num(lx)),
                ("y", num(ly)),
                ("text-anchor", "middle".to_string()),
                ("font-size", "14px".to_string()),
                ("fill", palette.label.to_string()),
            ],
            &entry.label,
        );

        // Percentage at the centroid.
        let (cx, cy) = arc_centroid(start, end, config.inner_radius, config.outer_radius);
        doc.text(
            &[
                ("x", num(cx)),
                ("y", num(cy)),
                ("text-anchor", "middle".to_string()),
                ("fill", "white".to_string()),
                ("font-size", "14px".to_string()),
                ("font-weight", "bold".to_string()),
            ],
            &format!("{:.1}%", entry.count / total * 100.0),
        );
        doc.close_group();
    }

    if let Some(t) = &config.title {
        axis::title(&mut doc, 0.0, -config.height / 2.0 + 24.0, t, palette);
    }

    Ok(doc.finish())
}
