// File: crates/charts/src/charts/treemap.rs
// Summary: Squarified treemap of weighted leaves (word frequencies).

use crate::error::ChartError;
use crate::svg::{num, SvgDoc};
use crate::theme::{Palette, TREEMAP_LEVEL_1};

/// Height reserved for the title band above the cells.
const TITLE_HEIGHT: f64 = 40.0;

/// Cells below this size carry no label.
const MIN_LABEL_WIDTH: f64 = 60.0;
const MIN_LABEL_HEIGHT: f64 = 30.0;

/// One leaf: a word and its frequency weight.
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapLeaf {
    pub label: String,
    pub value: f64,
}

/// Defaults: 800x600, 1px padding, purple level-1 colors.
#[derive(Clone, Debug)]
pub struct TreemapChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub colors: &'static [&'static str],
    pub palette: Palette,
    pub title: Option<String>,
    pub aria_label: String,
}

impl Default for TreemapChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 1.0,
            colors: TREEMAP_LEVEL_1,
            palette: Palette::standard(),
            title: None,
            aria_label: "Word Treemap".to_string(),
        }
    }
}

/// Axis-aligned cell produced by the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Cell {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Squarified layout: place `values` (non-negative weights, in order) inside
/// `bounds` so each cell's area is proportional to its value and aspect
/// ratios stay near 1.
///
/// Rows are laid along the shorter side of the remaining rectangle and a row
/// is closed as soon as adding the next value would worsen its worst aspect
/// ratio.
pub fn squarify(values: &[f64], bounds: Cell) -> Vec<Cell> {
    let n = values.len();
    let mut out = Vec::with_capacity(n);
    let total: f64 = values.iter().sum();
    let bounds_area = bounds.width() * bounds.height();
    if total <= 0.0 || bounds_area <= 0.0 {
        // Nothing to apportion: everything collapses to the origin corner.
        out.resize(n, Cell { x0: bounds.x0, y0: bounds.y0, x1: bounds.x0, y1: bounds.y0 });
        return out;
    }
    let scale = bounds_area / total;

    let (mut x0, mut y0) = (bounds.x0, bounds.y0);
    let (x1, y1) = (bounds.x1, bounds.y1);
    let mut i = 0;
    while i < n {
        let short = (x1 - x0).min(y1 - y0).max(f64::MIN_POSITIVE);

        // Grow the row while the worst aspect ratio keeps improving.
        let mut end = i + 1;
        let mut sum = values[i];
        let mut lo = values[i];
        let mut hi = values[i];
        let mut worst = worst_ratio(sum, lo, hi, short, scale);
        while end < n {
            let v = values[end];
            let (ns, nlo, nhi) = (sum + v, lo.min(v), hi.max(v));
            let ratio = worst_ratio(ns, nlo, nhi, short, scale);
            if ratio > worst {
                break;
            }
            sum = ns;
            lo = nlo;
            hi = nhi;
            worst = ratio;
            end += 1;
        }

        // Lay the row along the shorter side and shrink the free rectangle.
        let thickness = if sum > 0.0 { sum * scale / short } else { 0.0 };
        let horizontal_strip = (x1 - x0) < (y1 - y0);
        let mut along = if horizontal_strip { x0 } else { y0 };
        for &v in &values[i..end] {
            let extent = if sum > 0.0 { v / sum * short } else { 0.0 };
            if horizontal_strip {
                out.push(Cell { x0: along, y0, x1: along + extent, y1: y0 + thickness });
            } else {
                out.push(Cell { x0, y0: along, x1: x0 + thickness, y1: along + extent });
            }
            along += extent;
        }
        if horizontal_strip {
            y0 += thickness;
        } else {
            x0 += thickness;
        }
        i = end;
    }
    out
}

/// Worst aspect ratio of a row with pixel area `sum * scale` on side `short`.
fn worst_ratio(sum: f64, lo: f64, hi: f64, short: f64, scale: f64) -> f64 {
    let s = sum * scale;
    if s <= 0.0 {
        return f64::INFINITY;
    }
    let a = short * short * hi * scale / (s * s);
    let b = s * s / (short * short * lo * scale);
    a.max(b)
}

/// Render a treemap to an SVG document string.
///
/// Leaves are sorted by value descending; cells are inset by half the
/// padding on every side and rounded to whole pixels. Labels appear only in
/// cells large enough to hold them.
pub fn render(data: &[TreemapLeaf], config: &TreemapChartConfig) -> Result<String, ChartError> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }

    let mut order: Vec<&TreemapLeaf> = data.iter().collect();
    order.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

    let pad = config.padding;
    let bounds = Cell {
        x0: pad,
        y0: pad,
        x1: config.width - pad,
        y1: config.height - TITLE_HEIGHT - pad,
    };
    let values: Vec<f64> = order.iter().map(|l| l.value.max(0.0)).collect();
    let cells = squarify(&values, bounds);

    // An empty color slice would make the cycling index undefined.
    let colors = if config.colors.is_empty() { TREEMAP_LEVEL_1 } else { config.colors };

    let mut doc = SvgDoc::new(config.width, config.height).with_label(&config.aria_label);

    if let Some(t) = &config.title {
        doc.text(
            &[
                ("x", num(config.width / 2.0)),
                ("y", num(TITLE_HEIGHT / 2.0)),
                ("text-anchor", "middle".to_string()),
                ("dominant-baseline", "middle".to_string()),
                ("fill", config.palette.title.to_string()),
                ("font-size", "20px".to_string()),
                ("font-weight", "bold".to_string()),
            ],
            t,
        );
    }

    doc.open_group(&format!("translate(0, {})", num(TITLE_HEIGHT)));
    for (i, (leaf, cell)) in order.iter().zip(&cells).enumerate() {
        let x = (cell.x0 + pad / 2.0).round();
        let y = (cell.y0 + pad / 2.0).round();
        let w = (cell.width() - pad).round().max(0.0);
        let h = (cell.height() - pad).round().max(0.0);

        doc.open_group("");
        doc.elem(
            "rect",
            &[
                ("x", num(x)),
                ("y", num(y)),
                ("width", num(w)),
                ("height", num(h)),
                ("fill", colors[i % colors.len()].to_string()),
                ("stroke", "white".to_string()),
            ],
        );
        if w > MIN_LABEL_WIDTH && h > MIN_LABEL_HEIGHT {
            doc.text(
                &[
                    ("x", num(x + w / 2.0)),
                    ("y", num(y + h / 2.0 - 4.0)),
                    ("text-anchor", "middle".to_string()),
                    ("fill", "white".to_string()),
                    ("font-size", "12px".to_string()),
                ],
                &leaf.label,
            );
            doc.text(
                &[
                    ("x", num(x + w / 2.0)),
                    ("y", num(y + h / 2.0 + 10.0)),
                    ("text-anchor", "middle".to_string()),
                    ("fill", "white".to_string()),
                    ("font-size", "10px".to_string()),
                ],
                &num(leaf.value),
            );
        }
        doc.close_group();
    }
    doc.close_group();

    Ok(doc.finish())
}
