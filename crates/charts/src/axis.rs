// File: crates/charts/src/axis.rs
// Summary: Axis and gridline emission; orientation-tagged geometry.

use crate::svg::{num, SvgDoc};
use crate::theme::Palette;

/// Which axis a gridline or tick belongs to.
///
/// An X tick sits at a horizontal offset and marks downward; a Y tick sits at
/// a vertical offset and marks leftward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    X,
    Y,
}

/// Dashed gridline across the plot at `offset` along the given axis.
pub fn grid_line(doc: &mut SvgDoc, orientation: Orientation, offset: f64, length: f64, palette: &Palette) {
    let (x1, x2, y1, y2) = match orientation {
        Orientation::X => (offset, offset, 0.0, length),
        Orientation::Y => (0.0, length, offset, offset),
    };
    doc.elem(
        "line",
        &[
            ("x1", num(x1)),
            ("x2", num(x2)),
            ("y1", num(y1)),
            ("y2", num(y2)),
            ("stroke", palette.grid.to_string()),
            ("stroke-dasharray", "2,2".to_string()),
        ],
    );
}

/// Solid axis domain line of `length` pixels along the given axis.
pub fn axis_line(doc: &mut SvgDoc, orientation: Orientation, length: f64, palette: &Palette) {
    let (x2, y2) = match orientation {
        Orientation::X => (length, 0.0),
        Orientation::Y => (0.0, length),
    };
    doc.elem(
        "line",
        &[
            ("x1", "0".to_string()),
            ("x2", num(x2)),
            ("y1", "0".to_string()),
            ("y2", num(y2)),
            ("stroke", palette.axis.to_string()),
        ],
    );
}

/// One tick mark plus label at `offset` along the axis.
///
/// X ticks extend 6px down with centered labels below; Y ticks extend 6px
/// left with end-anchored labels beside them.
pub fn tick(
    doc: &mut SvgDoc,
    orientation: Orientation,
    offset: f64,
    label: &str,
    font_size: f64,
    palette: &Palette,
) {
    let transform = match orientation {
        Orientation::X => format!("translate({}, 0)", num(offset)),
        Orientation::Y => format!("translate(0, {})", num(offset)),
    };
    doc.open_group(&transform);
    match orientation {
        Orientation::X => {
            doc.elem("line", &[("y2", "6".to_string()), ("stroke", palette.axis.to_string())]);
            doc.text(
                &[
                    ("y", "9".to_string()),
                    ("dy", ".71em".to_string()),
                    ("text-anchor", "middle".to_string()),
                    ("fill", palette.label.to_string()),
                    ("font-size", format!("{}px", num(font_size))),
                ],
                label,
            );
        }
        Orientation::Y => {
            doc.elem("line", &[("x2", "-6".to_string()), ("stroke", palette.axis.to_string())]);
            doc.text(
                &[
                    ("x", "-9".to_string()),
                    ("dy", ".32em".to_string()),
                    ("text-anchor", "end".to_string()),
                    ("fill", palette.label.to_string()),
                    ("font-size", format!("{}px", num(font_size))),
                ],
                label,
            );
        }
    }
    doc.close_group();
}

/// Full axis: domain line plus a tick per `(offset, label)` pair.
///
/// The caller positions the containing group (the x-axis group is translated
/// to the bottom of the plot).
pub fn draw_axis(
    doc: &mut SvgDoc,
    orientation: Orientation,
    length: f64,
    ticks: &[(f64, String)],
    font_size: f64,
    palette: &Palette,
) {
    axis_line(doc, orientation, length, palette);
    for (offset, label) in ticks {
        tick(doc, orientation, *offset, label, font_size, palette);
    }
}

/// Centered axis caption (e.g. "Year" under the x-axis).
pub fn axis_caption(doc: &mut SvgDoc, x: f64, y: f64, rotate: bool, text: &str, palette: &Palette) {
    let mut attrs = vec![
        ("x", num(x)),
        ("y", num(y)),
        ("text-anchor", "middle".to_string()),
        ("fill", palette.label.to_string()),
        ("font-size", "14px".to_string()),
    ];
    if rotate {
        attrs.push(("transform", "rotate(-90)".to_string()));
    }
    doc.text(&attrs, text);
}

/// Bold centered chart title.
pub fn title(doc: &mut SvgDoc, x: f64, y: f64, text: &str, palette: &Palette) {
    doc.text(
        &[
            ("x", num(x)),
            ("y", num(y)),
            ("text-anchor", "middle".to_string()),
            ("fill", palette.title.to_string()),
            ("font-size", "16px".to_string()),
            ("font-weight", "bold".to_string()),
        ],
        text,
    );
}
