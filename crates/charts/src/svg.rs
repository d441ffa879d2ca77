// File: crates/charts/src/svg.rs
// Summary: Minimal SVG document builder with file output.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ChartError;

/// Format a coordinate with at most two decimals, trimming trailing zeros.
pub fn num(v: f64) -> String {
    let mut s = format!("{:.2}", v);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    // Avoid "-0" from tiny negatives rounding away.
    if s == "-0" {
        s.truncate(0);
        s.push('0');
    }
    s
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// An SVG document under construction.
///
/// Elements are appended in draw order (later elements paint on top), which
/// matches how the components layer grid, shapes, axes, and labels.
pub struct SvgDoc {
    width: f64,
    height: f64,
    view_box: Option<(f64, f64, f64, f64)>,
    label: Option<String>,
    body: String,
    open_groups: usize,
}

impl SvgDoc {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, view_box: None, label: None, body: String::new(), open_groups: 0 }
    }

    /// Set an explicit viewBox (used by the centered donut).
    pub fn with_view_box(mut self, min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        self.view_box = Some((min_x, min_y, width, height));
        self
    }

    /// Accessible label emitted as `aria-label` on the root element.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Open a `<g>`; `transform` may be empty for a plain group.
    pub fn open_group(&mut self, transform: &str) {
        if transform.is_empty() {
            self.body.push_str("<g>");
        } else {
            self.body.push_str("<g transform=\"");
            escape_into(&mut self.body, transform);
            self.body.push_str("\">");
        }
        self.body.push('\n');
        self.open_groups += 1;
    }

    pub fn close_group(&mut self) {
        debug_assert!(self.open_groups > 0, "close_group without open_group");
        self.body.push_str("</g>\n");
        self.open_groups = self.open_groups.saturating_sub(1);
    }

    /// Append a self-closing element.
    pub fn elem(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.body.push('<');
        self.body.push_str(tag);
        for (k, v) in attrs {
            let _ = write!(self.body, " {}=\"", k);
            escape_into(&mut self.body, v);
            self.body.push('"');
        }
        self.body.push_str("/>\n");
    }

    /// Append a `<text>` element with escaped content.
    pub fn text(&mut self, attrs: &[(&str, String)], content: &str) {
        self.body.push_str("<text");
        for (k, v) in attrs {
            let _ = write!(self.body, " {}=\"", k);
            escape_into(&mut self.body, v);
            self.body.push('"');
        }
        self.body.push('>');
        escape_into(&mut self.body, content);
        self.body.push_str("</text>\n");
    }

    /// Serialize the whole document.
    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.close_group();
        }
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\"",
            num(self.width),
            num(self.height)
        );
        if let Some((x, y, w, h)) = self.view_box {
            let _ = write!(out, " viewBox=\"{} {} {} {}\"", num(x), num(y), num(w), num(h));
        }
        if let Some(label) = &self.label {
            out.push_str(" role=\"img\" aria-label=\"");
            escape_into(&mut out, label);
            out.push('"');
        }
        out.push_str(">\n");
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Write an already-rendered SVG document to disk, creating parent dirs.
pub fn write_svg(path: impl AsRef<Path>, document: &str) -> Result<(), ChartError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document)?;
    Ok(())
}
