// File: crates/charts/src/theme.rs
// Summary: Color palettes for chart rendering.

/// Colors shared by the chart components.
///
/// `categorical` cycles per slice/cell; the structural colors (grid, axis,
/// labels) match what every component in the set uses.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub categorical: &'static [&'static str],
}

/// Slice colors for the polyphony donut, dark blue through light blue.
pub const CATEGORY_10: &[&str] = &[
    "#1e3799", // dark blue
    "#4834d4", // purple
    "#686de0", // light purple
    "#be2edd", // pink purple
    "#e056fd", // pink
    "#ff7979", // coral
    "#f0932b", // orange
    "#ffbe76", // light orange
    "#badc58", // yellow green
    "#c7ecee", // light blue
];

/// Treemap cell colors: the default purple set and a warm alternate.
pub const TREEMAP_LEVEL_1: &[&str] = &["#9B6B9E", "#7B68EE", "#9370DB"];
pub const TREEMAP_LEVEL_2: &[&str] = &["#F4C430", "#FFD700", "#FFA07A"];

impl Palette {
    pub fn standard() -> Self {
        Self {
            name: "standard",
            grid: "#e0e0e0",
            axis: "#666",
            label: "#666",
            title: "#000",
            categorical: CATEGORY_10,
        }
    }

    pub fn color(&self, i: usize) -> &'static str {
        self.categorical[i % self.categorical.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

/// Era ramp used by the release-count bars: one color per stretch of years.
pub fn year_color(year: i32) -> &'static str {
    if year < 1975 {
        "#FFD700" // yellow
    } else if year < 1990 {
        "#FFA500" // orange
    } else if year < 2000 {
        "#FA8072" // salmon
    } else if year < 2010 {
        "#BA55D3" // purple
    } else if year < 2017 {
        "#663399" // darker purple
    } else {
        "#4169E1" // blue
    }
}
