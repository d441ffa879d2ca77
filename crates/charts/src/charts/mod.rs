// File: crates/charts/src/charts/mod.rs
// Summary: Chart components; each maps (data, config) to an SVG document.

pub mod area;
pub mod bar;
pub mod density;
pub mod donut;
pub mod dual_axis;
pub mod line;
pub mod scatter;
pub mod treemap;
