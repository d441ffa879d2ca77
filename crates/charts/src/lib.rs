// File: crates/charts/src/lib.rs
// Summary: Library entry point; exports scales, SVG primitives, and chart components.

pub mod axis;
pub mod charts;
pub mod error;
pub mod path;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod types;

pub use charts::area::{AreaChartConfig, ArchPoint};
pub use charts::bar::{BarChartConfig, BarColor, BarDatum};
pub use charts::density::DensityChartConfig;
pub use charts::donut::{DonutChartConfig, DonutEntry};
pub use charts::dual_axis::{DualAxisChartConfig, DualAxisPoint};
pub use charts::line::{LineChartConfig, LinePoint};
pub use charts::scatter::ScatterChartConfig;
pub use charts::treemap::{TreemapChartConfig, TreemapLeaf};
pub use error::ChartError;
pub use path::{Curve, PathData};
pub use scale::{BandScale, LinearScale};
pub use svg::SvgDoc;
pub use theme::Palette;
pub use types::Margin;
