// File: crates/charts/src/error.rs
// Summary: Error type for chart construction and output.

use synthviz_stats::StatsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Chart received no data; nothing meaningful can be drawn.
    #[error("chart data is empty")]
    EmptyData,

    /// Margins leave no positive plot area inside the given dimensions.
    #[error("invalid dimensions: inner plot area is {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// A numeric routine rejected its input or failed to solve.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Writing an SVG document to disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
