// File: crates/charts/src/types.rs
// Summary: Shared display types (margins, plot frame).

use crate::error::ChartError;

/// Margins around the plot area, in CSS pixels.
///
/// Each chart component documents its own default margin; there is no shared
/// mutable default object, a config value is constructed per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn hsum(&self) -> f64 {
        self.left + self.right
    }

    pub const fn vsum(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Outer dimensions plus margins resolved into an inner plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Frame {
    /// Resolve outer dimensions and margins, rejecting non-positive plot areas.
    pub fn resolve(width: f64, height: f64, margin: Margin) -> Result<Self, ChartError> {
        let inner_width = width - margin.hsum();
        let inner_height = height - margin.vsum();
        if !(inner_width > 0.0) || !(inner_height > 0.0) {
            return Err(ChartError::InvalidDimensions {
                width: inner_width,
                height: inner_height,
            });
        }
        Ok(Self { width, height, margin, inner_width, inner_height })
    }
}
