// File: crates/stats/src/density.rs
// Summary: Kernel density estimation over a regular grid.

use crate::error::StatsError;
use crate::kernel::Kernel;

/// One point of a density curve: grid position and smoothed frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Estimate the density of `sample` with the Epanechnikov kernel.
///
/// The grid starts at `min(sample)`, steps by `bandwidth`, and stops before
/// `max(sample) + bandwidth`, so the first point is the sample minimum and
/// the grid reaches at least the sample maximum. The same value serves as
/// smoothing bandwidth and grid resolution. Density at each grid point is
/// the arithmetic mean of the kernel over all sample values; every returned
/// density is >= 0 and the output is a pure function of the inputs.
///
/// Errors: [`StatsError::EmptyInput`] for an empty sample,
/// [`StatsError::InvalidBandwidth`] for a non-positive or non-finite
/// bandwidth.
pub fn compute_density(sample: &[f64], bandwidth: f64) -> Result<Vec<DensityPoint>, StatsError> {
    compute_density_with(sample, bandwidth, Kernel::Epanechnikov)
}

/// Same as [`compute_density`] with an explicit kernel choice.
pub fn compute_density_with(
    sample: &[f64],
    bandwidth: f64,
    kernel: Kernel,
) -> Result<Vec<DensityPoint>, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if !(bandwidth > 0.0) || !bandwidth.is_finite() {
        return Err(StatsError::InvalidBandwidth(bandwidth));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in sample {
        min = min.min(v);
        max = max.max(v);
    }

    let n = sample.len() as f64;
    let steps = (((max - min) + bandwidth) / bandwidth).ceil().max(1.0) as usize;

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        // Grid point from the base + i*step form so rounding error does not
        // accumulate across the grid.
        let t = min + bandwidth * i as f64;
        let sum: f64 = sample.iter().map(|&v| kernel.evaluate(t - v, bandwidth)).sum();
        out.push(DensityPoint { x: t, density: sum / n });
    }
    Ok(out)
}
