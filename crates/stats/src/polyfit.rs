// File: crates/stats/src/polyfit.rs
// Summary: Least-squares polynomial fitting via the normal equations.

use crate::error::StatsError;
use crate::solve::solve_linear;

/// A single (x, y) observation for trend fitting.
///
/// Points flagged as `prediction` are excluded from the fit but stay in the
/// input so callers can still display them (e.g. a forecast marker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
    pub prediction: bool,
}

impl Observation {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, prediction: false }
    }

    pub const fn predicted(x: f64, y: f64) -> Self {
        Self { x, y, prediction: true }
    }
}

/// A fitted polynomial in normalized-x coordinates.
///
/// Immutable once computed. `coefficients[i]` multiplies `z^i` where
/// `z = (x - x_mean) / x_std`; the normalization parameters are kept so any
/// raw x (including values outside the training range) can be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyModel {
    coefficients: Vec<f64>,
    x_mean: f64,
    x_std: f64,
}

impl PolyModel {
    /// Evaluate the fitted polynomial at `x`. Pure; extrapolation is allowed.
    pub fn predict(&self, x: f64) -> f64 {
        let z = (x - self.x_mean) / self.x_std;
        let mut acc = 0.0;
        let mut pow = 1.0;
        for &c in &self.coefficients {
            acc += c * pow;
            pow *= z;
        }
        acc
    }

    /// Fitted degree (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Fit a degree-`degree` polynomial to the non-prediction observations.
pub fn fit_polynomial(
    observations: &[Observation],
    degree: usize,
) -> Result<PolyModel, StatsError> {
    let xs: Vec<f64> = observations
        .iter()
        .filter(|o| !o.prediction)
        .map(|o| o.x)
        .collect();
    let ys: Vec<f64> = observations
        .iter()
        .filter(|o| !o.prediction)
        .map(|o| o.y)
        .collect();
    fit_xy(&xs, &ys, degree)
}

/// Fit a degree-`degree` polynomial to parallel x/y slices.
///
/// The x-values are normalized to zero mean and unit sample standard
/// deviation before the design matrix is built, which keeps the normal
/// equations well-conditioned for year-scale inputs. A zero deviation (all
/// x equal) substitutes 1 so normalization never divides by zero; the solve
/// then reports the rank deficiency as [`StatsError::SingularSystem`].
pub fn fit_xy(xs: &[f64], ys: &[f64], degree: usize) -> Result<PolyModel, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::MismatchedInputs { x_len: xs.len(), y_len: ys.len() });
    }
    if xs.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if degree == 0 {
        return Err(StatsError::InvalidDegree(degree));
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let std = sample_std(xs, x_mean);
    let x_std = if std > 0.0 { std } else { 1.0 };

    let terms = degree + 1;
    // Accumulate X'X and X'y directly; the design matrix is never materialized.
    let mut xtx = vec![0.0; terms * terms];
    let mut xty = vec![0.0; terms];
    let mut powers = vec![0.0; terms];
    for (&x, &y) in xs.iter().zip(ys) {
        let z = (x - x_mean) / x_std;
        let mut pow = 1.0;
        for p in powers.iter_mut() {
            *p = pow;
            pow *= z;
        }
        for i in 0..terms {
            for j in 0..terms {
                xtx[i * terms + j] += powers[i] * powers[j];
            }
            xty[i] += powers[i] * y;
        }
    }

    let coefficients = solve_linear(xtx, xty)?;
    Ok(PolyModel { coefficients, x_mean, x_std })
}

/// Sample standard deviation (n - 1 denominator); 0.0 for fewer than 2 points.
fn sample_std(xs: &[f64], mean: f64) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let ss: f64 = xs.iter().map(|&x| (x - mean) * (x - mean)).sum();
    (ss / (xs.len() as f64 - 1.0)).sqrt()
}
