// File: crates/stats/src/kernel.rs
// Summary: Smoothing kernels for density estimation.

/// Smoothing kernel applied to (grid point - sample value) distances.
///
/// Each variant is a proper density: scaled by the bandwidth `h`, it
/// integrates to 1 over its support `[-h, h]`. Epanechnikov is the default
/// and what the synth charts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// k(u) = 0.75 * (1 - (u/h)^2) / h for |u| <= h.
    #[default]
    Epanechnikov,
    /// k(u) = (1 - |u/h|) / h for |u| <= h.
    Triangular,
    /// k(u) = 0.5 / h for |u| <= h.
    Uniform,
}

impl Kernel {
    pub const fn name(&self) -> &'static str {
        match self {
            Kernel::Epanechnikov => "epanechnikov",
            Kernel::Triangular => "triangular",
            Kernel::Uniform => "uniform",
        }
    }

    /// Evaluate the bandwidth-scaled kernel at raw distance `u`.
    ///
    /// Returns exactly 0 outside the support. `h` must be positive; the
    /// density entry points validate that before calling in here.
    #[inline]
    pub fn evaluate(&self, u: f64, h: f64) -> f64 {
        let scaled = (u / h).abs();
        if scaled > 1.0 {
            return 0.0;
        }
        match self {
            Kernel::Epanechnikov => 0.75 * (1.0 - scaled * scaled) / h,
            Kernel::Triangular => (1.0 - scaled) / h,
            Kernel::Uniform => 0.5 / h,
        }
    }
}
