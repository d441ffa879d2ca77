// File: crates/stats/src/lib.rs
// Summary: Numeric core: kernel density estimation and polynomial trend fitting.

pub mod density;
pub mod error;
pub mod kernel;
pub mod polyfit;
pub mod solve;

pub use density::{compute_density, compute_density_with, DensityPoint};
pub use error::StatsError;
pub use kernel::Kernel;
pub use polyfit::{fit_polynomial, fit_xy, Observation, PolyModel};
