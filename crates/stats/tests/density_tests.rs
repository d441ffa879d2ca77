// File: crates/stats/tests/density_tests.rs
// Summary: Validate kernel density estimation against its contract.

use synthviz_stats::{compute_density, compute_density_with, Kernel, StatsError};

#[test]
fn densities_are_non_negative() {
    let sample = vec![1983.0, 1983.0, 1987.0, 1995.0, 2003.0, 2016.0, 2016.0];
    let curve = compute_density(&sample, 5.0).expect("density");
    assert!(!curve.is_empty());
    for p in &curve {
        assert!(p.density >= 0.0, "negative density at x={}", p.x);
    }
}

#[test]
fn grid_starts_at_min_and_covers_max() {
    let sample = vec![1970.0, 1999.0, 2021.0];
    let bw = 5.0;
    let curve = compute_density(&sample, bw).expect("density");
    assert_eq!(curve.first().unwrap().x, 1970.0);
    assert!(curve.last().unwrap().x >= 2021.0);
    // Regular spacing at the bandwidth.
    for w in curve.windows(2) {
        assert!((w[1].x - w[0].x - bw).abs() < 1e-9);
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let sample = vec![3.0, 7.0, 7.0, 12.0, 30.0];
    let a = compute_density(&sample, 2.5).expect("density");
    let b = compute_density(&sample, 2.5).expect("density");
    assert_eq!(a, b);
}

#[test]
fn point_mass_peaks_at_kernel_maximum() {
    // Four identical observations: density at the point is the kernel peak
    // 0.75 / h, and the grid collapses to that single position.
    let sample = vec![10.0, 10.0, 10.0, 10.0];
    let curve = compute_density(&sample, 5.0).expect("density");
    assert_eq!(curve.len(), 1);
    assert_eq!(curve[0].x, 10.0);
    assert!((curve[0].density - 0.15).abs() < 1e-12);
}

#[test]
fn kernel_support_decays_to_zero() {
    // Two observations 20 apart with bandwidth 5: the midpoint grid points
    // are at least one bandwidth from both, so their density is exactly 0.
    let sample = vec![0.0, 20.0];
    let curve = compute_density(&sample, 5.0).expect("density");
    let mid: Vec<_> = curve.iter().filter(|p| p.x == 5.0 || p.x == 10.0 || p.x == 15.0).collect();
    assert_eq!(mid.len(), 3);
    for p in mid {
        assert_eq!(p.density, 0.0, "expected zero density at x={}", p.x);
    }
}

#[test]
fn empty_sample_is_rejected() {
    assert_eq!(compute_density(&[], 5.0), Err(StatsError::EmptyInput));
}

#[test]
fn non_positive_bandwidth_is_rejected() {
    let sample = vec![1.0, 2.0];
    assert_eq!(compute_density(&sample, 0.0), Err(StatsError::InvalidBandwidth(0.0)));
    assert_eq!(compute_density(&sample, -3.0), Err(StatsError::InvalidBandwidth(-3.0)));
    assert!(matches!(
        compute_density(&sample, f64::NAN),
        Err(StatsError::InvalidBandwidth(_))
    ));
}

#[test]
fn alternate_kernels_integrate_to_one() {
    // Riemann sum of a single-point density over a fine grid approximates 1
    // for every kernel; checks the bandwidth scaling of each closed form.
    for kernel in [Kernel::Epanechnikov, Kernel::Triangular, Kernel::Uniform] {
        let h = 2.0;
        let step = 0.001;
        let mut integral = 0.0;
        let mut u = -h;
        while u <= h {
            integral += kernel.evaluate(u, h) * step;
            u += step;
        }
        assert!(
            (integral - 1.0).abs() < 1e-2,
            "{} integrates to {integral}",
            kernel.name()
        );
    }
}

#[test]
fn duplicates_are_frequency_weighted() {
    // Doubling an observation doubles its kernel contribution relative to a
    // single occurrence within the same sample size.
    let a = compute_density_with(&[0.0, 0.0, 100.0, 200.0], 5.0, Kernel::Epanechnikov).unwrap();
    let b = compute_density_with(&[0.0, 50.0, 100.0, 200.0], 5.0, Kernel::Epanechnikov).unwrap();
    assert!(a[0].density > b[0].density);
    assert!((a[0].density - 2.0 * b[0].density).abs() < 1e-12);
}
