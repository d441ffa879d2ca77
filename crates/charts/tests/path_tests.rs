// File: crates/charts/tests/path_tests.rs
// Summary: Path generator structure: curves, area closure, donut arcs.

use synthviz_charts::path::{
    annular_sector, arc_centroid, arc_label_position, area_path, line_path,
};
use synthviz_charts::Curve;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn linear_line_is_move_then_lines() {
    let pts = [(0.0, 0.0), (10.0, 5.0), (20.0, 3.0)];
    let d = line_path(&pts, Curve::Linear).into_string();
    assert!(d.starts_with("M0,0"));
    assert_eq!(count(&d, "L"), 2);
    assert_eq!(count(&d, "C"), 0);
}

#[test]
fn monotone_line_emits_one_cubic_per_segment() {
    let pts = [(0.0, 0.0), (10.0, 5.0), (20.0, 3.0), (30.0, 8.0)];
    let d = line_path(&pts, Curve::MonotoneX).into_string();
    assert!(d.starts_with("M0,0"));
    assert_eq!(count(&d, "C"), 3);
    // The path lands exactly on the last point.
    assert!(d.ends_with("30,8"));
}

#[test]
fn monotone_two_points_is_a_straight_segment() {
    let d = line_path(&[(0.0, 0.0), (10.0, 10.0)], Curve::MonotoneX).into_string();
    assert_eq!(d, "M0,0 L10,10");
}

#[test]
fn monotone_control_points_stay_between_flat_neighbors() {
    // All y equal: every tangent is zero, so control y must equal the data y.
    let pts = [(0.0, 5.0), (10.0, 5.0), (20.0, 5.0)];
    let d = line_path(&pts, Curve::MonotoneX).into_string();
    // Every coordinate pair ends in y = 5.
    for cmd in d.split(' ') {
        let coords = cmd.trim_start_matches(['M', 'C', 'L']);
        for pair in coords.split(',').collect::<Vec<_>>().chunks(2) {
            if let [_, y] = pair {
                assert_eq!(*y, "5", "unexpected y in {cmd}");
            }
        }
    }
}

#[test]
fn basis_line_starts_and_ends_on_the_data() {
    let pts = [(0.0, 0.0), (10.0, 20.0), (20.0, 10.0), (30.0, 30.0)];
    let d = line_path(&pts, Curve::Basis).into_string();
    assert!(d.starts_with("M0,0"));
    assert!(d.ends_with("L30,30"));
    // n - 1 cubics: one per sliding window plus the repeated tail knot.
    assert_eq!(count(&d, "C"), 3);
}

#[test]
fn single_point_is_a_bare_move() {
    let d = line_path(&[(4.0, 7.0)], Curve::Basis).into_string();
    assert_eq!(d, "M4,7");
}

#[test]
fn area_closes_along_the_baseline() {
    let pts = [(0.0, 10.0), (50.0, 2.0), (100.0, 8.0)];
    let d = area_path(&pts, 400.0, Curve::Linear).into_string();
    assert!(d.ends_with("L100,400 L0,400 Z"));
}

#[test]
fn empty_area_is_empty() {
    let d = area_path(&[], 400.0, Curve::Linear).into_string();
    assert!(d.is_empty());
}

#[test]
fn quarter_sector_uses_two_arcs_and_closes() {
    use std::f64::consts::FRAC_PI_2;
    let d = annular_sector(0.0, FRAC_PI_2, 100.0, 250.0).into_string();
    assert_eq!(count(&d, "A"), 2);
    assert_eq!(count(&d, "Z"), 1);
    // Starts at 12 o'clock on the outer radius.
    assert!(d.starts_with("M0,-250"));
}

#[test]
fn majority_sector_sets_the_large_arc_flag() {
    use std::f64::consts::PI;
    let d = annular_sector(0.0, 1.5 * PI, 100.0, 250.0).into_string();
    assert!(d.contains("A250,250 0 1,1"));

    let d = annular_sector(0.0, 0.5 * PI, 100.0, 250.0).into_string();
    assert!(d.contains("A250,250 0 0,1"));
}

#[test]
fn full_ring_splits_into_two_subpaths() {
    use std::f64::consts::TAU;
    let d = annular_sector(0.0, TAU, 100.0, 250.0).into_string();
    assert_eq!(count(&d, "M"), 2);
    assert_eq!(count(&d, "A"), 4);
}

#[test]
fn zero_sweep_sector_is_empty() {
    let d = annular_sector(1.0, 1.0, 100.0, 250.0).into_string();
    assert!(d.is_empty());
}

#[test]
fn centroid_sits_at_the_angular_and_radial_midpoint() {
    use std::f64::consts::PI;
    // Half circle starting at 12 o'clock: midpoint angle points right.
    let (x, y) = arc_centroid(0.0, PI, 100.0, 250.0);
    assert!((x - 175.0).abs() < 1e-9);
    assert!(y.abs() < 1e-9);
}

#[test]
fn label_position_is_outside_the_given_radius() {
    let (x, y) = arc_label_position(0.0, std::f64::consts::PI, 280.0);
    assert!(((x * x + y * y).sqrt() - 280.0).abs() < 1e-9);
}
