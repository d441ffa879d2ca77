// File: crates/charts/tests/treemap_tests.rs
// Summary: Squarified layout geometry: proportional areas, bounds, row shape.

use synthviz_charts::charts::treemap::{squarify, Cell};

const TOL: f64 = 1e-9;

fn area(c: &Cell) -> f64 {
    c.width() * c.height()
}

fn bounds(w: f64, h: f64) -> Cell {
    Cell { x0: 0.0, y0: 0.0, x1: w, y1: h }
}

#[test]
fn classic_example_lays_the_first_row_on_the_left() {
    // The worked example from the squarified treemap paper: values summing
    // to 24 in a 6x4 rectangle. The first row is the two sixes, stacked in
    // a 3-wide column.
    let values = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
    let cells = squarify(&values, bounds(6.0, 4.0));

    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0], Cell { x0: 0.0, y0: 0.0, x1: 3.0, y1: 2.0 });
    assert_eq!(cells[1], Cell { x0: 0.0, y0: 2.0, x1: 3.0, y1: 4.0 });
}

#[test]
fn cell_areas_are_proportional_to_values() {
    let values = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
    let total: f64 = values.iter().sum();
    let cells = squarify(&values, bounds(600.0, 400.0));
    let scale = 600.0 * 400.0 / total;
    for (v, c) in values.iter().zip(&cells) {
        assert!(
            (area(c) - v * scale).abs() < 1e-6,
            "value {v} got area {}",
            area(c)
        );
    }
}

#[test]
fn cells_tile_the_bounds_exactly() {
    let values = [10.0, 7.0, 5.0, 4.0, 4.0, 3.0, 2.0, 1.0];
    let cells = squarify(&values, bounds(800.0, 560.0));
    let covered: f64 = cells.iter().map(area).sum();
    assert!((covered - 800.0 * 560.0).abs() < 1e-6);
}

#[test]
fn cells_stay_inside_the_bounds() {
    let values = [13.0, 11.0, 7.0, 5.0, 3.0, 2.0, 2.0, 1.0, 1.0];
    let b = bounds(799.0, 519.0);
    for c in squarify(&values, b) {
        assert!(c.x0 >= -TOL && c.y0 >= -TOL);
        assert!(c.x1 <= b.x1 + 1e-6 && c.y1 <= b.y1 + 1e-6);
        assert!(c.x1 >= c.x0 && c.y1 >= c.y0);
    }
}

#[test]
fn single_value_fills_the_whole_rectangle() {
    let cells = squarify(&[42.0], bounds(100.0, 50.0));
    assert_eq!(cells, vec![bounds(100.0, 50.0)]);
}

#[test]
fn offset_bounds_are_respected() {
    let b = Cell { x0: 10.0, y0: 40.0, x1: 110.0, y1: 90.0 };
    for c in squarify(&[3.0, 2.0, 1.0], b) {
        assert!(c.x0 >= 10.0 - TOL && c.y0 >= 40.0 - TOL);
        assert!(c.x1 <= 110.0 + 1e-6 && c.y1 <= 90.0 + 1e-6);
    }
}

#[test]
fn all_zero_values_collapse_to_the_origin_corner() {
    let cells = squarify(&[0.0, 0.0, 0.0], bounds(100.0, 100.0));
    assert_eq!(cells.len(), 3);
    for c in cells {
        assert_eq!(area(&c), 0.0);
    }
}

#[test]
fn aspect_ratios_beat_a_plain_slice_layout() {
    // Slicing 8 equal values across 800px gives 100x400 strips (ratio 4).
    // Squarified layout keeps every ratio well under that.
    let values = [1.0; 8];
    for c in squarify(&values, bounds(800.0, 400.0)) {
        let ratio = (c.width() / c.height()).max(c.height() / c.width());
        assert!(ratio <= 2.0 + TOL, "ratio {ratio} too elongated");
    }
}
