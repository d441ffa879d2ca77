// File: crates/charts/src/path.rs
// Summary: SVG path construction: line/area generators, curves, donut arcs.

use crate::svg::num;

/// Interpolation applied between data points by the line/area generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Monotone cubic interpolation in x (Fritsch-Carlson tangents); never
    /// overshoots between points. Used by trend and dual-axis lines.
    MonotoneX,
    /// Uniform cubic B-spline; smooth but only approximates interior points.
    /// Used by the density area.
    Basis,
}

/// Incrementally built SVG path data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_cmd(&mut self, cmd: char, coords: &[f64]) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push(cmd);
        for (i, &c) in coords.iter().enumerate() {
            if i > 0 {
                self.d.push(',');
            }
            self.d.push_str(&num(c));
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_cmd('M', &[x, y]);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_cmd('L', &[x, y]);
        self
    }

    pub fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        self.push_cmd('C', &[c1x, c1y, c2x, c2y, x, y]);
        self
    }

    pub fn arc_to(&mut self, r: f64, large: bool, sweep: bool, x: f64, y: f64) -> &mut Self {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push('A');
        self.d.push_str(&num(r));
        self.d.push(',');
        self.d.push_str(&num(r));
        self.d.push_str(&format!(
            " 0 {},{} {},{}",
            large as u8, sweep as u8,
            num(x), num(y)
        ));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push('Z');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }

    pub fn into_string(self) -> String {
        self.d
    }
}

/// Build an open path through `points` with the given curve.
pub fn line_path(points: &[(f64, f64)], curve: Curve) -> PathData {
    let mut path = PathData::new();
    extend_with_curve(&mut path, points, curve);
    path
}

/// Build a closed area between the curved topline and a flat baseline.
///
/// The underside is drawn straight along `baseline_y`, matching an area
/// generator whose y0 is constant.
pub fn area_path(points: &[(f64, f64)], baseline_y: f64, curve: Curve) -> PathData {
    let mut path = PathData::new();
    if points.is_empty() {
        return path;
    }
    extend_with_curve(&mut path, points, curve);
    let last_x = points[points.len() - 1].0;
    let first_x = points[0].0;
    path.line_to(last_x, baseline_y);
    path.line_to(first_x, baseline_y);
    path.close();
    path
}

fn extend_with_curve(path: &mut PathData, points: &[(f64, f64)], curve: Curve) {
    match points {
        [] => {}
        [p] => {
            path.move_to(p.0, p.1);
        }
        _ => match curve {
            Curve::Linear => {
                path.move_to(points[0].0, points[0].1);
                for &(x, y) in &points[1..] {
                    path.line_to(x, y);
                }
            }
            Curve::MonotoneX => extend_monotone_x(path, points),
            Curve::Basis => extend_basis(path, points),
        },
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Fritsch-Carlson tangent at an interior point.
///
/// Clamping to three times the smaller one-sided slope (and to zero when the
/// slopes disagree in sign) is what keeps the interpolant monotone.
fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = if h0 != 0.0 { (p1.1 - p0.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.1 - p1.1) / h1 } else { 0.0 };
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if m.is_finite() {
        m
    } else {
        0.0
    }
}

/// One-sided endpoint tangent given the adjacent interior tangent `t`.
fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    } else {
        t
    }
}

fn extend_monotone_x(path: &mut PathData, points: &[(f64, f64)]) {
    let n = points.len();
    path.move_to(points[0].0, points[0].1);
    if n == 2 {
        path.line_to(points[1].0, points[1].1);
        return;
    }

    let mut tangents = vec![0.0; n];
    for i in 1..(n - 1) {
        tangents[i] = slope3(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = slope2(points[0], points[1], tangents[1]);
    tangents[n - 1] = slope2(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..(n - 1) {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        path.cubic_to(
            x0 + dx,
            y0 + dx * tangents[i],
            x1 - dx,
            y1 - dx * tangents[i + 1],
            x1,
            y1,
        );
    }
}

fn extend_basis(path: &mut PathData, points: &[(f64, f64)]) {
    let n = points.len();
    path.move_to(points[0].0, points[0].1);
    if n == 2 {
        path.line_to(points[1].0, points[1].1);
        return;
    }

    // Uniform B-spline over a sliding pair (p0, p1); the lead-in line lands
    // on the first blended knot and the tail repeats the last point so the
    // path ends exactly on it.
    let (mut x0, mut y0) = points[0];
    let (mut x1, mut y1) = points[1];
    path.line_to((5.0 * x0 + x1) / 6.0, (5.0 * y0 + y1) / 6.0);

    let emit = |path: &mut PathData, x0: f64, y0: f64, x1: f64, y1: f64, x: f64, y: f64| {
        path.cubic_to(
            (2.0 * x0 + x1) / 3.0,
            (2.0 * y0 + y1) / 3.0,
            (x0 + 2.0 * x1) / 3.0,
            (y0 + 2.0 * y1) / 3.0,
            (x0 + 4.0 * x1 + x) / 6.0,
            (y0 + 4.0 * y1 + y) / 6.0,
        );
    };

    for &(x, y) in &points[2..] {
        emit(path, x0, y0, x1, y1, x, y);
        (x0, y0) = (x1, y1);
        (x1, y1) = (x, y);
    }
    emit(path, x0, y0, x1, y1, x1, y1);
    path.line_to(x1, y1);
}

/// Point on a circle of radius `r` at `angle`, measured clockwise from
/// 12 o'clock (the pie/arc convention).
fn on_circle(angle: f64, r: f64) -> (f64, f64) {
    let a = angle - std::f64::consts::FRAC_PI_2;
    (a.cos() * r, a.sin() * r)
}

/// Annular sector path (donut slice) between `start_angle` and `end_angle`.
///
/// Angles in radians, clockwise from 12 o'clock, centered on the origin.
pub fn annular_sector(start_angle: f64, end_angle: f64, inner_r: f64, outer_r: f64) -> PathData {
    use std::f64::consts::PI;

    let mut path = PathData::new();
    let sweep = end_angle - start_angle;
    if sweep <= 0.0 {
        return path;
    }

    // A full ring cannot be a single SVG arc (start == end collapses it),
    // so split it at the halfway angle.
    if sweep >= 2.0 * PI - 1e-9 {
        let mid = start_angle + sweep / 2.0;
        let (ox0, oy0) = on_circle(start_angle, outer_r);
        let (oxm, oym) = on_circle(mid, outer_r);
        let (ix0, iy0) = on_circle(start_angle, inner_r);
        let (ixm, iym) = on_circle(mid, inner_r);
        path.move_to(ox0, oy0);
        path.arc_to(outer_r, false, true, oxm, oym);
        path.arc_to(outer_r, false, true, ox0, oy0);
        path.close();
        path.move_to(ix0, iy0);
        path.arc_to(inner_r, false, false, ixm, iym);
        path.arc_to(inner_r, false, false, ix0, iy0);
        path.close();
        return path;
    }

    let large = sweep > PI;
    let (ox0, oy0) = on_circle(start_angle, outer_r);
    let (ox1, oy1) = on_circle(end_angle, outer_r);
    let (ix0, iy0) = on_circle(start_angle, inner_r);
    let (ix1, iy1) = on_circle(end_angle, inner_r);

    path.move_to(ox0, oy0);
    path.arc_to(outer_r, large, true, ox1, oy1);
    path.line_to(ix1, iy1);
    path.arc_to(inner_r, large, false, ix0, iy0);
    path.close();
    path
}

/// Midpoint of an annular sector, for percentage labels.
pub fn arc_centroid(start_angle: f64, end_angle: f64, inner_r: f64, outer_r: f64) -> (f64, f64) {
    on_circle((start_angle + end_angle) / 2.0, (inner_r + outer_r) / 2.0)
}

/// Label anchor just outside the sector at `radius` past the outer edge.
pub fn arc_label_position(start_angle: f64, end_angle: f64, radius: f64) -> (f64, f64) {
    on_circle((start_angle + end_angle) / 2.0, radius)
}
