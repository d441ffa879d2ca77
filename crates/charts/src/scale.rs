// File: crates/charts/src/scale.rs
// Summary: Linear and band scales with d3-style tick generation.

/// Linear mapping from a data domain onto a pixel range.
///
/// Ranges may be inverted (pixel origin at the top for y-axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        // Degenerate domains map everything to the range start.
        let t = if span.abs() < 1e-12 { 0.0 } else { (v - self.domain.0) / span };
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn invert(&self, p: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        let t = if span.abs() < 1e-12 { 0.0 } else { (p - self.range.0) / span };
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Expand the domain outward to round values for roughly `count` ticks.
    ///
    /// Two passes, recomputing the step after the first widening, the same
    /// way d3's `nice` converges.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        if start > stop {
            std::mem::swap(&mut start, &mut stop);
        }
        for _ in 0..2 {
            let step = tick_step(start, stop, count);
            if step <= 0.0 {
                break;
            }
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        }
        if self.domain.0 <= self.domain.1 {
            self.domain = (start, stop);
        } else {
            self.domain = (stop, start);
        }
        self
    }

    /// Round tick values covering the domain, spaced by a 1/2/5 x 10^k step.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if start > stop {
            std::mem::swap(&mut start, &mut stop);
        }
        let step = tick_step(start, stop, count);
        if step <= 0.0 || !step.is_finite() {
            return vec![start];
        }
        let first = (start / step).ceil();
        let last = (stop / step).floor();
        let mut out = Vec::new();
        let mut i = first;
        while i <= last + 0.5 {
            out.push(i * step);
            i += 1.0;
        }
        out
    }
}

/// Tick spacing per d3's rule: the power of ten nearest the raw step,
/// bumped to 2x or 5x when the raw step overshoots it enough.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let raw = (stop - start) / count;
    if raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Evenly divided categorical scale with inner/outer padding, for bar charts.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    range: (f64, f64),
    padding: f64,
    step: f64,
    start: f64,
}

impl BandScale {
    /// `padding` is the gap fraction of a step, applied between bands and at
    /// both ends (the single-knob `scaleBand().padding(p)` form).
    pub fn new(keys: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = keys.len() as f64;
        let span = range.1 - range.0;
        let step = if n > 0.0 { span / (n + padding) } else { span };
        let start = range.0 + step * padding;
        Self { keys, range, padding, step, start }
    }

    /// Left edge of the band for `key`, if the key is in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys.iter().position(|k| k == key).map(|i| self.position_at(i))
    }

    /// Left edge of the band at domain index `i`.
    pub fn position_at(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
