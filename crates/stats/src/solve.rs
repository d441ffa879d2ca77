// File: crates/stats/src/solve.rs
// Summary: Dense linear solve via Gaussian elimination with partial pivoting.

use crate::error::StatsError;

/// Pivot magnitudes at or below this are treated as zero.
///
/// The normal-equations entries here are O(1) after x-normalization, so a
/// rank-deficient system eliminates down to pivots on the order of machine
/// epsilon; 1e-10 separates those cleanly from genuinely solvable systems.
const PIVOT_EPS: f64 = 1e-10;

/// Solve `a * x = b` in place for a small square system.
///
/// `a` is row-major `n * n`, `b` has length `n`. Rows are swapped to put the
/// largest remaining entry on the diagonal; if the best available pivot is
/// still near zero the matrix is rank-deficient and the solve fails with
/// [`StatsError::SingularSystem`] instead of dividing through and letting
/// NaN or infinity escape.
pub fn solve_linear(mut a: Vec<f64>, mut b: Vec<f64>) -> Result<Vec<f64>, StatsError> {
    let n = b.len();
    debug_assert_eq!(a.len(), n * n);

    // Forward elimination with partial pivoting.
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = a[col * n + col].abs();
        for row in (col + 1)..n {
            let mag = a[row * n + col].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }
        if !(pivot_mag > PIVOT_EPS) {
            return Err(StatsError::SingularSystem { column: col });
        }
        if pivot_row != col {
            for k in 0..n {
                a.swap(col * n + k, pivot_row * n + k);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[col * n + col];
        for row in (col + 1)..n {
            let factor = a[row * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row * n + k] -= factor * a[col * n + k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in (row + 1)..n {
            acc -= a[row * n + k] * x[k];
        }
        x[row] = acc / a[row * n + row];
    }
    Ok(x)
}
