//! Open-uniform B-spline resampling.
//!
//! A cleaned signature is re-expressed as a clamped uniform B-spline through
//! its points and evaluated at a fixed number of parameter values. The fit
//! suppresses high-frequency sampling noise while preserving the trace
//! shape, and brings two signatures of different lengths onto a common
//! resolution.
//!
//! Basis functions follow the Cox-de Boor recursion over an open knot
//! vector with endpoint multiplicity equal to the order, so the fitted
//! curve passes through the first and last points exactly.

use nalgebra::{Point2, Vector2};

/// Order (degree + 1) of the fitted B-spline.
///
/// Order 3 gives a quadratic piecewise fit; when a curve collapses to
/// fewer points than the order, the order drops to the point count.
pub const SPLINE_ORDER: usize = 3;

/// Resample `control` onto `output_len` evenly spaced spline parameters.
///
/// The spline is clamped, so the first and last output points coincide
/// with the first and last control points. `control` must hold at least
/// two points and `output_len` must be at least two.
#[must_use]
pub fn resample(control: &[Point2<f64>], output_len: usize) -> Vec<Point2<f64>> {
    debug_assert!(control.len() >= 2);
    debug_assert!(output_len >= 2);

    let n = control.len();
    let order = SPLINE_ORDER.min(n);
    let knots = open_knot_vector(n, order);
    let span = *knots.last().unwrap_or(&0.0);

    let mut out = Vec::with_capacity(output_len);
    for i in 0..output_len {
        // Exact final knot at the last step; accumulating t by a fixed
        // increment would overshoot and zero out every basis function.
        let t = if i + 1 == output_len {
            span
        } else {
            span * i as f64 / (output_len - 1) as f64
        };
        let weights = basis_functions(order, t, n, &knots);
        let mut acc = Vector2::zeros();
        for (w, p) in weights.iter().zip(control) {
            acc += *w * p.coords;
        }
        out.push(Point2::from(acc));
    }
    out
}

/// Clamped uniform knot vector: `order` zeros, unit interior steps, and the
/// maximum value repeated `order` times, `n + order` knots in total.
fn open_knot_vector(n: usize, order: usize) -> Vec<f64> {
    let mut knots = vec![0.0; n + order];
    for i in 1..n + order {
        knots[i] = if i >= order && i < n + 1 {
            knots[i - 1] + 1.0
        } else {
            knots[i - 1]
        };
    }
    knots
}

/// Evaluate all `n` basis functions of the given order at parameter `t`.
fn basis_functions(order: usize, t: f64, n: usize, knots: &[f64]) -> Vec<f64> {
    let num_knots = n + order;
    let mut temp = vec![0.0; num_knots - 1];

    // Degree-zero indicators per knot span.
    for (i, w) in temp.iter_mut().enumerate() {
        *w = if t >= knots[i] && t < knots[i + 1] {
            1.0
        } else {
            0.0
        };
    }

    // Elevate the degree; terms over empty spans contribute zero.
    for k in 2..=order {
        for i in 0..num_knots - k {
            let d = if temp[i] != 0.0 && knots[i + k - 1] > knots[i] {
                (t - knots[i]) * temp[i] / (knots[i + k - 1] - knots[i])
            } else {
                0.0
            };
            let e = if temp[i + 1] != 0.0 && knots[i + k] > knots[i + 1] {
                (knots[i + k] - t) * temp[i + 1] / (knots[i + k] - knots[i + 1])
            } else {
                0.0
            };
            temp[i] = d + e;
        }
    }

    // At the final knot every half-open span test fails; the curve is
    // clamped there, so the last basis function carries full weight.
    if t == knots[num_knots - 1] {
        temp[n - 1] = 1.0;
    }

    temp.truncate(n);
    temp
}
