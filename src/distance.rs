//! Shape-distance aggregation between fitted signatures.
//!
//! Two aggregations share the same nearest-segment idea:
//!
//! - [`mean_nearest_segment_dist2`] averages, over every point of one
//!   curve, the squared distance to the closest adjacent segment around the
//!   nearest point of the other curve. Averaged in both directions it gives
//!   the symmetric raw dissimilarity behind the final score.
//! - [`max_axis_deviations`] keeps the voltage and current components of
//!   the distance separate and reports the worst per-axis deviation of any
//!   reference point from the test curve.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::geometry::{seg_axis_dist, seg_dist2};

/// Exponent of the saturating score map `1 - exp(-k * x)`.
///
/// Chosen empirically so that visually distinct signatures land near 1
/// while sampling jitter stays near 0.
pub const RESCALE_EXPONENT: f64 = 8.0;

/// Axes below this peak magnitude are treated as identically zero when
/// normalizing for the per-axis deviation metric.
const PEAK_FLOOR: f64 = 1e-12;

/// Worst per-axis deviation of a reference signature from a test signature.
///
/// Both components are ratios of the shared per-axis peak magnitude; they
/// are non-negative and may exceed 1 for thoroughly different curves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaxDeviations {
    /// Largest voltage-axis deviation ratio.
    pub voltage: f64,
    /// Largest current-axis deviation ratio.
    pub current: f64,
}

/// Map a raw mean squared distance onto the bounded `[0, 1]` score.
#[inline]
#[must_use]
pub fn rescale_score(x: f64) -> f64 {
    1.0 - (-RESCALE_EXPONENT * x).exp()
}

/// Mean squared nearest-segment distance from every point of `pts` to
/// `curve`.
///
/// For each point the nearest curve point is found first; the distance is
/// then taken to whichever adjacent segment (into or out of that point)
/// lies closer. At the trace ends the missing side counts as infinitely
/// far. `curve` must hold at least two points.
#[must_use]
pub fn mean_nearest_segment_dist2(curve: &[Point2<f64>], pts: &[Point2<f64>]) -> f64 {
    debug_assert!(curve.len() >= 2);
    if pts.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for pt in pts {
        let nearest = nearest_index(curve, pt);
        let before = if nearest > 0 {
            seg_dist2(pt, &curve[nearest - 1], &curve[nearest])
        } else {
            f64::INFINITY
        };
        let after = if nearest + 1 < curve.len() {
            seg_dist2(pt, &curve[nearest], &curve[nearest + 1])
        } else {
            f64::INFINITY
        };
        total += before.min(after);
    }
    total / pts.len() as f64
}

/// Worst per-axis deviation of `reference` points from the `test` curve.
///
/// Coordinates are first normalized per axis by the larger of the two
/// curves' peak magnitudes. For each reference point every test segment is
/// tried; the segment closest by combined squared distance contributes its
/// per-axis split, and the maxima of those splits over all reference
/// points form the result. `test` must hold at least two points.
#[must_use]
pub fn max_axis_deviations(reference: &[Point2<f64>], test: &[Point2<f64>]) -> MaxDeviations {
    debug_assert!(test.len() >= 2);

    let norm_v = shared_peak(reference, test, |p| p.x).max(PEAK_FLOOR);
    let norm_c = shared_peak(reference, test, |p| p.y).max(PEAK_FLOOR);
    let scale = |p: &Point2<f64>| Point2::new(p.x / norm_v, p.y / norm_c);

    let test_scaled: Vec<Point2<f64>> = test.iter().map(|p| scale(p)).collect();

    let mut max_v = 0.0f64;
    let mut max_c = 0.0f64;
    for r in reference {
        let p = scale(r);
        let mut best = f64::INFINITY;
        let mut best_v = 0.0;
        let mut best_c = 0.0;
        for seg in test_scaled.windows(2) {
            let (dv, dc) = seg_axis_dist(&p, &seg[0], &seg[1]);
            let combined = dv * dv + dc * dc;
            if combined < best {
                best = combined;
                best_v = dv;
                best_c = dc;
            }
        }
        max_v = max_v.max(best_v);
        max_c = max_c.max(best_c);
    }

    MaxDeviations {
        voltage: max_v,
        current: max_c,
    }
}

fn nearest_index(curve: &[Point2<f64>], pt: &Point2<f64>) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in curve.iter().enumerate() {
        let d = (p - pt).norm_squared();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

fn shared_peak(a: &[Point2<f64>], b: &[Point2<f64>], axis: impl Fn(&Point2<f64>) -> f64) -> f64 {
    a.iter()
        .chain(b.iter())
        .fold(0.0, |acc, p| acc.max(axis(p).abs()))
}
