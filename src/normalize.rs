//! Curve normalization and consecutive-duplicate collapsing.
//!
//! Raw signatures live on wildly different scales per axis (volts vs
//! milliamps) and carry sensor noise. Before any shape comparison each axis
//! is centered to zero mean and divided by a shared scale: the larger of
//! the two curves' standard deviations, clipped from below by the
//! [`NoiseScale`] floor so that a noise-dominated axis is not amplified to
//! full scale.
//!
//! Normalized curves then have runs of near-coincident samples collapsed;
//! repeated points would produce zero-length spline spans.

use nalgebra::Point2;

use crate::config::NoiseScale;
use crate::curve::IvCurve;
use crate::error::{CompareError, Result};
use crate::math::stats::{mean, std_dev};

/// Tolerance for treating consecutive normalized samples as duplicates.
///
/// Applied per axis with a relative component, so the effective threshold
/// is `DEDUP_EPSILON * (1 + magnitude)`.
pub const DEDUP_EPSILON: f64 = 1e-6;

/// Normalize one or two curves onto a shared dimensionless scale.
///
/// Each axis of each curve is centered on that curve's own mean and divided
/// by the shared scale `max(sigma(a), sigma(b), floor)`. With `b` absent the
/// scale uses only `a`'s dispersion.
#[must_use]
pub fn normalize_pair(
    a: &IvCurve,
    b: Option<&IvCurve>,
    noise: &NoiseScale,
) -> (Vec<Point2<f64>>, Option<Vec<Point2<f64>>>) {
    let sigma_v_b = b.map_or(0.0, |c| std_dev(c.voltages()));
    let sigma_c_b = b.map_or(0.0, |c| std_dev(c.currents()));

    let scale_v = std_dev(a.voltages()).max(sigma_v_b).max(noise.voltage());
    let scale_c = std_dev(a.currents()).max(sigma_c_b).max(noise.current());

    let na = normalize_curve(a, scale_v, scale_c);
    let nb = b.map(|c| normalize_curve(c, scale_v, scale_c));
    (na, nb)
}

fn normalize_curve(curve: &IvCurve, scale_v: f64, scale_c: f64) -> Vec<Point2<f64>> {
    let mean_v = mean(curve.voltages());
    let mean_c = mean(curve.currents());
    curve
        .voltages()
        .iter()
        .zip(curve.currents().iter())
        .map(|(&v, &c)| Point2::new((v - mean_v) / scale_v, (c - mean_c) / scale_c))
        .collect()
}

/// Collapse runs of near-coincident consecutive points.
///
/// A point is kept only when it differs from the last kept point by more
/// than the duplicate tolerance on at least one axis; the final point is
/// always kept.
///
/// # Errors
///
/// Returns `DegenerateCurve` when fewer than two distinct points survive,
/// i.e. the whole curve collapses to a single spot.
pub fn collapse_repeats(points: &[Point2<f64>]) -> Result<Vec<Point2<f64>>> {
    let Some((last, interior)) = points.split_last() else {
        return Err(CompareError::DegenerateCurve);
    };

    let mut kept: Vec<Point2<f64>> = Vec::with_capacity(points.len());
    for p in interior {
        match kept.last() {
            Some(prev) if !differs(prev, p) => {}
            _ => kept.push(*p),
        }
    }
    kept.push(*last);

    // The unconditional final push may re-add a near-duplicate; a curve is
    // degenerate only when no two kept points are distinct.
    if kept.len() < 2 || (kept.len() == 2 && !differs(&kept[0], &kept[1])) {
        return Err(CompareError::DegenerateCurve);
    }
    Ok(kept)
}

fn differs(a: &Point2<f64>, b: &Point2<f64>) -> bool {
    axis_differs(a.x, b.x) || axis_differs(a.y, b.y)
}

fn axis_differs(x: f64, y: f64) -> bool {
    (x - y).abs() > DEDUP_EPSILON * (1.0 + x.abs().max(y.abs()))
}
