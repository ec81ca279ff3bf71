//! Planar point-to-segment distance primitives.
//!
//! Two flavors are needed: the combined squared distance used by the
//! shape-distance aggregation, and a per-axis split of the same distance
//! used by the maximum-deviation metric. Both clamp the projection to the
//! segment and guard degenerate (near zero length) segments.

use nalgebra::{Point2, Vector2};

/// Below this squared length a segment is treated as a single point.
const SEG_LEN2_FLOOR: f64 = 1e-30;

/// Squared distance from `p` to the segment `[a, b]`.
///
/// The projection of `p` onto the segment's carrier line decides the case:
/// outside `[0, 1]` the distance goes to the nearer endpoint, inside it is
/// the perpendicular distance obtained from the 2D cross product.
#[must_use]
pub fn seg_dist2(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let v1: Vector2<f64> = b - a;
    let v2: Vector2<f64> = p - a;
    let seg_len2 = v1.norm_squared();
    if seg_len2 < SEG_LEN2_FLOOR {
        return v2.norm_squared();
    }
    let proj = v1.dot(&v2) / seg_len2;
    if proj > 1.0 {
        (p - b).norm_squared()
    } else if proj < 0.0 {
        v2.norm_squared()
    } else {
        let cross = v1.perp(&v2);
        cross * cross / seg_len2
    }
}

/// Per-axis absolute distances from `p` to the segment `[a, b]`.
///
/// Returns `(|dx|, |dy|)` of the vector from `p` to its closest point on
/// the segment. Inside the projection interval the foot of the
/// perpendicular is found by solving the line/perpendicular pair with
/// Cramer's rule; the cross-product shortcut cannot be used here because
/// the two axes must stay separated.
#[must_use]
pub fn seg_axis_dist(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> (f64, f64) {
    let dir: Vector2<f64> = b - a;
    let seg_len2 = dir.norm_squared();
    if seg_len2 < SEG_LEN2_FLOOR {
        return ((p.x - a.x).abs(), (p.y - a.y).abs());
    }
    let proj = dir.dot(&(p - a)) / seg_len2;
    if proj > 1.0 {
        return ((p.x - b.x).abs(), (p.y - b.y).abs());
    }
    if proj < 0.0 {
        return ((p.x - a.x).abs(), (p.y - a.y).abs());
    }
    // Axis-aligned segments project perpendicularly along a single axis.
    if dir.x == 0.0 {
        return ((p.x - a.x).abs(), 0.0);
    }
    if dir.y == 0.0 {
        return (0.0, (p.y - a.y).abs());
    }
    // Carrier line:        x * dir.y - y * dir.x = c
    // Perpendicular at p:  x * dir.x + y * dir.y = d
    let c = b.x * dir.y - b.y * dir.x;
    let d = p.x * dir.x + p.y * dir.y;
    let foot_x = (c * dir.y + dir.x * d) / seg_len2;
    let foot_y = (d * dir.y - dir.x * c) / seg_len2;
    ((p.x - foot_x).abs(), (p.y - foot_y).abs())
}
