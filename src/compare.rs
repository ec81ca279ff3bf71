//! The comparison facade tying the pipeline together.
//!
//! # Pipeline overview
//!
//! 1. Center and rescale both curves per axis (shared scale, noise floor)
//! 2. Collapse runs of near-coincident samples
//! 3. Refit each curve on an open-uniform B-spline at a common length
//! 4. Average the squared nearest-segment distances in both directions
//! 5. Map the raw distance onto `[0, 1]` with a saturating exponential
//!
//! The per-axis maximum-deviation variant skips steps 1, 3 and 5 and works
//! on the deduplicated raw samples directly.

use crate::config::NoiseScale;
use crate::curve::IvCurve;
use crate::distance::{
    max_axis_deviations, mean_nearest_segment_dist2, rescale_score, MaxDeviations,
};
use crate::error::{CompareError, Result};
use crate::normalize::{collapse_repeats, normalize_pair};
use crate::spline::resample;

/// Stateful comparator owning the per-axis noise configuration.
///
/// The noise scale must be set (explicitly or from calibration curves)
/// before any score comparison; attempting one earlier fails with
/// `UnconfiguredScale` rather than silently assuming a default.
///
/// # Example
///
/// ```
/// use iv_compare::{IvComparator, IvCurve};
///
/// let mut comparator = IvComparator::new();
/// comparator.set_noise_scale(0.1, 0.1)?;
///
/// let curve = IvCurve::new(vec![0.0, 1.0, 0.0, -1.0], vec![0.0, 2.0, 0.0, -2.0])?;
/// let score = comparator.compare_ivc(&curve, Some(&curve))?;
/// assert!(score < 0.05);
/// # Ok::<(), iv_compare::CompareError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IvComparator {
    noise_scale: Option<NoiseScale>,
}

impl IvComparator {
    /// Create an unconfigured comparator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparator with a noise scale already set.
    #[must_use]
    pub const fn with_noise_scale(scale: NoiseScale) -> Self {
        Self {
            noise_scale: Some(scale),
        }
    }

    /// Currently configured noise scale, if any.
    #[must_use]
    pub const fn noise_scale(&self) -> Option<&NoiseScale> {
        self.noise_scale.as_ref()
    }

    /// Set explicit per-axis noise floors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for non-positive values; the previous
    /// configuration is kept in that case.
    pub fn set_noise_scale(&mut self, min_voltage: f64, min_current: f64) -> Result<()> {
        let scale = NoiseScale::new(min_voltage, min_current)?;
        self.noise_scale = Some(scale);
        Ok(())
    }

    /// Derive the noise floors from open- and short-circuit calibration
    /// captures.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when a calibration trace is constant; the
    /// previous configuration is kept in that case.
    pub fn set_noise_scale_from_curves(
        &mut self,
        open_circuit: &IvCurve,
        short_circuit: &IvCurve,
    ) -> Result<()> {
        let scale = NoiseScale::from_calibration_curves(open_circuit, short_circuit)?;
        self.noise_scale = Some(scale);
        Ok(())
    }

    /// Compare two signatures and return a dissimilarity score in `[0, 1]`.
    ///
    /// 0 means the curves coincide, 1 means they are thoroughly different.
    /// The inputs may have different lengths; both are refitted to the
    /// larger length, which also makes the score symmetric under swapping.
    ///
    /// With `b` absent the first curve is scored against an ideal open
    /// circuit: the score grows with the mean squared fitted current.
    ///
    /// # Errors
    ///
    /// - `UnconfiguredScale` when no noise scale has been set
    /// - `DegenerateCurve` when a curve collapses to a single distinct point
    pub fn compare_ivc(&self, a: &IvCurve, b: Option<&IvCurve>) -> Result<f64> {
        let noise = self.noise_scale.ok_or(CompareError::UnconfiguredScale)?;

        let output_len = a.len().max(b.map_or(0, IvCurve::len));
        let (normalized_a, normalized_b) = normalize_pair(a, b, &noise);

        let fitted_a = resample(&collapse_repeats(&normalized_a)?, output_len);

        let raw = match normalized_b {
            None => {
                // Ideal open circuit carries no current at all; any mean
                // squared current is signal standing out of the noise.
                fitted_a.iter().map(|p| p.y * p.y).sum::<f64>() / fitted_a.len() as f64
            }
            Some(normalized_b) => {
                let fitted_b = resample(&collapse_repeats(&normalized_b)?, output_len);
                (mean_nearest_segment_dist2(&fitted_a, &fitted_b)
                    + mean_nearest_segment_dist2(&fitted_b, &fitted_a))
                    / 2.0
            }
        };
        Ok(rescale_score(raw))
    }

    /// Worst per-axis deviation of `reference` from `test`.
    ///
    /// Works on deduplicated raw samples without spline refitting or score
    /// rescaling; the returned ratios are normalized by the larger of the
    /// two curves' peak magnitudes per axis and may exceed 1.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` when either curve collapses to a single
    /// distinct point.
    pub fn compute_max_deviations(
        &self,
        reference: &IvCurve,
        test: &IvCurve,
    ) -> Result<MaxDeviations> {
        let reference_pts = collapse_repeats(&reference.points())?;
        let test_pts = collapse_repeats(&test.points())?;
        Ok(max_axis_deviations(&reference_pts, &test_pts))
    }
}
