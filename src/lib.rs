//! IV-Signature Comparison Library
//!
//! Shape-based dissimilarity scoring for sampled current-voltage
//! signatures, as captured from electronic components under a periodic
//! probe signal.
//!
//! Two signatures of the same healthy component never match sample for
//! sample: they differ in offset, amplitude and sensor noise. This library
//! decides whether they describe the same underlying device behavior by
//! comparing curve *shape*:
//!
//! - **Noise-aware normalization**: per-axis centering and rescaling with a
//!   configurable noise floor, so flat-but-noisy traces are not blown up
//!   to full scale
//! - **B-spline refitting**: degree-3 open-uniform resampling that strips
//!   high-frequency noise and brings both curves to a common length
//! - **Symmetric shape distance**: mean nearest-segment distance in both
//!   directions, rescaled onto a bounded `[0, 1]` score
//! - **Per-axis deviations**: a companion worst-case metric separating
//!   voltage and current deviation ratios
//!
//! # Quick Start
//!
//! ```
//! use iv_compare::{IvComparator, IvCurve};
//!
//! let reference = IvCurve::new(
//!     vec![0.0, 3.5, 6.0, 3.5, 0.0, -3.5, -6.0, -3.5],
//!     vec![0.0, 8.9, 12.6, 8.9, 0.0, -8.9, -12.6, -8.9],
//! )?;
//! let test = IvCurve::new(
//!     vec![0.0, 3.3, 5.6, 3.3, 0.0, -3.3, -5.6, -3.3],
//!     vec![0.0, 11.3, 15.9, 11.3, 0.0, -11.3, -15.9, -11.3],
//! )?;
//!
//! let mut comparator = IvComparator::new();
//! comparator.set_noise_scale(0.1, 0.1)?;
//!
//! let score = comparator.compare_ivc(&reference, Some(&test))?;
//! assert!((0.0..=1.0).contains(&score));
//! # Ok::<(), iv_compare::CompareError>(())
//! ```
//!
//! # Units
//!
//! Voltages are volts, currents are milliamps. A curve holds exactly one
//! period of the probe signal in trace order.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod compare;
pub mod config;
pub mod curve;
pub mod distance;
pub mod error;
pub mod math;
pub mod normalize;
pub mod spline;

// Re-exports for convenient access
pub use compare::IvComparator;
pub use config::{NoiseScale, CALIBRATION_SIGMA_FACTOR};
pub use curve::{IvCurve, MIN_CURVE_POINTS};
pub use distance::{MaxDeviations, RESCALE_EXPONENT};
pub use error::{CompareError, Result};
pub use normalize::DEDUP_EPSILON;
pub use spline::SPLINE_ORDER;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const VOLTAGE_AMPL: f64 = 12.0;
    const CURRENT_AMPL: f64 = VOLTAGE_AMPL / 475.0 * 1000.0;

    fn sine_signature(n: usize, voltage_frac: f64, current_frac: f64) -> IvCurve {
        let voltages = (0..n)
            .map(|i| voltage_frac * VOLTAGE_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
            .collect();
        let currents = (0..n)
            .map(|i| current_frac * CURRENT_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
            .collect();
        IvCurve::new(voltages, currents).unwrap()
    }

    #[test]
    fn test_full_pipeline_scores_similar_resistors_low() {
        let mut comparator = IvComparator::new();
        comparator.set_noise_scale(0.1, 0.1).unwrap();

        let resistor1 = sine_signature(10, 0.5, 0.5);
        let resistor2 = sine_signature(10, 0.47, 0.63);

        let score = comparator.compare_ivc(&resistor1, Some(&resistor2)).unwrap();
        assert!((score - 0.18).abs() < 0.1, "similar resistors scored {score}");
    }

    #[test]
    fn test_score_is_bounded() {
        let mut comparator = IvComparator::new();
        comparator.set_noise_scale(0.1, 0.1).unwrap();

        let a = sine_signature(10, 0.5, 0.5);
        let b = sine_signature(20, 1.0, 0.1);
        let score = comparator.compare_ivc(&a, Some(&b)).unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_max_deviations_are_non_negative() {
        let comparator = IvComparator::new();
        let a = sine_signature(10, 0.5, 0.5);
        let b = sine_signature(10, 0.47, 0.63);
        let dev = comparator.compute_max_deviations(&a, &b).unwrap();
        assert!(dev.voltage >= 0.0 && dev.current >= 0.0);
    }
}
