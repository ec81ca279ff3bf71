//! The sampled current-voltage signature type.
//!
//! An [`IvCurve`] holds one full period of a periodic probe signal as two
//! equal-length sample sequences, in trace order (the order the oscilloscope
//! produced them, not sorted by voltage).

use nalgebra::Point2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CompareError, Result};

/// Minimum number of sample points for a valid curve.
pub const MIN_CURVE_POINTS: usize = 3;

/// One period of a sampled current-voltage signature.
///
/// Voltages are in volts, currents in milliamps. Both sequences have the
/// same length, at least [`MIN_CURVE_POINTS`].
///
/// # Example
///
/// ```
/// use iv_compare::IvCurve;
///
/// let curve = IvCurve::new(vec![0.0, 1.0, 0.0, -1.0], vec![0.0, 2.0, 0.0, -2.0])?;
/// assert_eq!(curve.len(), 4);
/// # Ok::<(), iv_compare::CompareError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IvCurve {
    voltages: Vec<f64>,
    currents: Vec<f64>,
}

impl IvCurve {
    /// Create a curve from voltage and current sample sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if either sequence is empty, the lengths differ,
    /// or fewer than [`MIN_CURVE_POINTS`] samples are given.
    pub fn new(voltages: Vec<f64>, currents: Vec<f64>) -> Result<Self> {
        if voltages.is_empty() {
            return Err(CompareError::missing_input("empty voltage buffer"));
        }
        if currents.is_empty() {
            return Err(CompareError::missing_input("empty current buffer"));
        }
        if voltages.len() != currents.len() {
            return Err(CompareError::length_mismatch(
                voltages.len(),
                currents.len(),
            ));
        }
        if voltages.len() < MIN_CURVE_POINTS {
            return Err(CompareError::curve_too_short(
                MIN_CURVE_POINTS,
                voltages.len(),
            ));
        }
        Ok(Self { voltages, currents })
    }

    /// Voltage samples in volts.
    #[must_use]
    pub fn voltages(&self) -> &[f64] {
        &self.voltages
    }

    /// Current samples in milliamps.
    #[must_use]
    pub fn currents(&self) -> &[f64] {
        &self.currents
    }

    /// Number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.voltages.len()
    }

    /// Whether the curve holds no samples. Always false for a constructed
    /// curve; provided for container-convention completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voltages.is_empty()
    }

    /// Samples as points in the voltage-current plane, in trace order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2<f64>> {
        self.voltages
            .iter()
            .zip(self.currents.iter())
            .map(|(&v, &c)| Point2::new(v, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_curve() {
        let curve = IvCurve::new(vec![0.0, 1.0, 2.0], vec![0.0, 0.5, 1.0]).unwrap();
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
    }

    #[test]
    fn test_empty_buffer_rejected() {
        let err = IvCurve::new(vec![], vec![0.0, 0.5, 1.0]).unwrap_err();
        assert!(matches!(err, CompareError::MissingInput(_)));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = IvCurve::new(vec![0.0, 1.0, 2.0], vec![0.0, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            CompareError::LengthMismatch {
                voltages: 3,
                currents: 2
            }
        ));
    }

    #[test]
    fn test_short_curve_rejected() {
        let err = IvCurve::new(vec![0.0, 1.0], vec![0.0, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            CompareError::CurveTooShort { min: 3, actual: 2 }
        ));
    }
}
