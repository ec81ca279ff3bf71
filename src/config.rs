//! Noise-scale configuration for signature comparison.
//!
//! Measured signatures always carry sensor noise. The [`NoiseScale`] sets,
//! per axis, the smallest variation that is trusted as real signal: during
//! normalization an axis is never rescaled by less than this floor, so a
//! flat-but-noisy trace is not blown up to full scale and compared noise
//! against noise.
//!
//! # Example
//!
//! ```
//! use iv_compare::NoiseScale;
//!
//! // Explicit floors: 0.1 V, 0.1 mA.
//! let scale = NoiseScale::new(0.1, 0.1)?;
//! assert_eq!(scale.voltage(), 0.1);
//! # Ok::<(), iv_compare::CompareError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::curve::IvCurve;
use crate::error::{CompareError, Result};
use crate::math::stats::std_dev;

/// Multiple of the calibration-curve standard deviation used as noise floor.
///
/// An open probe carries no real current and a shorted probe no real
/// voltage, so the spread seen there is pure measurement noise; three
/// sigmas of it bound nearly all noise excursions.
pub const CALIBRATION_SIGMA_FACTOR: f64 = 3.0;

/// Per-axis noise floor for curve normalization.
///
/// Both components are strictly positive; construction fails otherwise.
/// Voltage is in volts, current in milliamps, matching [`IvCurve`] units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseScale {
    voltage: f64,
    current: f64,
}

impl NoiseScale {
    /// Create a noise scale from explicit per-axis floors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless both floors are finite and positive.
    pub fn new(voltage: f64, current: f64) -> Result<Self> {
        if !(voltage > 0.0) || !voltage.is_finite() {
            return Err(CompareError::invalid_config(
                "voltage noise scale must be positive",
            ));
        }
        if !(current > 0.0) || !current.is_finite() {
            return Err(CompareError::invalid_config(
                "current noise scale must be positive",
            ));
        }
        Ok(Self { voltage, current })
    }

    /// Derive a noise scale from calibration captures.
    ///
    /// The voltage floor comes from the short-circuit curve (its voltage
    /// trace is noise around zero), the current floor from the open-circuit
    /// curve (its current trace is noise around zero). Each floor is
    /// [`CALIBRATION_SIGMA_FACTOR`] standard deviations of the respective
    /// trace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when a calibration trace is exactly constant,
    /// which would give a zero floor.
    pub fn from_calibration_curves(open_circuit: &IvCurve, short_circuit: &IvCurve) -> Result<Self> {
        let voltage = CALIBRATION_SIGMA_FACTOR * std_dev(short_circuit.voltages());
        let current = CALIBRATION_SIGMA_FACTOR * std_dev(open_circuit.currents());
        Self::new(voltage, current).map_err(|_| {
            CompareError::invalid_config("calibration curves carry no measurable noise")
        })
    }

    /// Voltage noise floor in volts.
    #[must_use]
    pub const fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Current noise floor in milliamps.
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }
}
