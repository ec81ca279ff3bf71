//! Error types for signature comparison operations.

use thiserror::Error;

/// Main error type for signature comparison operations.
#[derive(Error, Debug)]
pub enum CompareError {
    /// A required voltage or current buffer is empty.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Curve is too short to describe one waveform period.
    #[error("Curve too short: need at least {min} points, got {actual}")]
    CurveTooShort { min: usize, actual: usize },

    /// Voltage and current sequences have mismatched lengths.
    #[error("Length mismatch: {voltages} voltage samples vs {currents} current samples")]
    LengthMismatch { voltages: usize, currents: usize },

    /// Fewer than two distinct points remain after collapsing repeats.
    #[error("Degenerate curve: all points coincide within tolerance")]
    DegenerateCurve,

    /// A comparison was attempted before a valid noise scale was set.
    #[error("Noise scale is not configured")]
    UnconfiguredScale,

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for signature comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

impl CompareError {
    /// Create a missing input error.
    #[must_use]
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Create a curve too short error.
    #[must_use]
    pub const fn curve_too_short(min: usize, actual: usize) -> Self {
        Self::CurveTooShort { min, actual }
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(voltages: usize, currents: usize) -> Self {
        Self::LengthMismatch { voltages, currents }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompareError::curve_too_short(3, 1);
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_error_constructors() {
        let _ = CompareError::missing_input("empty voltage buffer");
        let _ = CompareError::length_mismatch(10, 20);
        let _ = CompareError::invalid_config("noise scale must be positive");
    }
}
