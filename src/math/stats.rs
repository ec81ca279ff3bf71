//! Scalar statistics over sample sequences.

/// Arithmetic mean of a sequence. Zero for an empty sequence.
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Dispersion: mean squared deviation from the mean (population variance).
#[must_use]
pub fn dispersion(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let avg = mean(samples);
    samples.iter().map(|x| (x - avg) * (x - avg)).sum::<f64>() / samples.len() as f64
}

/// Population standard deviation.
#[must_use]
pub fn std_dev(samples: &[f64]) -> f64 {
    dispersion(samples).sqrt()
}

/// Largest absolute value in a sequence. Zero for an empty sequence.
#[must_use]
pub fn peak_abs(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_dispersion() {
        // Deviations from mean 2.5: +-1.5, +-0.5.
        assert_relative_eq!(dispersion(&[1.0, 2.0, 3.0, 4.0]), 1.25);
        assert_relative_eq!(dispersion(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_std_dev() {
        assert_relative_eq!(std_dev(&[0.0, 2.0]), 1.0);
    }

    #[test]
    fn test_peak_abs() {
        assert_relative_eq!(peak_abs(&[-3.0, 1.0, 2.0]), 3.0);
        assert_eq!(peak_abs(&[]), 0.0);
    }
}
