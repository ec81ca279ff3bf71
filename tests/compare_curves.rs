//! End-to-end comparison tests over synthetic component signatures.
//!
//! These mirror a signature-matching bench session: open and short
//! circuits, resistors of close and distant values, and a capacitor,
//! all sampled as one period of a sine probe signal.

use iv_compare::{CompareError, IvComparator, IvCurve};
use std::f64::consts::PI;

// =============================================================================
// SIGNATURE GENERATORS
// =============================================================================

const VOLTAGE_AMPL: f64 = 12.0;
const R_CS: f64 = 475.0;
const CURRENT_AMPL: f64 = VOLTAGE_AMPL / R_CS * 1000.0;

/// Resistor-like signature: voltage and current in phase.
fn resistor(n: usize, voltage_frac: f64, current_frac: f64) -> IvCurve {
    let voltages = (0..n)
        .map(|i| voltage_frac * VOLTAGE_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
        .collect();
    let currents = (0..n)
        .map(|i| current_frac * CURRENT_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
        .collect();
    IvCurve::new(voltages, currents).unwrap()
}

/// Open circuit: full probe voltage, no current.
fn open_circuit(n: usize) -> IvCurve {
    let voltages = (0..n)
        .map(|i| VOLTAGE_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
        .collect();
    IvCurve::new(voltages, vec![0.0; n]).unwrap()
}

/// Short circuit: no voltage, full current.
fn short_circuit(n: usize) -> IvCurve {
    let currents = (0..n)
        .map(|i| CURRENT_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
        .collect();
    IvCurve::new(vec![0.0; n], currents).unwrap()
}

/// Capacitor-like signature: current leads voltage by a quarter period,
/// tracing an ellipse.
fn capacitor(n: usize) -> IvCurve {
    let voltages = (0..n)
        .map(|i| VOLTAGE_AMPL * (2.0 * PI * i as f64 / n as f64).sin())
        .collect();
    let currents = (0..n)
        .map(|i| CURRENT_AMPL * (2.0 * PI * i as f64 / n as f64).cos())
        .collect();
    IvCurve::new(voltages, currents).unwrap()
}

/// Deterministic sub-volt jitter, stands in for sensor noise.
fn jitter(i: usize, amplitude: f64) -> f64 {
    amplitude * ((i % 5) as f64 - 2.0) / 2.0
}

fn comparator() -> IvComparator {
    let mut comparator = IvComparator::new();
    comparator.set_noise_scale(0.1, 0.1).unwrap();
    comparator
}

// =============================================================================
// SCORE PROPERTIES
// =============================================================================

#[test]
fn identical_curves_score_zero() {
    let comparator = comparator();
    let curve = resistor(10, 0.5, 0.5);
    let score = comparator.compare_ivc(&curve, Some(&curve)).unwrap();
    assert!(score < 0.05, "identity score was {score}");
}

#[test]
fn open_vs_short_is_maximally_different() {
    let comparator = comparator();
    let score = comparator
        .compare_ivc(&open_circuit(10), Some(&short_circuit(10)))
        .unwrap();
    assert!((score - 1.0).abs() < 0.1, "open vs short scored {score}");
}

#[test]
fn close_resistor_values_score_low() {
    let comparator = comparator();
    let score = comparator
        .compare_ivc(&resistor(10, 0.5, 0.5), Some(&resistor(10, 0.47, 0.63)))
        .unwrap();
    assert!((score - 0.18).abs() < 0.1, "similar resistors scored {score}");
}

#[test]
fn resistor_vs_capacitor_is_maximally_different() {
    let comparator = comparator();
    let score = comparator
        .compare_ivc(&resistor(10, 0.5, 0.5), Some(&capacitor(10)))
        .unwrap();
    assert!((score - 1.0).abs() < 0.1, "resistor vs capacitor scored {score}");
}

#[test]
fn score_is_symmetric_across_lengths() {
    let comparator = comparator();
    let a = resistor(10, 0.5, 0.5);
    let b = resistor(20, 0.3, 0.7);

    let forward = comparator.compare_ivc(&a, Some(&b)).unwrap();
    let backward = comparator.compare_ivc(&b, Some(&a)).unwrap();
    assert!(
        (forward - backward).abs() < 1e-12,
        "asymmetry: {forward} vs {backward}"
    );
    assert!(forward >= 0.0);
}

#[test]
fn sampling_density_barely_moves_the_score() {
    let comparator = comparator();
    let third = resistor(10, 0.3, 0.7);

    let coarse = comparator
        .compare_ivc(&resistor(10, 0.5, 0.5), Some(&third))
        .unwrap();
    let fine = comparator
        .compare_ivc(&resistor(20, 0.5, 0.5), Some(&third))
        .unwrap();
    assert!(
        (coarse - fine).abs() < 0.1,
        "density changed score: {coarse} vs {fine}"
    );
}

#[test]
fn sub_noise_amplitude_change_is_invisible() {
    let comparator = comparator();
    // The amplitude difference is far below the 0.1 noise floor.
    let a = resistor(10, 0.1, 0.1);
    let b = resistor(10, 0.1001, 0.1001);
    let score = comparator.compare_ivc(&a, Some(&b)).unwrap();
    assert!(score < 0.05, "sub-noise change scored {score}");
}

#[test]
fn scores_stay_bounded_across_pairs() {
    let comparator = comparator();
    let curves = [
        resistor(10, 0.5, 0.5),
        resistor(16, 1.0, 0.05),
        open_circuit(12),
        short_circuit(10),
        capacitor(14),
    ];
    for a in &curves {
        for b in &curves {
            let score = comparator.compare_ivc(a, Some(b)).unwrap();
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }
}

// =============================================================================
// OPEN-CIRCUIT REFERENCE MODE
// =============================================================================

#[test]
fn open_circuit_matches_absent_reference() {
    let comparator = comparator();
    let score = comparator.compare_ivc(&open_circuit(10), None).unwrap();
    assert!(score < 0.05, "open circuit scored {score} against ideal open");
}

#[test]
fn conducting_component_differs_from_absent_reference() {
    let comparator = comparator();
    let score = comparator.compare_ivc(&resistor(10, 0.5, 0.5), None).unwrap();
    assert!(score > 0.5, "resistor scored {score} against ideal open");
}

// =============================================================================
// CONFIGURATION AND ERROR PATHS
// =============================================================================

#[test]
fn comparison_without_noise_scale_fails() {
    let comparator = IvComparator::new();
    let curve = resistor(10, 0.5, 0.5);
    assert!(matches!(
        comparator.compare_ivc(&curve, Some(&curve)),
        Err(CompareError::UnconfiguredScale)
    ));
}

#[test]
fn noise_scale_from_calibration_curves() {
    let n = 20;
    let open = IvCurve::new(
        (0..n)
            .map(|i| VOLTAGE_AMPL * (2.0 * PI * i as f64 / n as f64).sin() + jitter(i, 0.12))
            .collect(),
        (0..n).map(|i| jitter(i, 0.12)).collect(),
    )
    .unwrap();
    let short = IvCurve::new(
        (0..n).map(|i| jitter(i, 0.12)).collect(),
        (0..n)
            .map(|i| CURRENT_AMPL * (2.0 * PI * i as f64 / n as f64).sin() + jitter(i, 0.12))
            .collect(),
    )
    .unwrap();

    let mut comparator = IvComparator::new();
    comparator.set_noise_scale_from_curves(&open, &short).unwrap();
    let scale = comparator.noise_scale().unwrap();
    assert!(scale.voltage() > 0.0 && scale.current() > 0.0);

    // The derived floor sits far below the signal amplitudes, so the
    // calibration curves themselves still compare as different.
    let score = comparator.compare_ivc(&open, Some(&short)).unwrap();
    assert!((score - 1.0).abs() < 0.1, "open vs short scored {score}");
}

#[test]
fn all_identical_points_rejected_not_nan() {
    let comparator = comparator();
    let flat = IvCurve::new(vec![3.3; 10], vec![-1.1; 10]).unwrap();
    let result = comparator.compare_ivc(&flat, Some(&resistor(10, 0.5, 0.5)));
    assert!(matches!(result, Err(CompareError::DegenerateCurve)));

    // Degenerate as second operand too.
    let result = comparator.compare_ivc(&resistor(10, 0.5, 0.5), Some(&flat));
    assert!(matches!(result, Err(CompareError::DegenerateCurve)));
}
