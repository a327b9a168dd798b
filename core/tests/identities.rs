use approx::assert_abs_diff_eq;
use harmonicscore::labels::format_angle_to_pi;
use harmonicscore::{generate, HarmonicsError, HarmonicsSampler, SamplerParams};
use std::f64::consts::PI;

const PHASES: [f64; 5] = [0.0, 0.3, 1.0, PI / 3.0, -2.5];

#[test]
fn test_sine_sum_cancels_for_multiple_blades() {
    for blades in 2..=8 {
        for &phase in &PHASES {
            let data = generate(blades, phase, 97, false).unwrap();
            for sample in &data.sine {
                assert_abs_diff_eq!(sample.sum, 0.0, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_squared_sum_is_half_blade_count() {
    for blades in 3..=8 {
        for &phase in &PHASES {
            let data = generate(blades, phase, 64, false).unwrap();
            for sample in &data.squared {
                assert_abs_diff_eq!(sample.sum, blades as f64 / 2.0, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_squared_sum_oscillates_below_three_blades() {
    // With one or two blades the second harmonics line up instead of cancelling,
    // so the squared sum is blade_count * sin^2 of the first blade.
    for blades in 1..=2 {
        let data = generate(blades, 0.3, 64, false).unwrap();
        for sample in &data.squared {
            let expected = blades as f64 * (sample.angle + 0.3).sin().powi(2);
            assert_abs_diff_eq!(sample.sum, expected, epsilon = 1e-9);
        }
        let (min, max) = (data.squared.summary().min_sum, data.squared.summary().max_sum);
        assert!(max - min > 0.5 * blades as f64);
    }
}

#[test]
fn test_sum_matches_blade_values_without_centering() {
    let data = generate(5, 0.42, 50, false).unwrap();
    for dataset in [&data.sine, &data.squared] {
        for sample in dataset {
            let total: f64 = sample.values.iter().sum();
            assert_abs_diff_eq!(sample.sum, total, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_mean_subtraction_flattens_both_sums() {
    for blades in 2..=8 {
        let data = generate(blades, 0.8, 120, true).unwrap();
        for sample in &data.sine {
            assert_abs_diff_eq!(sample.sum, 0.0, epsilon = 1e-9);
        }
        if blades >= 3 {
            for sample in &data.squared {
                assert_abs_diff_eq!(sample.sum, 0.0, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_centered_sum_is_raw_sum_minus_its_mean() {
    let raw = generate(3, 0.1, 11, false).unwrap();
    let centered = generate(3, 0.1, 11, true).unwrap();
    let raw_sums = raw.squared.sum_series();
    let mean = raw_sums.iter().sum::<f64>() / raw_sums.len() as f64;
    for (r, c) in raw.squared.iter().zip(centered.squared.iter()) {
        assert_abs_diff_eq!(c.sum, r.sum - mean, epsilon = 1e-12);
    }
}

#[test]
fn test_identical_inputs_are_deterministic() {
    let first = generate(6, 1.234, 333, true).unwrap();
    let second = generate(6, 1.234, 333, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_length_follows_resolution() {
    for resolution in [1, 2, 3, 4, 10, 360, 1000] {
        let data = generate(3, 0.0, resolution, false).unwrap();
        assert_eq!(data.sine.len(), resolution);
        assert_eq!(data.squared.len(), resolution);
        assert!(data.sine.iter().all(|s| s.values.len() == 3));
    }
}

#[test]
fn test_angles_are_ascending_over_one_rotation() {
    let data = generate(2, 0.0, 8, false).unwrap();
    let angles = data.sine.angles();
    assert_abs_diff_eq!(angles[0], 0.0);
    assert!(angles.windows(2).all(|w| w[0] < w[1]));
    assert!(*angles.last().unwrap() < 2.0 * PI);
    assert_eq!(format_angle_to_pi(angles[2]), "π/2");
    assert_eq!(format_angle_to_pi(angles[4]), "π");
}

#[test]
fn test_single_blade_scenario() {
    let data = generate(1, 0.0, 4, false).unwrap();
    let sine: Vec<f64> = data.sine.blade_series(0).unwrap();
    let squared: Vec<f64> = data.squared.blade_series(0).unwrap();
    for (actual, expected) in sine.iter().zip([0.0, 1.0, 0.0, -1.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-12);
    }
    for (actual, expected) in squared.iter().zip([0.0, 1.0, 0.0, 1.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-12);
    }
    assert_eq!(data.sine.sum_series(), sine);
    assert_eq!(data.squared.sum_series(), squared);
}

#[test]
fn test_two_blade_scenario_cancels() {
    let data = generate(2, 0.0, 4, false).unwrap();
    for sample in &data.sine {
        assert_abs_diff_eq!(sample.values[0] + sample.values[1], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_invalid_parameters_rejected() {
    assert_eq!(
        generate(0, 0.0, 10, false),
        Err(HarmonicsError::InvalidBladeCount(0))
    );
    assert_eq!(
        generate(4, 0.0, 0, false),
        Err(HarmonicsError::InvalidResolution(0))
    );
    let sampler = HarmonicsSampler::new();
    assert!(sampler.generate(&SamplerParams::new(0, 0.0, 0, true)).is_err());
}

#[test]
fn test_non_finite_phase_propagates_nan() {
    for phase in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let data = generate(3, phase, 8, true).unwrap();
        assert_eq!(data.sine.len(), 8);
        assert!(data.sine.iter().all(|s| s.sum.is_nan()));
        assert!(data.squared.iter().all(|s| s.values.iter().all(|v| v.is_nan())));
    }
}

#[test]
fn test_squared_sum_spectrum_is_dc_only() {
    let data = generate(3, 0.5, 64, false).unwrap();
    let spectrum = data.squared.sum_spectrum();
    assert_eq!(spectrum.len(), 33);
    assert_abs_diff_eq!(spectrum[0], 1.5, epsilon = 1e-9);
    for magnitude in &spectrum[1..] {
        assert_abs_diff_eq!(*magnitude, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_single_blade_sine_is_first_harmonic() {
    let data = generate(1, 0.0, 32, false).unwrap();
    let spectrum = data.sine.sum_spectrum();
    assert_abs_diff_eq!(spectrum[1], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(spectrum[0], 0.0, epsilon = 1e-9);
}
