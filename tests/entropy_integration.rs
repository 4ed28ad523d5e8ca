//! End-to-end tests for the entropy estimation path: generated signals in,
//! estimates with derivation traces out.

use wavelab::config::EntropyConfig;
use wavelab::{estimate_entropy, generate_signal, Signal, WavelabError};

#[test]
fn generated_noise_produces_a_valid_estimate() {
    let signal = generate_signal(50, 1.0, 42);
    let estimate = estimate_entropy(&signal, &EntropyConfig::default()).unwrap();

    assert!(estimate.entropy >= 0.0);
    assert_eq!(estimate.probabilities.len(), 20);
    let sum: f64 = estimate.probabilities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert_eq!(estimate.steps.len(), 4);
}

#[test]
fn estimate_is_deterministic_for_a_fixed_signal() {
    let signal = generate_signal(50, 0.8, 7);
    let cfg = EntropyConfig::default();
    let a = estimate_entropy(&signal, &cfg).unwrap();
    let b = estimate_entropy(&signal, &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_signal_is_a_defined_degenerate_case() {
    let estimate = estimate_entropy(&Signal::new(), &EntropyConfig::default()).unwrap();
    assert_eq!(estimate.entropy, 0.0);
    assert!(estimate.probabilities.is_empty());
    assert!(estimate.steps.is_empty());
}

#[test]
fn constant_signal_carries_no_information() {
    let signal = Signal::from_values(&[1.3; 25]);
    let estimate = estimate_entropy(&signal, &EntropyConfig::default()).unwrap();
    assert!(estimate.entropy < 1e-12);
}

#[test]
fn wider_noise_spreads_more_bins() {
    // Low-variance noise concentrates in few bins; high-variance noise
    // spreads across the range and carries more entropy.
    let narrow = generate_signal(200, 0.01, 5);
    let wide = generate_signal(200, 1.0, 5);
    let cfg = EntropyConfig::default();

    let h_narrow = estimate_entropy(&narrow, &cfg).unwrap().entropy;
    let h_wide = estimate_entropy(&wide, &cfg).unwrap().entropy;
    assert!(
        h_wide > h_narrow,
        "expected wider noise to have more entropy: {} vs {}",
        h_wide,
        h_narrow
    );
}

#[test]
fn custom_bin_count_bounds_the_entropy() {
    let signal = generate_signal(500, 1.0, 11);
    let cfg = EntropyConfig {
        num_bins: 8,
        ..EntropyConfig::default()
    };
    let estimate = estimate_entropy(&signal, &cfg).unwrap();
    assert_eq!(estimate.probabilities.len(), 8);
    assert!(estimate.entropy <= 3.0 + 1e-9);
}

#[test]
fn invalid_configuration_is_rejected_at_the_call() {
    let signal = generate_signal(10, 1.0, 1);
    let cfg = EntropyConfig {
        range_lo: 2.0,
        range_hi: 2.0,
        ..EntropyConfig::default()
    };
    let err = estimate_entropy(&signal, &cfg).unwrap_err();
    assert!(matches!(err, WavelabError::InvalidRange { .. }));
    assert!(err.to_string().contains("Invalid value range"));
}

#[test]
fn estimate_survives_a_json_round_trip() {
    let signal = generate_signal(50, 1.0, 42);
    let estimate = estimate_entropy(&signal, &EntropyConfig::default()).unwrap();
    let json = estimate.to_json_string().unwrap();
    let back = wavelab::EntropyEstimate::from_json_str(&json).unwrap();
    assert_eq!(back, estimate);
}
