//! Integration tests for the generate-then-analyse pipeline.
//!
//! Drives the public API the way the command line front end does: one
//! generator fills batches of increasing size, then each batch is analysed.

use approx::assert_relative_eq;
use randstat_core::{analyze, AnalysisError, Generator, GeneratorError, HistogramSpec, Variant};

const SEED: u64 = 3359;

fn generate_batches(variant: Variant, sizes: &[usize]) -> Vec<Vec<i32>> {
    let mut generator = Generator::new(SEED, 0, 10_000, variant).unwrap();
    sizes.iter().map(|&size| generator.sample(size)).collect()
}

/// First batch of 100 values from the congruential generator.
#[test]
fn test_lcg_first_batch_report() {
    let batches = generate_batches(Variant::LinearCongruential, &[100]);
    let report = analyze(&batches[0]).unwrap();

    assert_eq!(
        report.histogram().counts(),
        &[16, 7, 7, 12, 12, 14, 7, 11, 8, 6]
    );
    assert_eq!(report.histogram().total(), 100);
    assert_relative_eq!(report.mean(), 4627.86, epsilon = 1e-9);
    assert_relative_eq!(report.criterion(), 10.8, epsilon = 1e-9);
}

/// First batch of 100 values from the xor-shift generator.
#[test]
fn test_xorshift_first_batch_report() {
    let batches = generate_batches(Variant::XorShift, &[100]);
    let report = analyze(&batches[0]).unwrap();

    assert_eq!(
        report.histogram().counts(),
        &[9, 11, 9, 9, 8, 14, 11, 12, 8, 9]
    );
    assert_relative_eq!(report.mean(), 5022.78, epsilon = 1e-9);
    assert_relative_eq!(report.criterion(), 3.4, epsilon = 1e-9);
}

#[test]
fn test_every_batch_is_analysable() {
    let sizes = [100, 500, 1000, 5000, 10_000];

    for variant in Variant::ALL {
        let batches = generate_batches(variant, &sizes);

        for (batch, &size) in batches.iter().zip(sizes.iter()) {
            let report = analyze(batch).unwrap();
            assert_eq!(report.sample_count(), size);
            assert_eq!(report.histogram().total(), size as u64);
            assert!(report.coefficient_of_variation().unwrap() > 0.0);
        }
    }
}

#[test]
fn test_bounds_outside_histogram_domain_are_rejected() {
    let mut generator = Generator::new(SEED, 0, 20_000, Variant::XorShift).unwrap();
    let samples = generator.sample(1000);

    assert!(matches!(
        analyze(&samples),
        Err(AnalysisError::ValueOutOfRange { upper: 10_000, .. })
    ));

    // A layout sized to the bounds accepts the same batch
    let report = randstat_core::analyze_with(&samples, &HistogramSpec::new(2000, 10)).unwrap();
    assert_eq!(report.histogram().total(), 1000);
}

#[test]
fn test_contract_violations_surface_as_errors() {
    assert!(matches!(
        Generator::new(SEED, 10_000, 0, Variant::LinearCongruential),
        Err(GeneratorError::InvalidBounds { .. })
    ));
    assert_eq!(analyze(&[]).unwrap_err(), AnalysisError::EmptySample);
}
