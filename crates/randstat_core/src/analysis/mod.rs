//! # Sample Analysis
//!
//! This module computes descriptive statistics for a finite, non-empty
//! sequence of integer samples:
//!
//! - Arithmetic mean (left-to-right `f64` accumulation in insertion order)
//! - Population standard deviation
//! - Coefficient of variation (`std_dev / mean`, undefined for a zero mean)
//! - Fixed-width frequency histogram ([`HistogramSpec`], ten buckets of
//!   width 1000 by default)
//! - Chi-square-style criterion against a uniform expectation
//!
//! Samples must lie in the histogram domain `[0, upper_bound)`. Values
//! outside it are rejected with [`AnalysisError::ValueOutOfRange`].
//!
//! ## Usage Example
//!
//! ```rust
//! use randstat_core::analysis::{analyze, analyze_with, HistogramSpec};
//!
//! let samples: Vec<i32> = (0..10).map(|i| i * 1000).collect();
//! let report = analyze(&samples).unwrap();
//! assert!(report.histogram().counts().iter().all(|&c| c == 1));
//! assert_eq!(report.criterion(), 0.0);
//!
//! // Explicit layout: four buckets of width 25
//! let report = analyze_with(&[0, 30, 60, 90], &HistogramSpec::new(25, 4)).unwrap();
//! assert_eq!(report.histogram().counts(), &[1, 1, 1, 1]);
//! ```

mod histogram;
mod report;

pub use histogram::{
    Histogram, HistogramSpec, DEFAULT_BUCKET_COUNT, DEFAULT_BUCKET_WIDTH, MAX_BUCKET_COUNT,
    MAX_UPPER_BOUND,
};
pub use report::Report;

use crate::error::AnalysisError;

/// Analyses `samples` with the default ten-bucket histogram.
///
/// # Errors
///
/// See [`analyze_with`].
pub fn analyze(samples: &[i32]) -> Result<Report, AnalysisError> {
    analyze_with(samples, &HistogramSpec::default())
}

/// Analyses `samples` with an explicit histogram layout.
///
/// # Errors
///
/// - [`AnalysisError::EmptySample`] if `samples` is empty
/// - [`AnalysisError::InvalidHistogram`] if `spec` fails
///   [`HistogramSpec::validate`]
/// - [`AnalysisError::ValueOutOfRange`] if a sample lies outside
///   `[0, spec.upper_bound())`
pub fn analyze_with(samples: &[i32], spec: &HistogramSpec) -> Result<Report, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptySample);
    }

    let histogram = Histogram::from_samples(samples, *spec)?;
    let n = samples.len() as f64;

    let mut mean = 0.0;
    for &value in samples {
        mean += f64::from(value);
    }
    mean /= n;

    let mut variance = 0.0;
    for &value in samples {
        let deviation = f64::from(value) - mean;
        variance += deviation * deviation;
    }
    variance /= n;
    let std_dev = variance.sqrt();

    let coefficient_of_variation = if mean == 0.0 {
        None
    } else {
        Some(std_dev / mean)
    };

    let criterion = histogram.criterion(samples.len());

    Ok(Report {
        sample_count: samples.len(),
        mean,
        std_dev,
        coefficient_of_variation,
        histogram,
        criterion,
    })
}
