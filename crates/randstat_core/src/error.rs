//! Error types for structured error handling.
//!
//! This module provides:
//! - `GeneratorError`: Errors from generator construction
//! - `AnalysisError`: Errors from sample analysis and report queries
//! - `ParseVariantError`: Unknown generator variant name
//!
//! All of them describe caller contract violations. Integer wraparound in the
//! generators is part of the algorithms and never surfaces here.

use thiserror::Error;

/// Generator construction errors.
///
/// # Examples
/// ```
/// use randstat_core::error::GeneratorError;
///
/// let err = GeneratorError::InvalidBounds { min_value: 10, max_value: 10 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid bounds: min_value 10 must be less than max_value 10"
/// );
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The half-open range `[min_value, max_value)` is empty.
    #[error("Invalid bounds: min_value {min_value} must be less than max_value {max_value}")]
    InvalidBounds {
        /// Inclusive lower bound
        min_value: i32,
        /// Exclusive upper bound
        max_value: i32,
    },
}

/// Unknown generator variant name.
///
/// # Examples
/// ```
/// use randstat_core::generator::Variant;
///
/// let err = "mersenne".parse::<Variant>().unwrap_err();
/// assert_eq!(err.to_string(), "Unknown generator variant: mersenne");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown generator variant: {0}")]
pub struct ParseVariantError(pub String);

/// Sample analysis errors.
///
/// # Variants
/// - `EmptySample`: No samples to average over
/// - `InvalidHistogram`: Zero, oversized or overflowing bucket layout
/// - `ValueOutOfRange`: A sample falls outside the histogram domain
/// - `ZeroMean`: Coefficient of variation requested for a zero-mean sample
///
/// # Examples
/// ```
/// use randstat_core::error::AnalysisError;
///
/// let err = AnalysisError::ValueOutOfRange { index: 3, value: 12_000, upper: 10_000 };
/// assert!(format!("{}", err).contains("12000"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The sample sequence is empty.
    #[error("Empty sample: at least one value is required")]
    EmptySample,

    /// The histogram layout is empty, has too many buckets, or reaches past
    /// the `i32` domain.
    #[error(
        "Invalid histogram: bucket_width {bucket_width} and bucket_count {bucket_count} \
         must be positive, with at most 1048576 buckets covering at most [0, 2147483648)"
    )]
    InvalidHistogram {
        /// Width of each bucket
        bucket_width: u32,
        /// Number of buckets
        bucket_count: usize,
    },

    /// A sample lies outside `[0, upper)`.
    #[error("Value out of range at index {index}: {value} is outside [0, {upper})")]
    ValueOutOfRange {
        /// Position of the offending sample
        index: usize,
        /// The offending sample
        value: i32,
        /// Exclusive upper bound of the histogram domain
        upper: u64,
    },

    /// Coefficient of variation is undefined for a zero mean.
    #[error("Coefficient of variation undefined: sample mean is zero")]
    ZeroMean,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_display() {
        let err = GeneratorError::InvalidBounds {
            min_value: 5,
            max_value: -5,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid bounds: min_value 5 must be less than max_value -5"
        );
    }

    #[test]
    fn test_empty_sample_display() {
        assert_eq!(
            format!("{}", AnalysisError::EmptySample),
            "Empty sample: at least one value is required"
        );
    }

    #[test]
    fn test_value_out_of_range_display() {
        let err = AnalysisError::ValueOutOfRange {
            index: 7,
            value: -1,
            upper: 10_000,
        };
        assert_eq!(
            format!("{}", err),
            "Value out of range at index 7: -1 is outside [0, 10000)"
        );
    }

    #[test]
    fn test_invalid_histogram_display() {
        let err = AnalysisError::InvalidHistogram {
            bucket_width: 0,
            bucket_count: 10,
        };
        assert!(format!("{}", err).contains("bucket_width 0"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let _: &dyn std::error::Error = &AnalysisError::ZeroMean;
        let _: &dyn std::error::Error = &GeneratorError::InvalidBounds {
            min_value: 0,
            max_value: 0,
        };
    }
}
