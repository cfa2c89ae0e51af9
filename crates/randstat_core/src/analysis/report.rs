//! Statistics report for one sample set.

use super::histogram::Histogram;
use crate::error::AnalysisError;

/// Descriptive statistics of one sample set.
///
/// Built by [`analyze`](super::analyze) or [`analyze_with`](super::analyze_with)
/// and immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use randstat_core::analysis::analyze;
///
/// let report = analyze(&[2000, 4000]).unwrap();
/// assert_eq!(report.mean(), 3000.0);
/// assert_eq!(report.std_dev(), 1000.0);
/// assert_eq!(report.coefficient_of_variation().unwrap(), 1000.0 / 3000.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub(super) sample_count: usize,
    pub(super) mean: f64,
    pub(super) std_dev: f64,
    /// `None` when the mean is zero.
    pub(super) coefficient_of_variation: Option<f64>,
    pub(super) histogram: Histogram,
    pub(super) criterion: f64,
}

impl Report {
    /// Number of samples analysed.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Arithmetic mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Standard deviation divided by the mean.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ZeroMean`] when the mean is zero.
    pub fn coefficient_of_variation(&self) -> Result<f64, AnalysisError> {
        self.coefficient_of_variation.ok_or(AnalysisError::ZeroMean)
    }

    /// Bucket counts.
    #[inline]
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Chi-square-style criterion value.
    #[inline]
    pub fn criterion(&self) -> f64 {
        self.criterion
    }
}
