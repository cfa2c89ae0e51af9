//! Fixed-width frequency histogram.

use std::ops::Range;

use crate::error::AnalysisError;

/// Default width of each bucket.
pub const DEFAULT_BUCKET_WIDTH: u32 = 1000;

/// Default number of buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Largest number of buckets a layout may request.
pub const MAX_BUCKET_COUNT: usize = 1 << 20;

/// Largest covered domain: every non-negative `i32`, `[0, 2^31)`.
pub const MAX_UPPER_BOUND: u64 = i32::MAX as u64 + 1;

/// Bucket layout of a [`Histogram`].
///
/// Buckets are `[i * bucket_width, (i + 1) * bucket_width)` for
/// `i in 0..bucket_count`. The default layout covers `[0, 10000)` with ten
/// buckets of width 1000.
///
/// # Examples
///
/// ```rust
/// use randstat_core::analysis::HistogramSpec;
///
/// let spec = HistogramSpec::default();
/// assert_eq!(spec.upper_bound(), 10_000);
/// assert_eq!(spec.bucket_range(3), 3000..4000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramSpec {
    /// Width of each bucket.
    pub bucket_width: u32,
    /// Number of buckets.
    pub bucket_count: usize,
}

impl Default for HistogramSpec {
    fn default() -> Self {
        Self {
            bucket_width: DEFAULT_BUCKET_WIDTH,
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl HistogramSpec {
    /// Creates a layout with the given bucket width and count.
    pub fn new(bucket_width: u32, bucket_count: usize) -> Self {
        Self {
            bucket_width,
            bucket_count,
        }
    }

    /// Checks that the layout can hold at least one value and stays within
    /// `[0, MAX_UPPER_BOUND)` using at most [`MAX_BUCKET_COUNT`] buckets.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidHistogram`] if the width or the count
    /// is zero, the count exceeds [`MAX_BUCKET_COUNT`], or
    /// `bucket_width * bucket_count` exceeds [`MAX_UPPER_BOUND`].
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let covered = u64::from(self.bucket_width).checked_mul(self.bucket_count as u64);

        let valid = self.bucket_width > 0
            && self.bucket_count > 0
            && self.bucket_count <= MAX_BUCKET_COUNT
            && covered.is_some_and(|upper| upper <= MAX_UPPER_BOUND);

        if !valid {
            return Err(AnalysisError::InvalidHistogram {
                bucket_width: self.bucket_width,
                bucket_count: self.bucket_count,
            });
        }
        Ok(())
    }

    /// Exclusive upper bound of the covered domain.
    ///
    /// Saturates at `u64::MAX` for layouts that [`validate`](Self::validate)
    /// rejects.
    pub fn upper_bound(&self) -> u64 {
        u64::from(self.bucket_width).saturating_mul(self.bucket_count as u64)
    }

    /// Value range of bucket `index`.
    pub fn bucket_range(&self, index: usize) -> Range<u64> {
        let width = u64::from(self.bucket_width);
        let lo = (index as u64).saturating_mul(width);
        lo..lo.saturating_add(width)
    }

    /// Bucket index for `value`, or `None` outside `[0, upper_bound)`.
    #[inline]
    pub fn bucket_of(&self, value: i32) -> Option<usize> {
        let value = u64::try_from(value).ok()?;
        if value >= self.upper_bound() {
            return None;
        }
        Some((value / u64::from(self.bucket_width)) as usize)
    }
}

/// Observed bucket counts for one sample set.
///
/// Only built by [`Histogram::from_samples`], so `counts` always has one
/// entry per bucket of `spec`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    spec: HistogramSpec,
    counts: Vec<u64>,
}

impl Histogram {
    /// Counts `samples` into the buckets of `spec`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidHistogram`] for an unusable layout
    /// - [`AnalysisError::ValueOutOfRange`] for the first sample outside
    ///   `[0, spec.upper_bound())`
    pub fn from_samples(samples: &[i32], spec: HistogramSpec) -> Result<Self, AnalysisError> {
        spec.validate()?;

        let mut counts = vec![0_u64; spec.bucket_count];
        for (index, &value) in samples.iter().enumerate() {
            let bucket = spec
                .bucket_of(value)
                .ok_or(AnalysisError::ValueOutOfRange {
                    index,
                    value,
                    upper: spec.upper_bound(),
                })?;
            counts[bucket] += 1;
        }

        Ok(Self { spec, counts })
    }

    /// Layout that produced these counts.
    pub fn spec(&self) -> HistogramSpec {
        self.spec
    }

    /// Count per bucket, in bucket order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates over `(bucket range, count)` pairs.
    pub fn buckets(&self) -> impl Iterator<Item = (Range<u64>, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (self.spec.bucket_range(index), count))
    }

    /// Chi-square-style dispersion against a uniform expectation.
    ///
    /// Computes `Σ(count² × bucket_count) / n − n`, where `n` is the number
    /// of samples. Zero when every bucket holds exactly `n / bucket_count`.
    pub fn criterion(&self, sample_count: usize) -> f64 {
        let k = self.spec.bucket_count as f64;
        let mut sum = 0.0;
        for &count in &self.counts {
            let count = count as f64;
            sum += count * count * k;
        }
        sum /= sample_count as f64;
        sum - sample_count as f64
    }
}
