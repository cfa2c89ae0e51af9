//! Bounded integer generator with xor-shift and linear congruential rules.
//!
//! This module provides [`Generator`], a seeded stream of integers confined
//! to a half-open range `[min_value, max_value)`.

use super::variant::Variant;
use crate::error::GeneratorError;

/// Modulus applied to the xor-shift register after every step (`2^32 - 1`).
pub const XORSHIFT_MODULUS: u64 = 4_294_967_295;

/// Multiplier of the linear congruential step.
pub const LCG_MULTIPLIER: u32 = 20_999_917;

/// Increment of the linear congruential step.
pub const LCG_INCREMENT: u32 = 20_995_031;

/// Seeded integer generator.
///
/// Holds a single 64-bit register, the value bounds and the update rule.
/// Each call to [`next`](Generator::next) advances the register once and
/// maps it into `[min_value, max_value)`.
///
/// # Examples
///
/// ```rust
/// use randstat_core::generator::{Generator, Variant};
///
/// let mut a = Generator::new(42, -50, 50, Variant::XorShift).unwrap();
/// let mut b = Generator::new(42, -50, 50, Variant::XorShift).unwrap();
///
/// for _ in 0..100 {
///     let value = a.next();
///     assert_eq!(value, b.next());
///     assert!((-50..50).contains(&value));
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    /// Internal register.
    current: u64,
    /// Inclusive lower bound.
    min_value: i32,
    /// Exclusive upper bound.
    max_value: i32,
    /// `max_value - min_value`, always positive.
    span: u64,
    /// Update rule.
    variant: Variant,
}

impl Generator {
    /// Creates a generator with `seed` as its initial register.
    ///
    /// A zero seed is accepted for both variants. For
    /// [`Variant::XorShift`] the all-zero register is a fixed point, so such
    /// a generator always yields `min_value`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidBounds`] if `min_value >= max_value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstat_core::generator::{Generator, Variant};
    /// use randstat_core::error::GeneratorError;
    ///
    /// assert!(Generator::new(1, 0, 10, Variant::XorShift).is_ok());
    /// assert_eq!(
    ///     Generator::new(1, 10, 10, Variant::XorShift),
    ///     Err(GeneratorError::InvalidBounds { min_value: 10, max_value: 10 })
    /// );
    /// ```
    pub fn new(
        seed: u64,
        min_value: i32,
        max_value: i32,
        variant: Variant,
    ) -> Result<Self, GeneratorError> {
        if min_value >= max_value {
            return Err(GeneratorError::InvalidBounds {
                min_value,
                max_value,
            });
        }

        Ok(Self {
            current: seed,
            min_value,
            max_value,
            span: (i64::from(max_value) - i64::from(min_value)) as u64,
            variant,
        })
    }

    /// Advances the register and returns the next value in
    /// `[min_value, max_value)`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> i32 {
        self.current = match self.variant {
            Variant::XorShift => xorshift_step(self.current),
            Variant::LinearCongruential => lcg_step(self.current),
        };

        let offset = (self.current % self.span) as i64;
        (i64::from(self.min_value) + offset) as i32
    }

    /// Fills the buffer with consecutive values from the stream.
    ///
    /// Zero-allocation; an empty buffer leaves the generator untouched.
    #[inline]
    pub fn fill(&mut self, buffer: &mut [i32]) {
        for value in buffer.iter_mut() {
            *value = self.next();
        }
    }

    /// Collects the next `count` values into a new vector.
    pub fn sample(&mut self, count: usize) -> Vec<i32> {
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(self.next());
        }
        samples
    }

    /// Returns the current register.
    #[inline]
    pub fn state(&self) -> u64 {
        self.current
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Returns the update rule.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// One xor-shift step. Shifts truncate at 64 bits.
#[inline]
fn xorshift_step(mut state: u64) -> u64 {
    state ^= state << 17;
    state ^= state >> 19;
    state ^= state << 7;
    state % XORSHIFT_MODULUS
}

/// One linear congruential step on the low 32 bits of the register.
#[inline]
fn lcg_step(state: u64) -> u64 {
    u64::from(
        (state as u32)
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT),
    )
}
