//! # Seeded Integer Generators
//!
//! This module provides [`Generator`], a small stateful integer stream with
//! two update rules selected by [`Variant`]:
//!
//! - **XorShift**: three xor-shift steps (`<< 17`, `>> 19`, `<< 7`) on a
//!   64-bit register, reduced modulo `2^32 - 1`
//! - **LinearCongruential**: `state = state * 20999917 + 20995031` on the low
//!   32 bits of the register, wrapping modulo `2^32`
//!
//! Every call maps the register into `[min_value, max_value)` by taking it
//! modulo the span of the bounds.
//!
//! ## Reproducibility
//!
//! The register widths are part of the algorithms. Shifts truncate at 64 bits
//! and the congruential step wraps at 32 bits, so the same seed, bounds and
//! variant always give the same stream.
//!
//! ## Module Structure
//!
//! - [`prng`]: The generator and its update rules
//! - [`variant`]: Variant selector with parsing and display
//!
//! ## Usage Example
//!
//! ```rust
//! use randstat_core::generator::{Generator, Variant};
//!
//! let mut generator = Generator::new(3359, 0, 10_000, Variant::LinearCongruential).unwrap();
//! assert_eq!(generator.next(), 9498);
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0; 100];
//! generator.fill(&mut buffer);
//! assert!(buffer.iter().all(|&v| (0..10_000).contains(&v)));
//! ```

pub mod prng;
pub mod variant;

pub use prng::{Generator, LCG_INCREMENT, LCG_MULTIPLIER, XORSHIFT_MODULUS};
pub use variant::Variant;
