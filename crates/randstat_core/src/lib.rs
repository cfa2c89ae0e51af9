//! # randstat_core: Seeded Generators and Sample Statistics
//!
//! ## Core Layer Role
//!
//! randstat_core is the bottom layer of the workspace, providing:
//! - Seeded integer generators with two update rules (`generator`)
//! - Descriptive statistics over integer samples (`analysis`)
//! - Error types for contract violations (`error`)
//!
//! The crate performs no I/O and keeps no global state. Timing, menus and
//! report rendering belong to the service layer.
//!
//! ## Usage Examples
//!
//! ```rust
//! use randstat_core::analysis::analyze;
//! use randstat_core::generator::{Generator, Variant};
//!
//! let mut generator = Generator::new(3359, 0, 10_000, Variant::LinearCongruential).unwrap();
//! let samples = generator.sample(1_000);
//!
//! let report = analyze(&samples).unwrap();
//! assert_eq!(report.sample_count(), 1_000);
//! assert_eq!(report.histogram().total(), 1_000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Variant`, `HistogramSpec`,
//!   `Histogram` and `Report`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod error;
pub mod generator;

pub use analysis::{analyze, analyze_with, Histogram, HistogramSpec, Report};
pub use error::{AnalysisError, GeneratorError, ParseVariantError};
pub use generator::{Generator, Variant};
