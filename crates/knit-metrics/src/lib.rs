//! Knit Metrics
//!
//! Scalar distances between a reconstructed distribution and its ground
//! truth, plus the quasi-probability projection that turns a reconstruction
//! into something those distances accept.
//!
//! # Example
//!
//! ```rust
//! use knit_metrics::{MetricKind, QuasiConversionMode, quasi_to_real};
//!
//! let reconstructed = [0.55, -0.05, 0.0, 0.5];
//! let ground_truth = [0.5, 0.0, 0.0, 0.5];
//!
//! let real = quasi_to_real(&reconstructed, QuasiConversionMode::Naive).unwrap();
//! let chi2 = MetricKind::Chi2.compute(&ground_truth, &real).unwrap();
//! assert!(chi2 < 0.01);
//! ```

pub mod distance;
pub mod error;
pub mod projection;

pub use distance::MetricKind;
pub use error::{MetricError, MetricResult};
pub use projection::{QuasiConversionMode, quasi_to_real};
