//! Error types for the metrics crate.

use thiserror::Error;

/// Errors raised by projections and distance metrics.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MetricError {
    /// No entries to work with.
    #[error("Distribution is empty")]
    Empty,

    /// The two distributions differ in length.
    #[error("Distribution lengths differ: target has {target}, observed has {observed}")]
    LengthMismatch {
        /// Length of the target distribution.
        target: usize,
        /// Length of the observed distribution.
        observed: usize,
    },

    /// An entry is NaN or infinite.
    #[error("Non-finite value {value} at index {index}")]
    NonFinite {
        /// Offending index.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Nothing positive is left to normalize.
    #[error("Quasi-probability vector has no positive mass (total {0})")]
    ZeroMass(f64),
}

/// Result type for metric operations.
pub type MetricResult<T> = Result<T, MetricError>;

pub(crate) fn check_finite(values: &[f64]) -> MetricResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MetricError::NonFinite {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
