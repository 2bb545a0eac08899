//! Seams to the external pieces a verification run relies on.
//!
//! Each trait carries its own error type; the verifier boxes it unchanged
//! into [`VerifyError`](crate::VerifyError) so callers can downcast.

use knit_ir::Circuit;
use knit_metrics::{MetricError, MetricKind, QuasiConversionMode, quasi_to_real};
use knit_sim::{SimError, StatevectorEvaluator};

/// Exact output distribution of an uncut circuit.
pub trait GroundTruthEvaluator {
    /// Error raised when the circuit cannot be evaluated.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Probabilities of all `2^n` basis states, qubit 0 most significant.
    fn evaluate(&self, circuit: &Circuit) -> Result<Vec<f64>, Self::Error>;
}

/// Correction of quasi-probabilities into a probability vector.
pub trait QuasiProjector {
    /// Error raised when no valid projection exists.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Non-negative vector of the same length summing to one.
    fn project(&self, quasi: &[f64], mode: QuasiConversionMode) -> Result<Vec<f64>, Self::Error>;
}

/// Scalar comparison of two equal-length probability vectors.
pub trait MetricLibrary {
    /// Error raised on malformed input.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Value of `metric` for `obs` against `target`.
    fn compute(&self, metric: MetricKind, target: &[f64], obs: &[f64])
    -> Result<f64, Self::Error>;
}

impl GroundTruthEvaluator for StatevectorEvaluator {
    type Error = SimError;

    fn evaluate(&self, circuit: &Circuit) -> Result<Vec<f64>, SimError> {
        StatevectorEvaluator::evaluate(self, circuit)
    }
}

/// Projection via [`quasi_to_real`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardProjector;

impl QuasiProjector for StandardProjector {
    type Error = MetricError;

    fn project(&self, quasi: &[f64], mode: QuasiConversionMode) -> Result<Vec<f64>, MetricError> {
        quasi_to_real(quasi, mode)
    }
}

/// Metrics via [`MetricKind::compute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl MetricLibrary for StandardMetrics {
    type Error = MetricError;

    fn compute(&self, metric: MetricKind, target: &[f64], obs: &[f64]) -> Result<f64, MetricError> {
        metric.compute(target, obs)
    }
}
