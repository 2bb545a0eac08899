//! Verification configuration.

use serde::{Deserialize, Serialize};

use knit_sim::DEFAULT_MAX_QUBITS;

/// Settings for a [`Verifier`](crate::Verifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Widest full circuit accepted. Ground truth costs `2^n` memory and time.
    pub max_qubits: usize,
    /// Allowed deviation of a projected distribution from unit mass and
    /// non-negativity.
    pub probability_tolerance: f64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            probability_tolerance: 1e-6,
        }
    }
}
