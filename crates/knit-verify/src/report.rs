//! Verification results.

use std::collections::BTreeMap;

use knit_metrics::{MetricKind, QuasiConversionMode};

/// Metric values per correction mode.
///
/// A finished run holds every [`QuasiConversionMode`] and, for each, every
/// [`MetricKind`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModeMetrics {
    values: BTreeMap<QuasiConversionMode, BTreeMap<MetricKind, f64>>,
}

impl ModeMetrics {
    pub(crate) fn insert(&mut self, mode: QuasiConversionMode, scores: BTreeMap<MetricKind, f64>) {
        self.values.insert(mode, scores);
    }

    /// Value of `metric` under `mode`.
    pub fn get(&self, mode: QuasiConversionMode, metric: MetricKind) -> Option<f64> {
        self.values.get(&mode)?.get(&metric).copied()
    }

    /// All metrics for `mode`.
    pub fn mode(&self, mode: QuasiConversionMode) -> Option<&BTreeMap<MetricKind, f64>> {
        self.values.get(&mode)
    }

    /// Modes present.
    pub fn modes(&self) -> impl Iterator<Item = QuasiConversionMode> + '_ {
        self.values.keys().copied()
    }

    /// Same values keyed by report names (`"nearest"` → `"chi2"` → value).
    pub fn to_named(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.values
            .iter()
            .map(|(mode, scores)| {
                let named = scores
                    .iter()
                    .map(|(metric, value)| (metric.key().to_string(), *value))
                    .collect();
                (mode.key().to_string(), named)
            })
            .collect()
    }
}

/// Everything computed by one verification run.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    /// Reconstructed distribution in canonical qubit order (not projected).
    pub canonical: Vec<f64>,
    /// Exact distribution of the full circuit.
    pub ground_truth: Vec<f64>,
    /// Full-circuit qubit behind each unordered bit position.
    pub permutation: Vec<usize>,
    /// Scores per correction mode.
    pub metrics: ModeMetrics,
}
