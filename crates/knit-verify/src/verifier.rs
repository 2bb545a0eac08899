//! Verification driver.

use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

use knit_ir::Circuit;
use knit_metrics::{MetricKind, QuasiConversionMode};
use knit_sim::{BitOrder, StatevectorEvaluator};

use crate::collaborators::{
    GroundTruthEvaluator, MetricLibrary, QuasiProjector, StandardMetrics, StandardProjector,
};
use crate::config::VerifyConfig;
use crate::cut::{CutSolution, PathMap};
use crate::error::{MappingError, VerifyError, VerifyResult};
use crate::reassemble::reassemble;
use crate::report::{ModeMetrics, VerificationReport};
use crate::resolver::resolve_permutation;

/// Reorders a reconstructed distribution and scores it against ground truth.
pub struct Verifier<E = StatevectorEvaluator, P = StandardProjector, M = StandardMetrics> {
    config: VerifyConfig,
    evaluator: E,
    projector: P,
    metrics: M,
}

impl Verifier {
    /// Verifier backed by exact statevector simulation and the standard
    /// projector and metrics.
    pub fn new(config: VerifyConfig) -> Self {
        let evaluator = StatevectorEvaluator::new()
            .with_max_qubits(config.max_qubits)
            .with_bit_order(BitOrder::BigEndian);
        Self {
            config,
            evaluator,
            projector: StandardProjector,
            metrics: StandardMetrics,
        }
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(VerifyConfig::default())
    }
}

impl<E, P, M> Verifier<E, P, M>
where
    E: GroundTruthEvaluator,
    P: QuasiProjector,
    M: MetricLibrary,
{
    /// Verifier with caller-supplied collaborators.
    pub fn with_collaborators(config: VerifyConfig, evaluator: E, projector: P, metrics: M) -> Self {
        Self {
            config,
            evaluator,
            projector,
            metrics,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Canonical distribution and metrics for `unordered`.
    pub fn verify(
        &self,
        full_circuit: &Circuit,
        unordered: &[f64],
        path_map: &PathMap,
        subcircuits: &[Circuit],
        smart_order: &[usize],
    ) -> VerifyResult<(Vec<f64>, ModeMetrics)> {
        let report =
            self.verify_report(full_circuit, unordered, path_map, subcircuits, smart_order)?;
        Ok((report.canonical, report.metrics))
    }

    /// [`verify`](Self::verify) over a bundled cut.
    #[instrument(
        skip_all,
        fields(num_cuts = cut.num_cuts, num_subcircuits = cut.num_subcircuits())
    )]
    pub fn verify_cut(
        &self,
        full_circuit: &Circuit,
        cut: &CutSolution,
        unordered: &[f64],
        smart_order: &[usize],
    ) -> VerifyResult<(Vec<f64>, ModeMetrics)> {
        info!(
            "Cut has {} wire cuts across {} subcircuits",
            cut.num_cuts,
            cut.num_subcircuits()
        );
        self.verify(
            full_circuit,
            unordered,
            &cut.path_map,
            &cut.subcircuits,
            smart_order,
        )
    }

    /// Like [`verify`](Self::verify), also returning ground truth and the
    /// resolved permutation.
    #[instrument(
        skip_all,
        fields(circuit = full_circuit.name(), num_qubits = full_circuit.num_qubits())
    )]
    pub fn verify_report(
        &self,
        full_circuit: &Circuit,
        unordered: &[f64],
        path_map: &PathMap,
        subcircuits: &[Circuit],
        smart_order: &[usize],
    ) -> VerifyResult<VerificationReport> {
        let num_qubits = full_circuit.num_qubits();
        if num_qubits > self.config.max_qubits {
            return Err(VerifyError::CircuitTooLarge {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        if path_map.len() != num_qubits {
            return Err(MappingError::QubitCountMismatch {
                path_map: path_map.len(),
                circuit: num_qubits,
            }
            .into());
        }

        let expected = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or(VerifyError::CircuitTooLarge {
                num_qubits,
                max_qubits: usize::BITS as usize - 1,
            })?;

        info!(
            "Verifying {} subcircuits, smart order {:?}",
            subcircuits.len(),
            smart_order
        );

        let ground_truth = self
            .evaluator
            .evaluate(full_circuit)
            .map_err(|e| VerifyError::Evaluation(Box::new(e)))?;
        if ground_truth.len() != expected {
            return Err(VerifyError::GroundTruthSize {
                expected,
                got: ground_truth.len(),
            });
        }

        let permutation = resolve_permutation(path_map, subcircuits, smart_order)?;
        debug!("Unordered bit positions hold qubits {:?}", permutation);

        let canonical = reassemble(unordered, &permutation)?;
        let metrics = self.score(&canonical, &ground_truth)?;

        info!(
            "Verification complete: chi2 nearest={:?} naive={:?}",
            metrics.get(QuasiConversionMode::Nearest, MetricKind::Chi2),
            metrics.get(QuasiConversionMode::Naive, MetricKind::Chi2),
        );

        Ok(VerificationReport {
            canonical,
            ground_truth,
            permutation,
            metrics,
        })
    }

    fn score(&self, canonical: &[f64], ground_truth: &[f64]) -> VerifyResult<ModeMetrics> {
        let mut metrics = ModeMetrics::default();
        for mode in QuasiConversionMode::ALL {
            let real = self
                .projector
                .project(canonical, mode)
                .map_err(|e| VerifyError::Projection {
                    mode,
                    source: Box::new(e),
                })?;
            self.check_distribution(mode, &real, canonical.len())?;

            let mut scores = BTreeMap::new();
            for metric in MetricKind::ALL {
                let value = self
                    .metrics
                    .compute(metric, ground_truth, &real)
                    .map_err(|e| VerifyError::MetricComputation(Box::new(e)))?;
                scores.insert(metric, value);
            }
            debug!("Scored mode '{}': {:?}", mode, scores);
            metrics.insert(mode, scores);
        }
        Ok(metrics)
    }

    fn check_distribution(
        &self,
        mode: QuasiConversionMode,
        projected: &[f64],
        expected_len: usize,
    ) -> VerifyResult<()> {
        let tolerance = self.config.probability_tolerance;
        let sum: f64 = projected.iter().sum();
        let min = projected.iter().copied().fold(f64::INFINITY, f64::min);

        let valid = projected.len() == expected_len
            && min >= -tolerance
            && (sum - 1.0).abs() <= tolerance;
        if valid {
            Ok(())
        } else {
            Err(VerifyError::ProjectionContract {
                mode,
                sum,
                min,
                len: projected.len(),
            })
        }
    }
}

/// Verify with the default [`Verifier`].
pub fn verify(
    full_circuit: &Circuit,
    unordered: &[f64],
    path_map: &PathMap,
    subcircuits: &[Circuit],
    smart_order: &[usize],
) -> VerifyResult<(Vec<f64>, ModeMetrics)> {
    Verifier::new(VerifyConfig::default()).verify(
        full_circuit,
        unordered,
        path_map,
        subcircuits,
        smart_order,
    )
}
