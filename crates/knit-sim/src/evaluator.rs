//! Exact ground-truth evaluation of a full circuit.

use std::time::Instant;
use tracing::{debug, instrument};

use knit_ir::{Circuit, InstructionKind};

use crate::error::{SimError, SimResult};
use crate::statevector::{BitOrder, Statevector};

/// Default upper bound on the width of a simulated circuit.
pub const DEFAULT_MAX_QUBITS: usize = 20;

/// Computes the exact output distribution of a circuit.
///
/// Measurements and barriers are ignored: every qubit is treated as
/// measured at the end of the circuit. Resets are rejected since they do
/// not act unitarily on the pure state.
#[derive(Debug, Clone)]
pub struct StatevectorEvaluator {
    max_qubits: usize,
    bit_order: BitOrder,
}

impl StatevectorEvaluator {
    /// Create an evaluator with default settings (big-endian, 20 qubits).
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            bit_order: BitOrder::BigEndian,
        }
    }

    /// Limit the width of accepted circuits.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Select how qubits map onto bits of the returned indices.
    #[must_use]
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// Configured width limit.
    pub fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    /// Configured bit order.
    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// Probability of every basis state of `circuit`, length `2^n`.
    #[instrument(skip(self, circuit), fields(name = circuit.name()))]
    pub fn evaluate(&self, circuit: &Circuit) -> SimResult<Vec<f64>> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max_qubits: self.max_qubits,
            });
        }

        debug!(
            "Evaluating {} qubits, {} instructions",
            num_qubits,
            circuit.instructions().len()
        );

        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    let slots = inst
                        .qubits
                        .iter()
                        .map(|q| {
                            circuit.qubit_index(*q).ok_or_else(|| SimError::QubitNotFound {
                                qubit: *q,
                                instruction: inst.name().to_string(),
                            })
                        })
                        .collect::<SimResult<Vec<_>>>()?;
                    sv.apply_gate(gate, &slots);
                }
                InstructionKind::Measure | InstructionKind::Barrier => {}
                InstructionKind::Reset => {
                    return Err(SimError::UnsupportedOperation(inst.name().to_string()));
                }
            }
        }

        let probabilities = sv.probabilities(self.bit_order);
        debug!("Evaluation completed in {:?}", start.elapsed());
        Ok(probabilities)
    }
}

impl Default for StatevectorEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
