//! Error types for the sim crate.

use knit_ir::QubitId;
use thiserror::Error;

/// Errors produced while evaluating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit is wider than the evaluator accepts.
    #[error("Circuit has {num_qubits} qubits but the evaluator is limited to {max_qubits}")]
    TooManyQubits {
        /// Width of the submitted circuit.
        num_qubits: usize,
        /// Configured limit.
        max_qubits: usize,
    },

    /// An instruction references a qubit the circuit does not declare.
    #[error("Instruction '{instruction}' references unknown qubit {qubit}")]
    QubitNotFound {
        /// The offending qubit.
        qubit: QubitId,
        /// Name of the instruction.
        instruction: String,
    },

    /// The instruction has no unitary action on a pure state.
    #[error("Unsupported operation '{0}' for exact statevector evaluation")]
    UnsupportedOperation(String),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
