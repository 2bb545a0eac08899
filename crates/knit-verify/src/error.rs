//! Verification error types.

use knit_ir::QubitId;
use knit_metrics::QuasiConversionMode;
use thiserror::Error;

/// Boxed error raised by a collaborator, kept intact as the source.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Inconsistency between the path map, the subcircuits and the smart order.
///
/// Points at a bug in the cutting pipeline that produced the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MappingError {
    /// A qubit's hop chain is empty.
    #[error("Qubit {qubit} has no hops in the path map")]
    EmptyPath {
        /// Canonical index of the qubit.
        qubit: usize,
    },

    /// The path map names a qubit the full circuit does not have.
    #[error("Path map references qubit {0} which is not in the full circuit")]
    UnknownQubit(QubitId),

    /// The path map lists the same qubit twice.
    #[error("Path map lists qubit {0} more than once")]
    DuplicateQubit(QubitId),

    /// The path map does not cover every qubit of the full circuit.
    #[error("Path map covers {path_map} qubits but the full circuit has {circuit}")]
    QubitCountMismatch {
        /// Qubits in the path map.
        path_map: usize,
        /// Qubits in the full circuit.
        circuit: usize,
    },

    /// A subcircuit index has no matching subcircuit.
    #[error("Subcircuit {subcircuit} does not exist ({available} subcircuits)")]
    UnknownSubcircuit {
        /// The offending index.
        subcircuit: usize,
        /// Number of subcircuits supplied.
        available: usize,
    },

    /// A subcircuit named in the path map is missing from the smart order.
    #[error("Subcircuit {0} appears in the path map but is missing from the smart order")]
    NotInSmartOrder(usize),

    /// The smart order lists a subcircuit twice.
    #[error("Subcircuit {0} appears more than once in the smart order")]
    DuplicateInSmartOrder(usize),

    /// A final hop names a qubit the subcircuit does not have.
    #[error("Subcircuit {subcircuit} has no qubit {qubit}")]
    LocalQubitNotFound {
        /// Subcircuit index.
        subcircuit: usize,
        /// Local qubit named by the hop.
        qubit: QubitId,
    },
}

/// Malformed qubit permutation or distribution size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PermutationError {
    /// Distribution length is not `2^n`.
    #[error("Distribution length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Permutation length does not match the distribution width.
    #[error("Permutation has {got} entries but the distribution spans {expected} qubits")]
    LengthMismatch {
        /// Qubits implied by the distribution length.
        expected: usize,
        /// Entries in the permutation.
        got: usize,
    },

    /// Entry outside `0..n`.
    #[error("Permutation entry {value} is out of range for {num_qubits} qubits")]
    OutOfRange {
        /// The offending entry.
        value: usize,
        /// Number of qubits.
        num_qubits: usize,
    },

    /// Entry appears twice.
    #[error("Permutation entry {0} appears more than once")]
    Duplicate(usize),
}

/// Errors that can occur during verification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// Path map / smart order inconsistency.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Permutation or distribution size is malformed.
    #[error("Permutation error: {0}")]
    Permutation(#[from] PermutationError),

    /// The full circuit is wider than the configured limit.
    #[error("Full circuit has {num_qubits} qubits, verification is limited to {max_qubits}")]
    CircuitTooLarge {
        /// Width of the full circuit.
        num_qubits: usize,
        /// Configured limit.
        max_qubits: usize,
    },

    /// The ground-truth evaluator failed.
    #[error("Ground-truth evaluation failed: {0}")]
    Evaluation(#[source] CollaboratorError),

    /// The ground truth has the wrong number of entries.
    #[error("Ground truth has {got} entries, expected {expected}")]
    GroundTruthSize {
        /// `2^n` for the full circuit.
        expected: usize,
        /// Entries returned by the evaluator.
        got: usize,
    },

    /// The quasi-probability projector failed.
    #[error("Projection to '{mode}' failed: {source}")]
    Projection {
        /// Mode being projected.
        mode: QuasiConversionMode,
        /// Error returned by the projector.
        #[source]
        source: CollaboratorError,
    },

    /// The projector returned something that is not a probability vector.
    #[error(
        "Projection to '{mode}' is not a distribution (sum {sum}, min {min}, {len} entries)"
    )]
    ProjectionContract {
        /// Mode being projected.
        mode: QuasiConversionMode,
        /// Total mass of the returned vector.
        sum: f64,
        /// Smallest entry of the returned vector.
        min: f64,
        /// Length of the returned vector.
        len: usize,
    },

    /// A metric function failed.
    #[error("Metric computation failed: {0}")]
    MetricComputation(#[source] CollaboratorError),
}
