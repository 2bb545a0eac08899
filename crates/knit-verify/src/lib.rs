//! Knit Verification
//!
//! Checks a circuit-cutting reconstruction against direct simulation of the
//! uncut circuit.
//!
//! A cut circuit is run as independent subcircuits and recombined into one
//! distribution whose bits follow the order the subcircuits were
//! concatenated in (the *smart order*), not the original qubit order. This
//! crate undoes that ordering and scores the result.
//!
//! # Architecture
//!
//! ```text
//! [PathMap + Subcircuits + Smart Order] -> Qubit-Order Resolver
//!                                               |
//!                                               v
//!          [Unordered Distribution] -> Distribution Reassembler
//!                                               |
//!                                               v
//!   [Full Circuit] -> Ground Truth -> Projection + Metrics (nearest, naive)
//! ```
//!
//! # Bit conventions
//!
//! Subcircuit distributions put local qubit 0 in the least significant bit.
//! Canonical distributions put full-circuit qubit 0 in the most significant
//! bit. [`resolve_permutation`] and [`reassemble`] together convert from the
//! first to the second.
//!
//! # Example
//!
//! ```rust
//! use knit_ir::{Circuit, Qubit, QubitId};
//! use knit_metrics::{MetricKind, QuasiConversionMode};
//! use knit_verify::{Hop, PathMap, verify};
//!
//! // Bell circuit cut into two single-qubit fragments: correlation is lost.
//! let full = Circuit::bell().unwrap();
//! let fragment = || Circuit::from_qubits("frag", [Qubit::new(QubitId(0))]).unwrap();
//! let subcircuits = vec![fragment(), fragment()];
//! let path_map = PathMap::new(vec![vec![Hop::new(0, 0)], vec![Hop::new(1, 0)]]).unwrap();
//!
//! let unordered = [0.5, 0.5, 0.0, 0.0];
//! let (canonical, metrics) = verify(&full, &unordered, &path_map, &subcircuits, &[0, 1]).unwrap();
//!
//! assert_eq!(canonical, unordered);
//! let chi2 = metrics.get(QuasiConversionMode::Nearest, MetricKind::Chi2).unwrap();
//! assert!(chi2 > 0.5);
//! ```

pub mod collaborators;
pub mod config;
pub mod cut;
pub mod error;
pub mod reassemble;
pub mod report;
pub mod resolver;
mod verifier;

pub use collaborators::{
    GroundTruthEvaluator, MetricLibrary, QuasiProjector, StandardMetrics, StandardProjector,
};
pub use config::VerifyConfig;
pub use cut::{CutSolution, Hop, PathMap};
pub use error::{CollaboratorError, MappingError, PermutationError, VerifyError, VerifyResult};
pub use reassemble::reassemble;
pub use report::{ModeMetrics, VerificationReport};
pub use resolver::resolve_permutation;
pub use verifier::{Verifier, verify};
