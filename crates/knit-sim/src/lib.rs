//! Knit Statevector Evaluator
//!
//! Exact simulation of an uncut circuit, used as the ground truth that a
//! cut-and-reconstructed distribution is scored against.
//!
//! # Bit order
//!
//! Subcircuit results follow [`BitOrder::LittleEndian`] (qubit 0 is the
//! least significant bit of a basis index). Reconstructed distributions are
//! compared in [`BitOrder::BigEndian`], where qubit 0 is the most
//! significant bit; this is the evaluator's default.
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```rust
//! use knit_ir::Circuit;
//! use knit_sim::StatevectorEvaluator;
//!
//! let circuit = Circuit::bell().unwrap();
//! let probs = StatevectorEvaluator::new().evaluate(&circuit).unwrap();
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((probs[3] - 0.5).abs() < 1e-12);
//! ```

pub mod error;
mod evaluator;
mod statevector;

pub use error::{SimError, SimResult};
pub use evaluator::{DEFAULT_MAX_QUBITS, StatevectorEvaluator};
pub use statevector::{BitOrder, Statevector};
