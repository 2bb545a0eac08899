//! Knit Circuit Representation
//!
//! Core data structures for describing the circuits that flow through the
//! cutting and verification pipeline: the uncut full circuit and every
//! subcircuit produced from it.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] and [`Qubit`]. A circuit's qubit list is its
//!   canonical bit order; [`Circuit::qubit_index`] resolves an id to its slot.
//! - **Gates**: [`StandardGate`] for built-in gates with concrete angles
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use knit_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.qubit_index(QubitId(1)), Some(1));
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Qubit, QubitId};
