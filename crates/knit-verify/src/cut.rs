//! Bookkeeping produced by the cutting pipeline.

use serde::{Deserialize, Serialize};

use knit_ir::{Circuit, QubitId};

use crate::error::MappingError;

/// One step of a wire's route through the subcircuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    /// Index of the subcircuit the wire passes through.
    pub subcircuit: usize,
    /// The wire's qubit inside that subcircuit.
    pub qubit: QubitId,
}

impl Hop {
    /// Hop onto local qubit `q<qubit>` of `subcircuit`.
    pub fn new(subcircuit: usize, qubit: u32) -> Self {
        Self {
            subcircuit,
            qubit: QubitId(qubit),
        }
    }
}

/// Route of every full-circuit qubit through the subcircuits.
///
/// Indexed by the qubit's position in the full circuit, so entry `i` is the
/// hop chain of canonical qubit `i`. Every chain has at least one hop; the
/// last hop is where the qubit is finally measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Hop>>", into = "Vec<Vec<Hop>>")]
pub struct PathMap {
    paths: Vec<Vec<Hop>>,
}

impl PathMap {
    /// Build from chains already in canonical qubit order.
    pub fn new(paths: Vec<Vec<Hop>>) -> Result<Self, MappingError> {
        if let Some(qubit) = paths.iter().position(Vec::is_empty) {
            return Err(MappingError::EmptyPath { qubit });
        }
        Ok(Self { paths })
    }

    /// Build from chains keyed by full-circuit qubit id.
    ///
    /// Every qubit of `full_circuit` must appear exactly once.
    pub fn from_qubit_paths(
        full_circuit: &Circuit,
        paths: impl IntoIterator<Item = (QubitId, Vec<Hop>)>,
    ) -> Result<Self, MappingError> {
        let mut slots: Vec<Option<Vec<Hop>>> = vec![None; full_circuit.num_qubits()];
        for (qubit, path) in paths {
            let index = full_circuit
                .qubit_index(qubit)
                .ok_or(MappingError::UnknownQubit(qubit))?;
            if slots[index].replace(path).is_some() {
                return Err(MappingError::DuplicateQubit(qubit));
            }
        }

        let covered = slots.iter().filter(|s| s.is_some()).count();
        if covered != slots.len() {
            return Err(MappingError::QubitCountMismatch {
                path_map: covered,
                circuit: slots.len(),
            });
        }
        Self::new(slots.into_iter().flatten().collect())
    }

    /// Number of qubits covered.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no qubits are covered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Hop chain of canonical qubit `qubit`.
    pub fn path(&self, qubit: usize) -> Option<&[Hop]> {
        self.paths.get(qubit).map(Vec::as_slice)
    }

    /// Final (output) hop of canonical qubit `qubit`.
    pub fn output_hop(&self, qubit: usize) -> Option<&Hop> {
        self.paths.get(qubit).and_then(|p| p.last())
    }

    /// Chains in canonical qubit order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Hop])> {
        self.paths.iter().map(Vec::as_slice).enumerate()
    }
}

impl TryFrom<Vec<Vec<Hop>>> for PathMap {
    type Error = MappingError;

    fn try_from(paths: Vec<Vec<Hop>>) -> Result<Self, Self::Error> {
        Self::new(paths)
    }
}

impl From<PathMap> for Vec<Vec<Hop>> {
    fn from(map: PathMap) -> Self {
        map.paths
    }
}

/// Everything the cutter hands over for verification.
#[derive(Debug, Clone)]
pub struct CutSolution {
    /// Subcircuits, indexed by subcircuit id.
    pub subcircuits: Vec<Circuit>,
    /// Route of every full-circuit qubit.
    pub path_map: PathMap,
    /// Number of wire cuts made.
    pub num_cuts: usize,
}

impl CutSolution {
    /// Bundle a cut.
    pub fn new(subcircuits: Vec<Circuit>, path_map: PathMap, num_cuts: usize) -> Self {
        Self {
            subcircuits,
            path_map,
            num_cuts,
        }
    }

    /// Number of subcircuits.
    pub fn num_subcircuits(&self) -> usize {
        self.subcircuits.len()
    }
}
