//! Qubit types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a qubit within one circuit.
///
/// Ids are only meaningful relative to the circuit that issued them: a
/// subcircuit's `q0` and the full circuit's `q0` are unrelated wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// A qubit declared by a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// The unique identifier.
    pub id: QubitId,
}

impl Qubit {
    /// Create a new qubit with just an id.
    pub fn new(id: QubitId) -> Self {
        Self { id }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        let q = Qubit::new(QubitId(0));
        assert_eq!(format!("{q}"), "q0");
    }

    #[test]
    fn test_qubit_id_ordering() {
        let mut ids = vec![QubitId(3), QubitId(1), QubitId(2)];
        ids.sort();
        assert_eq!(ids, vec![QubitId(1), QubitId(2), QubitId(3)]);
    }
}
