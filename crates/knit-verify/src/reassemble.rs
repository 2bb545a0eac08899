//! Distribution reassembly.
//!
//! Bit positions are counted most-significant first: position `k` of an
//! `n`-qubit index `s` is `(s >> (n - 1 - k)) & 1`.

use crate::error::PermutationError;

/// Relabel `unordered` into canonical qubit order.
///
/// Position `k` of every unordered index is read as the value of canonical
/// qubit `permutation[k]`. Values are copied verbatim, so total mass is
/// preserved.
pub fn reassemble(unordered: &[f64], permutation: &[usize]) -> Result<Vec<f64>, PermutationError> {
    let moves = bit_moves(unordered.len(), permutation)?;

    let mut canonical = vec![0.0; unordered.len()];
    for (index, &value) in unordered.iter().enumerate() {
        canonical[relabel(index, &moves)] = value;
    }
    Ok(canonical)
}

/// Validate `permutation` against a distribution of `len` entries and turn it
/// into (source shift, destination shift) pairs.
fn bit_moves(len: usize, permutation: &[usize]) -> Result<Vec<(usize, usize)>, PermutationError> {
    if !len.is_power_of_two() {
        return Err(PermutationError::NotPowerOfTwo(len));
    }
    let num_qubits = len.trailing_zeros() as usize;
    if permutation.len() != num_qubits {
        return Err(PermutationError::LengthMismatch {
            expected: num_qubits,
            got: permutation.len(),
        });
    }

    let mut seen = vec![false; num_qubits];
    let mut moves = Vec::with_capacity(num_qubits);
    for (position, &qubit) in permutation.iter().enumerate() {
        if qubit >= num_qubits {
            return Err(PermutationError::OutOfRange {
                value: qubit,
                num_qubits,
            });
        }
        if std::mem::replace(&mut seen[qubit], true) {
            return Err(PermutationError::Duplicate(qubit));
        }
        moves.push((num_qubits - 1 - position, num_qubits - 1 - qubit));
    }
    Ok(moves)
}

#[inline]
fn relabel(index: usize, moves: &[(usize, usize)]) -> usize {
    moves
        .iter()
        .fold(0, |acc, &(src, dst)| acc | (((index >> src) & 1) << dst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let v = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(reassemble(&v, &[0, 1]).unwrap(), v);
    }

    #[test]
    fn test_reverse_three_qubits() {
        let mut v = [0.0; 8];
        v[0b100] = 1.0;
        let out = reassemble(&v, &[2, 1, 0]).unwrap();
        assert_eq!(out[0b001], 1.0);
        assert_eq!(out.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_rotation() {
        // Unordered bits (q1, q2, q0) -> canonical (q0, q1, q2).
        let mut v = [0.0; 8];
        v[0b110] = 0.75; // q1 = 1, q2 = 1, q0 = 0
        v[0b001] = 0.25; // q0 = 1
        let out = reassemble(&v, &[1, 2, 0]).unwrap();
        assert_eq!(out[0b011], 0.75);
        assert_eq!(out[0b100], 0.25);
    }

    #[test]
    fn test_single_qubit() {
        assert_eq!(reassemble(&[0.3, 0.7], &[0]).unwrap(), vec![0.3, 0.7]);
    }

    #[test]
    fn test_zero_qubits() {
        assert_eq!(reassemble(&[1.0], &[]).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            reassemble(&[0.5, 0.25, 0.25], &[0]),
            Err(PermutationError::NotPowerOfTwo(3))
        );
        assert_eq!(reassemble(&[], &[]), Err(PermutationError::NotPowerOfTwo(0)));
        assert_eq!(
            reassemble(&[0.25; 4], &[0]),
            Err(PermutationError::LengthMismatch {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            reassemble(&[0.25; 4], &[0, 2]),
            Err(PermutationError::OutOfRange {
                value: 2,
                num_qubits: 2
            })
        );
        assert_eq!(
            reassemble(&[0.25; 4], &[1, 1]),
            Err(PermutationError::Duplicate(1))
        );
    }
}
