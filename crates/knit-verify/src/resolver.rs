//! Qubit-order resolution.
//!
//! The reconstructed distribution concatenates subcircuit outputs in smart
//! order. Within one subcircuit, bit 0 of its local basis index is its
//! lowest-indexed qubit, so reading that subcircuit's bits most-significant
//! first visits its output qubits from the highest local index down.

use knit_ir::Circuit;

use crate::cut::PathMap;
use crate::error::MappingError;

/// Full-circuit qubit occupying each position of the unordered bit string.
///
/// Entry `k` is the canonical index of the qubit behind bit position `k`,
/// counted most-significant first. The result has one entry per qubit in
/// `path_map`.
pub fn resolve_permutation(
    path_map: &PathMap,
    subcircuits: &[Circuit],
    smart_order: &[usize],
) -> Result<Vec<usize>, MappingError> {
    let available = subcircuits.len();

    // (local index, canonical index) per subcircuit; None = not in smart order.
    let mut buckets: Vec<Option<Vec<(usize, usize)>>> = vec![None; available];
    for &subcircuit in smart_order {
        let bucket = buckets
            .get_mut(subcircuit)
            .ok_or(MappingError::UnknownSubcircuit {
                subcircuit,
                available,
            })?;
        if bucket.replace(Vec::new()).is_some() {
            return Err(MappingError::DuplicateInSmartOrder(subcircuit));
        }
    }

    // Every subcircuit a wire passes through must be real and in the smart order.
    for (_, path) in path_map.iter() {
        for hop in path {
            match buckets.get(hop.subcircuit) {
                None => {
                    return Err(MappingError::UnknownSubcircuit {
                        subcircuit: hop.subcircuit,
                        available,
                    });
                }
                Some(None) => return Err(MappingError::NotInSmartOrder(hop.subcircuit)),
                Some(Some(_)) => {}
            }
        }
    }

    for (qubit, path) in path_map.iter() {
        let hop = path.last().ok_or(MappingError::EmptyPath { qubit })?;
        let circuit = &subcircuits[hop.subcircuit];
        let local = circuit
            .qubit_index(hop.qubit)
            .ok_or(MappingError::LocalQubitNotFound {
                subcircuit: hop.subcircuit,
                qubit: hop.qubit,
            })?;
        if let Some(bucket) = buckets[hop.subcircuit].as_mut() {
            bucket.push((local, qubit));
        }
    }

    let mut permutation = Vec::with_capacity(path_map.len());
    for &subcircuit in smart_order {
        let mut bucket = buckets[subcircuit].take().unwrap_or_default();
        bucket.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        permutation.extend(bucket.into_iter().map(|(_, qubit)| qubit));
    }
    Ok(permutation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cut::Hop;
    use knit_ir::{Qubit, QubitId};

    fn fragment(ids: &[u32]) -> Circuit {
        Circuit::from_qubits("frag", ids.iter().map(|&i| Qubit::new(QubitId(i)))).unwrap()
    }

    fn single_hops(hops: &[(usize, u32)]) -> PathMap {
        PathMap::new(hops.iter().map(|&(s, q)| vec![Hop::new(s, q)]).collect()).unwrap()
    }

    #[test]
    fn test_one_qubit_per_subcircuit_is_identity() {
        let map = single_hops(&[(0, 0), (1, 0)]);
        let subcircuits = [fragment(&[0]), fragment(&[0])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0, 1]).unwrap(),
            vec![0, 1]
        );
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[1, 0]).unwrap(),
            vec![1, 0]
        );
    }

    #[test]
    fn test_single_subcircuit_inverts_order() {
        let map = single_hops(&[(0, 0), (0, 1), (0, 2)]);
        let subcircuits = [fragment(&[0, 1, 2])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0]).unwrap(),
            vec![2, 1, 0]
        );
    }

    #[test]
    fn test_local_order_comes_from_subcircuit_not_ids() {
        // Local order is [q4, q2]: q2 is local index 1 and sorts first.
        let map = single_hops(&[(0, 4), (0, 2)]);
        let subcircuits = [fragment(&[4, 2])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0]).unwrap(),
            vec![1, 0]
        );
    }

    #[test]
    fn test_only_last_hop_counts() {
        let map = PathMap::new(vec![
            vec![Hop::new(1, 0), Hop::new(0, 0)],
            vec![Hop::new(1, 1)],
            vec![Hop::new(0, 1)],
        ])
        .unwrap();
        let subcircuits = [fragment(&[0, 1]), fragment(&[0, 1])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[1, 0]).unwrap(),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_intermediate_hops_are_checked() {
        // Subcircuit 1 only carries qubit 0 before its final hop.
        let map = PathMap::new(vec![vec![Hop::new(1, 0), Hop::new(0, 0)]]).unwrap();
        let subcircuits = [fragment(&[0]), fragment(&[0])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0]),
            Err(MappingError::NotInSmartOrder(1))
        );

        let map = PathMap::new(vec![vec![Hop::new(7, 0), Hop::new(0, 0)]]).unwrap();
        assert_eq!(
            resolve_permutation(&map, &subcircuits[..1], &[0]),
            Err(MappingError::UnknownSubcircuit {
                subcircuit: 7,
                available: 1
            })
        );
    }

    #[test]
    fn test_ties_break_on_canonical_index() {
        let map = single_hops(&[(0, 0), (0, 0)]);
        let subcircuits = [fragment(&[0])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0]).unwrap(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_subcircuit_without_outputs_contributes_nothing() {
        let map = single_hops(&[(1, 0)]);
        let subcircuits = [fragment(&[0]), fragment(&[0])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0, 1]).unwrap(),
            vec![0]
        );
    }

    #[test]
    fn test_missing_from_smart_order() {
        let map = single_hops(&[(0, 0), (1, 0)]);
        let subcircuits = [fragment(&[0]), fragment(&[0])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0]),
            Err(MappingError::NotInSmartOrder(1))
        );
    }

    #[test]
    fn test_smart_order_errors() {
        let map = single_hops(&[(0, 0)]);
        let subcircuits = [fragment(&[0])];
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0, 3]),
            Err(MappingError::UnknownSubcircuit {
                subcircuit: 3,
                available: 1
            })
        );
        assert_eq!(
            resolve_permutation(&map, &subcircuits, &[0, 0]),
            Err(MappingError::DuplicateInSmartOrder(0))
        );
    }

    #[test]
    fn test_hop_errors() {
        let subcircuits = [fragment(&[0])];
        assert_eq!(
            resolve_permutation(&single_hops(&[(0, 5)]), &subcircuits, &[0]),
            Err(MappingError::LocalQubitNotFound {
                subcircuit: 0,
                qubit: QubitId(5)
            })
        );
        assert_eq!(
            resolve_permutation(&single_hops(&[(2, 0)]), &subcircuits, &[0]),
            Err(MappingError::UnknownSubcircuit {
                subcircuit: 2,
                available: 1
            })
        );
    }
}
