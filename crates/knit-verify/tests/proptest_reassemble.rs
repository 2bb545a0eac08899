//! Property-based tests for qubit reordering.

use knit_ir::{Circuit, Qubit, QubitId};
use knit_verify::{Hop, PathMap, reassemble, resolve_permutation};
use proptest::prelude::*;

/// A width in 1..=6 together with a permutation of its qubits.
fn arb_permutation() -> impl Strategy<Value = Vec<usize>> {
    (1_usize..=6).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

/// A permutation together with a distribution of matching length.
fn arb_case() -> impl Strategy<Value = (Vec<usize>, Vec<f64>)> {
    arb_permutation().prop_flat_map(|perm| {
        let len = 1_usize << perm.len();
        (Just(perm), prop::collection::vec(-1.0_f64..1.0, len))
    })
}

/// Split `n` qubits into fragments, give each fragment a shuffled local
/// order, and pick a shuffled smart order.
fn arb_cut() -> impl Strategy<Value = (usize, Vec<usize>, Vec<Vec<u32>>, Vec<usize>)> {
    (1_usize..=6)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(0_usize..3, n)))
        .prop_flat_map(|(n, owner)| {
            let mut locals: Vec<Vec<u32>> = vec![vec![]; 3];
            for (q, &frag) in owner.iter().enumerate() {
                locals[frag].push(q as u32);
            }
            let shuffled: Vec<_> = locals.into_iter().map(|l| Just(l).prop_shuffle()).collect();
            (
                Just(n),
                Just(owner),
                shuffled,
                Just(vec![0_usize, 1, 2]).prop_shuffle(),
            )
        })
}

proptest! {
    #[test]
    fn prop_reassemble_is_a_relabeling((perm, values) in arb_case()) {
        let out = reassemble(&values, &perm).unwrap();

        let mut before = values.clone();
        let mut after = out.clone();
        before.sort_by(f64::total_cmp);
        after.sort_by(f64::total_cmp);
        prop_assert_eq!(before, after);

        let mass_in: f64 = values.iter().sum();
        let mass_out: f64 = out.iter().sum();
        prop_assert!((mass_in - mass_out).abs() < 1e-9);
    }

    #[test]
    fn prop_identity_permutation_is_a_no_op(
        values in (0_usize..=6).prop_flat_map(|n| prop::collection::vec(0.0_f64..1.0, 1_usize << n))
    ) {
        let n = values.len().trailing_zeros() as usize;
        let identity: Vec<usize> = (0..n).collect();
        prop_assert_eq!(reassemble(&values, &identity).unwrap(), values);
    }

    #[test]
    fn prop_every_slot_written_once((perm, _) in arb_case()) {
        // Distinct markers: each output slot must receive exactly one.
        let len = 1_usize << perm.len();
        let markers: Vec<f64> = (1..=len).map(|i| i as f64).collect();
        let out = reassemble(&markers, &perm).unwrap();
        prop_assert!(out.iter().all(|&v| v >= 1.0));
    }

    #[test]
    fn prop_resolved_order_is_a_permutation((n, owner, locals, smart_order) in arb_cut()) {
        let subcircuits: Vec<Circuit> = locals
            .iter()
            .map(|ids| Circuit::from_qubits("frag", ids.iter().map(|&i| Qubit::new(QubitId(i)))).unwrap())
            .collect();
        // Local qubit ids reuse the full-circuit index, so the hop is direct.
        let path_map = PathMap::new(
            (0..n).map(|q| vec![Hop::new(owner[q], q as u32)]).collect()
        ).unwrap();

        let mut perm = resolve_permutation(&path_map, &subcircuits, &smart_order).unwrap();
        prop_assert_eq!(perm.len(), n);
        perm.sort_unstable();
        prop_assert_eq!(perm, (0..n).collect::<Vec<_>>());
    }
}
