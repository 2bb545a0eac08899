//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use knit_ir::StandardGate;

/// 2x2 unitary in row-major order.
type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Ordering of qubits inside a basis-state index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Qubit 0 is the least significant bit.
    LittleEndian,
    /// Qubit 0 is the most significant bit.
    #[default]
    BigEndian,
}

/// A statevector over `num_qubits` qubits.
///
/// Qubits are addressed by arena slot; slot `i` is bit `i` of an amplitude
/// index.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![ZERO; size];
        amplitudes[0] = ONE;
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Measurement probabilities of every basis state in the requested order.
    pub fn probabilities(&self, order: BitOrder) -> Vec<f64> {
        match order {
            BitOrder::LittleEndian => self.amplitudes.iter().map(|a| a.norm_sqr()).collect(),
            BitOrder::BigEndian => {
                let mut probs = vec![0.0; self.amplitudes.len()];
                for (i, amp) in self.amplitudes.iter().enumerate() {
                    probs[reverse_bits(i, self.num_qubits)] = amp.norm_sqr();
                }
                probs
            }
        }
    }

    /// Apply a standard gate to the given slots.
    pub fn apply_gate(&mut self, gate: &StandardGate, slots: &[usize]) {
        match *gate {
            StandardGate::I => {}
            StandardGate::X => self.apply_matrix(slots[0], 0, &pauli_x()),
            StandardGate::Y => self.apply_matrix(slots[0], 0, &pauli_y()),
            StandardGate::Z => self.apply_matrix(slots[0], 0, &phase(PI)),
            StandardGate::H => self.apply_matrix(slots[0], 0, &hadamard()),
            StandardGate::S => self.apply_matrix(slots[0], 0, &phase(PI / 2.0)),
            StandardGate::Sdg => self.apply_matrix(slots[0], 0, &phase(-PI / 2.0)),
            StandardGate::T => self.apply_matrix(slots[0], 0, &phase(PI / 4.0)),
            StandardGate::Tdg => self.apply_matrix(slots[0], 0, &phase(-PI / 4.0)),
            StandardGate::SX => self.apply_matrix(slots[0], 0, &rx(PI / 2.0)),
            StandardGate::SXdg => self.apply_matrix(slots[0], 0, &rx(-PI / 2.0)),
            StandardGate::Rx(theta) => self.apply_matrix(slots[0], 0, &rx(theta)),
            StandardGate::Ry(theta) => self.apply_matrix(slots[0], 0, &ry(theta)),
            StandardGate::Rz(theta) => self.apply_matrix(slots[0], 0, &rz(theta)),
            StandardGate::P(theta) => self.apply_matrix(slots[0], 0, &phase(theta)),
            StandardGate::U(theta, phi, lambda) => {
                self.apply_matrix(slots[0], 0, &u3(theta, phi, lambda));
            }

            StandardGate::CX => self.apply_matrix(slots[1], mask(slots[0]), &pauli_x()),
            StandardGate::CY => self.apply_matrix(slots[1], mask(slots[0]), &pauli_y()),
            StandardGate::CZ => self.apply_matrix(slots[1], mask(slots[0]), &phase(PI)),
            StandardGate::CH => self.apply_matrix(slots[1], mask(slots[0]), &hadamard()),
            StandardGate::CRz(theta) => self.apply_matrix(slots[1], mask(slots[0]), &rz(theta)),
            StandardGate::CP(theta) => self.apply_matrix(slots[1], mask(slots[0]), &phase(theta)),
            StandardGate::Swap => self.apply_swap(slots[0], slots[1], 0, ONE),
            StandardGate::ISwap => self.apply_swap(slots[0], slots[1], 0, I),

            StandardGate::CCX => {
                self.apply_matrix(slots[2], mask(slots[0]) | mask(slots[1]), &pauli_x());
            }
            StandardGate::CSwap => self.apply_swap(slots[1], slots[2], mask(slots[0]), ONE),
        }
    }

    /// Apply `m` to `target` on every basis state where all `controls` bits are set.
    fn apply_matrix(&mut self, target: usize, controls: usize, m: &Matrix2) {
        let tgt_mask = mask(target);
        for i in 0..self.amplitudes.len() {
            if i & tgt_mask == 0 && i & controls == controls {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    /// Exchange |10⟩ and |01⟩ on (q1, q2), multiplying both by `factor`.
    fn apply_swap(&mut self, q1: usize, q2: usize, controls: usize, factor: Complex64) {
        let mask1 = mask(q1);
        let mask2 = mask(q2);
        for i in 0..self.amplitudes.len() {
            if i & controls == controls && i & mask1 != 0 && i & mask2 == 0 {
                let j = (i & !mask1) | mask2;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = factor * self.amplitudes[j];
                self.amplitudes[j] = factor * tmp;
            }
        }
    }
}

#[inline]
fn mask(slot: usize) -> usize {
    1 << slot
}

/// Reverse the low `width` bits of `index`.
#[inline]
pub(crate) fn reverse_bits(index: usize, width: usize) -> usize {
    if width == 0 {
        return index;
    }
    index.reverse_bits() >> (usize::BITS as usize - width)
}

fn pauli_x() -> Matrix2 {
    [[ZERO, ONE], [ONE, ZERO]]
}

fn pauli_y() -> Matrix2 {
    [[ZERO, -I], [I, ZERO]]
}

fn hadamard() -> Matrix2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

fn phase(theta: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]]
}

fn rx(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
    [[c, neg_i_s], [neg_i_s, c]]
}

fn ry(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    [[c, -s], [s, c]]
}

fn rz(theta: f64) -> Matrix2 {
    [
        [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
        [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

fn u3(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [Complex64::new(c, 0.0), -Complex64::from_polar(s, lambda)],
        [
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lambda),
        ],
    ]
}
