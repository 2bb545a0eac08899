//! Quasi-probability to probability projection.
//!
//! Reconstruction from cut subcircuits yields quasi-probabilities: entries
//! may be negative and the total need not be one. Both modes return a
//! vector that is non-negative and sums to one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{MetricError, MetricResult, check_finite};

/// How negative quasi-probabilities are corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuasiConversionMode {
    /// Closest probability vector in the 2-norm.
    Nearest,
    /// Clip negatives to zero and renormalize.
    Naive,
}

impl QuasiConversionMode {
    /// Every mode, in reporting order.
    pub const ALL: [QuasiConversionMode; 2] =
        [QuasiConversionMode::Nearest, QuasiConversionMode::Naive];

    /// Report key of this mode.
    pub fn key(&self) -> &'static str {
        match self {
            QuasiConversionMode::Nearest => "nearest",
            QuasiConversionMode::Naive => "naive",
        }
    }
}

impl fmt::Display for QuasiConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Project `quasi` onto a valid probability vector.
pub fn quasi_to_real(quasi: &[f64], mode: QuasiConversionMode) -> MetricResult<Vec<f64>> {
    if quasi.is_empty() {
        return Err(MetricError::Empty);
    }
    check_finite(quasi)?;

    match mode {
        QuasiConversionMode::Naive => naive(quasi),
        QuasiConversionMode::Nearest => nearest(quasi),
    }
}

fn naive(quasi: &[f64]) -> MetricResult<Vec<f64>> {
    let clipped: Vec<f64> = quasi.iter().map(|&p| p.max(0.0)).collect();
    let total: f64 = clipped.iter().sum();
    if total <= 0.0 {
        return Err(MetricError::ZeroMass(quasi.iter().sum()));
    }
    Ok(clipped.into_iter().map(|p| p / total).collect())
}

/// Smolin, Gambetta & Smith (PRL 108, 070502): after rescaling to unit mass,
/// walk entries from smallest upward, zeroing each one that would stay
/// negative and spreading its deficit evenly over the entries still standing.
fn nearest(quasi: &[f64]) -> MetricResult<Vec<f64>> {
    let total: f64 = quasi.iter().sum();
    if total <= 0.0 {
        return Err(MetricError::ZeroMass(total));
    }

    let mut order: Vec<usize> = (0..quasi.len()).collect();
    order.sort_by(|&a, &b| {
        quasi[a]
            .partial_cmp(&quasi[b])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut projected = vec![0.0; quasi.len()];
    let mut remaining = quasi.len() as f64;
    let mut beta = 0.0;
    for index in order {
        let value = quasi[index] / total;
        if value + beta / remaining < 0.0 {
            beta += value;
            remaining -= 1.0;
        } else {
            projected[index] = value + beta / remaining;
        }
    }
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_valid_distribution_unchanged() {
        let p = [0.1, 0.2, 0.3, 0.4];
        for mode in QuasiConversionMode::ALL {
            assert_close(&quasi_to_real(&p, mode).unwrap(), &p);
        }
    }

    #[test]
    fn test_naive_clips_and_renormalizes() {
        let q = [0.6, -0.2, 0.6, 0.0];
        assert_close(
            &quasi_to_real(&q, QuasiConversionMode::Naive).unwrap(),
            &[0.5, 0.0, 0.5, 0.0],
        );
    }

    #[test]
    fn test_nearest_spreads_deficit() {
        // Already unit mass: the -0.1 is zeroed and 0.1 taken evenly from the rest.
        let q = [0.5, -0.1, 0.3, 0.3];
        assert_close(
            &quasi_to_real(&q, QuasiConversionMode::Nearest).unwrap(),
            &[0.5 - 0.1 / 3.0, 0.0, 0.3 - 0.1 / 3.0, 0.3 - 0.1 / 3.0],
        );
    }

    #[test]
    fn test_nearest_rescales_mass() {
        let q = [1.0, 1.0];
        assert_close(
            &quasi_to_real(&q, QuasiConversionMode::Nearest).unwrap(),
            &[0.5, 0.5],
        );
    }

    #[test]
    fn test_zero_mass_rejected() {
        for mode in QuasiConversionMode::ALL {
            assert!(matches!(
                quasi_to_real(&[0.0, -1.0], mode),
                Err(MetricError::ZeroMass(_))
            ));
        }
    }

    #[test]
    fn test_empty_and_nan_rejected() {
        assert_eq!(
            quasi_to_real(&[], QuasiConversionMode::Naive),
            Err(MetricError::Empty)
        );
        assert!(matches!(
            quasi_to_real(&[0.5, f64::NAN], QuasiConversionMode::Nearest),
            Err(MetricError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(QuasiConversionMode::Nearest.key(), "nearest");
        assert_eq!(QuasiConversionMode::Naive.to_string(), "naive");
        assert_eq!(
            serde_json::to_string(&QuasiConversionMode::Nearest).unwrap(),
            "\"nearest\""
        );
    }

    proptest! {
        #[test]
        fn prop_projection_is_a_distribution(
            quasi in prop::collection::vec(-0.5_f64..1.0, 1..32),
            naive_mode in any::<bool>(),
        ) {
            prop_assume!(quasi.iter().sum::<f64>() > 1e-3);
            prop_assume!(quasi.iter().any(|&p| p > 1e-3));
            let mode = if naive_mode {
                QuasiConversionMode::Naive
            } else {
                QuasiConversionMode::Nearest
            };
            let projected = quasi_to_real(&quasi, mode).unwrap();
            prop_assert!(projected.iter().all(|&p| p >= 0.0));
            prop_assert!((projected.iter().sum::<f64>() - 1.0).abs() < 1e-6);
        }
    }
}
