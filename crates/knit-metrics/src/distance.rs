//! Distances between a target (ground-truth) and an observed distribution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MetricError, MetricResult, check_finite};

/// Bins closer than this contribute nothing to chi-squared.
const CHI2_EPSILON: f64 = 1e-10;

/// Floor applied to observed probabilities before taking a logarithm.
const LOG_FLOOR: f64 = 1e-16;

/// The metrics reported for every verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Chi-squared distance.
    Chi2,
    /// Mean squared error.
    MeanSquaredError,
    /// Mean absolute percentage error.
    MeanAbsolutePercentageError,
    /// Cross entropy of the observation under the target.
    CrossEntropy,
    /// Histogram overlap probability.
    Hop,
}

impl MetricKind {
    /// Every metric, in reporting order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Chi2,
        MetricKind::MeanSquaredError,
        MetricKind::MeanAbsolutePercentageError,
        MetricKind::CrossEntropy,
        MetricKind::Hop,
    ];

    /// Report key of this metric.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::Chi2 => "chi2",
            MetricKind::MeanSquaredError => "Mean Squared Error",
            MetricKind::MeanAbsolutePercentageError => "Mean Absolute Percentage Error",
            MetricKind::CrossEntropy => "Cross Entropy",
            MetricKind::Hop => "HOP",
        }
    }

    /// Evaluate this metric.
    pub fn compute(&self, target: &[f64], obs: &[f64]) -> MetricResult<f64> {
        check_pair(target, obs)?;
        Ok(match self {
            MetricKind::Chi2 => chi2_distance(target, obs),
            MetricKind::MeanSquaredError => mean_squared_error(target, obs),
            MetricKind::MeanAbsolutePercentageError => mean_absolute_percentage_error(target, obs),
            MetricKind::CrossEntropy => cross_entropy(target, obs),
            MetricKind::Hop => histogram_overlap(target, obs),
        })
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn check_pair(target: &[f64], obs: &[f64]) -> MetricResult<()> {
    if target.len() != obs.len() {
        return Err(MetricError::LengthMismatch {
            target: target.len(),
            observed: obs.len(),
        });
    }
    if target.is_empty() {
        return Err(MetricError::Empty);
    }
    check_finite(target)?;
    check_finite(obs)
}

fn chi2_distance(target: &[f64], obs: &[f64]) -> f64 {
    target
        .iter()
        .zip(obs)
        .map(|(&t, &o)| (t, o.abs()))
        .filter(|(t, o)| (t - o).abs() > CHI2_EPSILON)
        .map(|(t, o)| (t - o).powi(2) / (t + o))
        .sum()
}

fn mean_squared_error(target: &[f64], obs: &[f64]) -> f64 {
    let sum: f64 = target.iter().zip(obs).map(|(t, o)| (t - o).powi(2)).sum();
    sum / target.len() as f64
}

/// Bins with zero target probability are skipped.
fn mean_absolute_percentage_error(target: &[f64], obs: &[f64]) -> f64 {
    let (sum, count) = target
        .iter()
        .zip(obs)
        .filter(|(t, _)| **t != 0.0)
        .fold((0.0, 0usize), |(sum, count), (t, o)| {
            (sum + ((t - o) / t).abs(), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        100.0 * sum / count as f64
    }
}

fn cross_entropy(target: &[f64], obs: &[f64]) -> f64 {
    target
        .iter()
        .zip(obs)
        .map(|(&t, &o)| -t * o.max(LOG_FLOOR).ln())
        .sum()
}

fn histogram_overlap(target: &[f64], obs: &[f64]) -> f64 {
    target.iter().zip(obs).map(|(&t, &o)| t.min(o)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: [f64; 4] = [0.5, 0.0, 0.0, 0.5];
    const OBSERVED: [f64; 4] = [0.5, 0.5, 0.0, 0.0];

    #[test]
    fn test_identical_distributions() {
        let p = [0.25, 0.25, 0.5, 0.0];
        assert_eq!(MetricKind::Chi2.compute(&p, &p).unwrap(), 0.0);
        assert_eq!(MetricKind::MeanSquaredError.compute(&p, &p).unwrap(), 0.0);
        assert_eq!(
            MetricKind::MeanAbsolutePercentageError
                .compute(&p, &p)
                .unwrap(),
            0.0
        );
        assert!((MetricKind::Hop.compute(&p, &p).unwrap() - 1.0).abs() < 1e-12);

        // Equals the Shannon entropy of p.
        let entropy = -(0.5 * 0.25_f64.ln() + 0.5 * 0.5_f64.ln());
        assert!((MetricKind::CrossEntropy.compute(&p, &p).unwrap() - entropy).abs() < 1e-12);
    }

    #[test]
    fn test_chi2_lost_correlation() {
        let chi2 = MetricKind::Chi2.compute(&TARGET, &OBSERVED).unwrap();
        assert!((chi2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mse_and_mape() {
        let mse = MetricKind::MeanSquaredError
            .compute(&TARGET, &OBSERVED)
            .unwrap();
        assert!((mse - 0.125).abs() < 1e-12);

        // Only bins 0 and 3 have target mass: errors 0% and 100%.
        let mape = MetricKind::MeanAbsolutePercentageError
            .compute(&TARGET, &OBSERVED)
            .unwrap();
        assert!((mape - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_entropy_floors_zero_bins() {
        let ce = MetricKind::CrossEntropy.compute(&TARGET, &OBSERVED).unwrap();
        let expected = -0.5 * 0.5_f64.ln() - 0.5 * LOG_FLOOR.ln();
        assert!(ce.is_finite());
        assert!((ce - expected).abs() < 1e-9);
    }

    #[test]
    fn test_hop_partial_overlap() {
        let hop = MetricKind::Hop.compute(&TARGET, &OBSERVED).unwrap();
        assert!((hop - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_input_validation() {
        assert_eq!(
            MetricKind::Chi2.compute(&[0.5, 0.5], &[1.0]),
            Err(MetricError::LengthMismatch {
                target: 2,
                observed: 1
            })
        );
        assert_eq!(MetricKind::Hop.compute(&[], &[]), Err(MetricError::Empty));
        assert!(matches!(
            MetricKind::MeanSquaredError.compute(&[1.0], &[f64::INFINITY]),
            Err(MetricError::NonFinite { index: 0, .. })
        ));
    }

    #[test]
    fn test_keys() {
        let keys: Vec<_> = MetricKind::ALL.iter().map(MetricKind::key).collect();
        assert_eq!(
            keys,
            [
                "chi2",
                "Mean Squared Error",
                "Mean Absolute Percentage Error",
                "Cross Entropy",
                "HOP"
            ]
        );
    }
}
