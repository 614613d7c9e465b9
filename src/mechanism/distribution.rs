//! Empirical distribution estimation over historical performance scores.
//!
//! Estimators here are tuned for small samples of bounded percentage-like
//! scores (0-100). Queries outside the sample range are extrapolations and
//! carry reduced confidence.

use serde::{Deserialize, Serialize};

use crate::consts::{BANDWIDTH_EPSILON, EMPTY_SET_DENSITY, HAZARD_CEILING, SURVIVAL_FLOOR};
use crate::errors::{MechanismError, Result};

/// Fraction of samples at or below `point`.
///
/// An empty sample set yields 0 (the denominator is treated as 1).
pub fn empirical_cdf(scores: &[f64], point: f64) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let below = scores.iter().filter(|&&s| s <= point).count();
    below as f64 / scores.len() as f64
}

/// Gaussian kernel density estimate at `point`.
///
/// When `bandwidth` is `None`, Scott's rule is used: h = n^(-1/5) * sigma,
/// plus [`BANDWIDTH_EPSILON`] to keep the bandwidth positive on low-variance
/// samples. An empty sample set yields the fixed [`EMPTY_SET_DENSITY`].
pub fn estimate_pdf(scores: &[f64], point: f64, bandwidth: Option<f64>) -> f64 {
    if scores.is_empty() {
        return EMPTY_SET_DENSITY;
    }
    let n = scores.len() as f64;
    let h = bandwidth.unwrap_or_else(|| n.powf(-0.2) * stddev(scores) + BANDWIDTH_EPSILON);
    let norm = h * (2.0 * std::f64::consts::PI).sqrt();

    let kernel_sum: f64 = scores
        .iter()
        .map(|s| {
            let z = (point - s) / h;
            (-0.5 * z * z).exp() / norm
        })
        .sum();
    kernel_sum / n
}

/// Hazard rate f(point) / (1 - F(point)).
///
/// Once survival drops below [`SURVIVAL_FLOOR`] the rate saturates at
/// [`HAZARD_CEILING`] instead of dividing by a near-zero denominator.
pub fn hazard_rate(scores: &[f64], point: f64) -> f64 {
    let survival = 1.0 - empirical_cdf(scores, point);
    if survival < SURVIVAL_FLOOR {
        return HAZARD_CEILING;
    }
    estimate_pdf(scores, point, None) / survival
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Population standard deviation.
fn stddev(scores: &[f64]) -> f64 {
    let m = mean(scores);
    let variance = scores.iter().map(|s| (s - m).powi(2)).sum::<f64>() / scores.len() as f64;
    variance.sqrt()
}

/// Immutable snapshot of a provider's (or a tier's) historical score record.
///
/// Summary statistics are computed once at construction from the same sample
/// set. The raw samples are retained in their supplied order so that
/// kernel-density sums reproduce exactly. Instances are never mutated; a new
/// scoring epoch rebuilds from the updated record, so concurrent readers
/// never observe a partially updated sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    /// Historical scores, in the order supplied.
    scores: Vec<f64>,
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub stddev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl ScoreDistribution {
    /// Build a distribution from historical scores.
    ///
    /// The empty sample set is the one construction failure this engine does
    /// not paper over with a fallback: every downstream formula assumes at
    /// least one observation, and the guard belongs here rather than at each
    /// call site.
    pub fn from_scores(scores: Vec<f64>) -> Result<Self> {
        if scores.is_empty() {
            return Err(MechanismError::EmptySamples);
        }
        let mean = mean(&scores);
        let stddev = stddev(&scores);
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            scores,
            mean,
            stddev,
            min,
            max,
        })
    }

    /// Raw samples backing this snapshot.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Always false: construction rejects the empty sample set.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// True when all samples are identical (zero variance).
    ///
    /// Degenerate distributions are legal. Deviation-scaled terms treat the
    /// deviation ratio as zero for them instead of dividing by the zero
    /// stddev.
    pub fn is_degenerate(&self) -> bool {
        self.stddev == 0.0
    }

    /// Empirical CDF at `point`.
    pub fn cdf(&self, point: f64) -> f64 {
        empirical_cdf(&self.scores, point)
    }

    /// Kernel density estimate at `point` with the Scott's-rule bandwidth.
    pub fn pdf(&self, point: f64) -> f64 {
        estimate_pdf(&self.scores, point, None)
    }

    /// Hazard rate at `point`.
    pub fn hazard(&self, point: f64) -> f64 {
        hazard_rate(&self.scores, point)
    }
}
