//! Virtual-value root finding and tier boundary construction.
//!
//! Each virtual-value function is driven to its zero crossing by bounded
//! bisection over the sample range. The two roots combine into the tier
//! boundary structure with its no-trade gap.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::MechanismParams;
use super::distribution::ScoreDistribution;
use super::virtual_value::{lower_virtual_value, upper_virtual_value};

/// Outcome of a bounded bisection search.
///
/// Non-convergence within the iteration budget is not an error: the final
/// bracket midpoint is returned as a best-effort estimate. The two cases are
/// kept distinguishable so callers and tests can assert on which one they
/// got, while the numeric contract stays identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RootEstimate {
    /// |phi(root)| dropped below the tolerance.
    Converged {
        /// Accepted root.
        root: f64,
        /// Iterations consumed before acceptance.
        iterations: usize,
    },
    /// Iteration budget exhausted; midpoint of the final bracket.
    BestEffort {
        /// Bracket midpoint after the final iteration.
        root: f64,
    },
}

impl RootEstimate {
    /// The located score, regardless of convergence.
    pub fn value(&self) -> f64 {
        match *self {
            RootEstimate::Converged { root, .. } => root,
            RootEstimate::BestEffort { root } => root,
        }
    }

    /// True when the tolerance was met within the iteration budget.
    pub fn converged(&self) -> bool {
        matches!(self, RootEstimate::Converged { .. })
    }
}

/// Locate the zero of the upper virtual value over the sample range.
///
/// Treats phi_u as non-increasing across [min, max]. For non-monotone
/// distributions the bracket may close on an arbitrary crossing; that is a
/// documented limitation of the solver, not something it corrects.
pub fn find_upper_virtual_root(
    dist: &ScoreDistribution,
    params: &MechanismParams,
) -> RootEstimate {
    let mut low = dist.min;
    let mut high = dist.max;
    for i in 0..params.max_bisection_iterations {
        let mid = (low + high) / 2.0;
        let value = upper_virtual_value(mid, dist, params.adverse_selection_param).virtual_value;
        if value.abs() < params.root_tolerance {
            debug!(root = mid, iterations = i, "upper virtual root converged");
            return RootEstimate::Converged {
                root: mid,
                iterations: i,
            };
        }
        if value > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    let root = (low + high) / 2.0;
    warn!(
        root,
        low, high, "upper virtual root did not converge, using bracket midpoint"
    );
    RootEstimate::BestEffort { root }
}

/// Locate the zero of the lower virtual value over the sample range.
///
/// Symmetric to the upper search with the comparison inverted.
pub fn find_lower_virtual_root(
    dist: &ScoreDistribution,
    params: &MechanismParams,
) -> RootEstimate {
    let mut low = dist.min;
    let mut high = dist.max;
    for i in 0..params.max_bisection_iterations {
        let mid = (low + high) / 2.0;
        let value = lower_virtual_value(mid, dist, params.crisis_cost_param).virtual_value;
        if value.abs() < params.root_tolerance {
            debug!(root = mid, iterations = i, "lower virtual root converged");
            return RootEstimate::Converged {
                root: mid,
                iterations: i,
            };
        }
        if value < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }
    let root = (low + high) / 2.0;
    warn!(
        root,
        low, high, "lower virtual root did not converge, using bracket midpoint"
    );
    RootEstimate::BestEffort { root }
}

/// Tier boundary structure, derived once per distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBoundaries {
    /// Entry threshold for the high-commitment tier, clamped to the sample
    /// minimum.
    pub martyr_minimum: f64,
    /// Ceiling for the opportunistic tier, clamped to the sample maximum.
    pub sovereign_maximum: f64,
    /// Width of the rejected score region, floored at zero.
    pub no_trade_gap_width: f64,
    /// Raw upper-virtual-value root.
    pub upper_root: RootEstimate,
    /// Raw lower-virtual-value root.
    pub lower_root: RootEstimate,
}

impl TierBoundaries {
    /// True when the roots crossed and the admission thresholds overlap.
    ///
    /// Possible for pathological (bimodal, near-uniform) distributions: the
    /// construction formula does not force martyr_minimum above
    /// sovereign_maximum. The inconsistent thresholds are preserved for
    /// numerical compatibility; allocation precedence then favors the
    /// high-commitment tier.
    pub fn is_inverted(&self) -> bool {
        self.martyr_minimum < self.sovereign_maximum
    }
}

/// Derive the tier boundary structure for a distribution.
pub fn compute_tier_boundaries(
    dist: &ScoreDistribution,
    params: &MechanismParams,
) -> TierBoundaries {
    let upper_root = find_upper_virtual_root(dist, params);
    let lower_root = find_lower_virtual_root(dist, params);
    let boundaries = TierBoundaries {
        martyr_minimum: dist.min.max(upper_root.value()),
        sovereign_maximum: dist.max.min(lower_root.value()),
        no_trade_gap_width: (upper_root.value() - lower_root.value()).max(0.0),
        upper_root,
        lower_root,
    };
    if boundaries.is_inverted() {
        warn!(
            martyr_minimum = boundaries.martyr_minimum,
            sovereign_maximum = boundaries.sovereign_maximum,
            "tier thresholds overlap, virtual-value roots crossed"
        );
    }
    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_distribution() -> ScoreDistribution {
        ScoreDistribution::from_scores(vec![
            85.0, 90.0, 88.0, 92.0, 78.0, 95.0, 87.0, 91.0, 89.0, 93.0,
        ])
        .unwrap()
    }

    #[test]
    fn roots_stay_within_sample_range() {
        let dist = reference_distribution();
        let params = MechanismParams::default();
        let upper = find_upper_virtual_root(&dist, &params);
        let lower = find_lower_virtual_root(&dist, &params);
        assert!(upper.value() >= dist.min && upper.value() <= dist.max);
        assert!(lower.value() >= dist.min && lower.value() <= dist.max);
    }

    #[test]
    fn boundaries_are_clamped_to_sample_range() {
        let dist = reference_distribution();
        let boundaries = compute_tier_boundaries(&dist, &MechanismParams::default());
        assert!(boundaries.martyr_minimum >= dist.min);
        assert!(boundaries.sovereign_maximum <= dist.max);
        assert!(boundaries.no_trade_gap_width >= 0.0);
    }

    #[test]
    fn exhausted_budget_returns_bracket_midpoint() {
        let dist = reference_distribution();
        let params = MechanismParams {
            max_bisection_iterations: 0,
            ..Default::default()
        };
        let upper = find_upper_virtual_root(&dist, &params);
        assert!(!upper.converged());
        assert_eq!(upper.value(), (dist.min + dist.max) / 2.0);
        let lower = find_lower_virtual_root(&dist, &params);
        assert!(!lower.converged());
        assert_eq!(lower.value(), (dist.min + dist.max) / 2.0);
    }

    #[test]
    fn clamping_holds_even_without_convergence() {
        let dist = reference_distribution();
        let params = MechanismParams {
            max_bisection_iterations: 0,
            ..Default::default()
        };
        let boundaries = compute_tier_boundaries(&dist, &params);
        assert!(boundaries.martyr_minimum >= dist.min);
        assert!(boundaries.sovereign_maximum <= dist.max);
        // Both roots collapse to the same midpoint, so the gap is zero and
        // the thresholds coincide.
        assert_eq!(boundaries.no_trade_gap_width, 0.0);
        assert!(!boundaries.is_inverted());
    }

    #[test]
    fn root_estimate_accessors() {
        let converged = RootEstimate::Converged {
            root: 91.0,
            iterations: 12,
        };
        assert!(converged.converged());
        assert_eq!(converged.value(), 91.0);

        let best_effort = RootEstimate::BestEffort { root: 86.5 };
        assert!(!best_effort.converged());
        assert_eq!(best_effort.value(), 86.5);
    }

    #[test]
    fn crossed_roots_are_preserved_not_repaired() {
        // Synthetic boundary structure with the roots crossed, as a
        // pathological distribution can produce. Construction keeps the
        // overlapping thresholds and only flags them.
        let boundaries = TierBoundaries {
            martyr_minimum: 80.0,
            sovereign_maximum: 90.0,
            no_trade_gap_width: 0.0,
            upper_root: RootEstimate::BestEffort { root: 80.0 },
            lower_root: RootEstimate::BestEffort { root: 90.0 },
        };
        assert!(boundaries.is_inverted());
    }
}
