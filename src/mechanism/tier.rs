//! Provider tiers and the optimal allocation rule.

use serde::{Deserialize, Serialize};

use super::threshold::TierBoundaries;

/// Commitment tier a provider can be admitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MmTier {
    /// High-commitment provider, obligated to quote through a crisis.
    Martyr,
    /// Fair-weather provider.
    Citizen,
    /// Opportunistic provider, free to widen or withdraw.
    Sovereign,
}

impl MmTier {
    /// Spread cap in basis points, `None` for uncapped.
    ///
    /// Exhaustive over the tier set: adding or removing a tier forces a cap
    /// decision here at compile time.
    pub fn spread_cap_bps(self) -> Option<f64> {
        match self {
            MmTier::Martyr => Some(40.0),
            MmTier::Citizen => Some(100.0),
            MmTier::Sovereign => None,
        }
    }

    /// Conventional risk-aversion coefficient used in crisis spread pricing.
    ///
    /// The committed tier prices closest to risk-neutral; the opportunistic
    /// tier charges the most for bearing crisis inventory.
    pub fn default_risk_aversion(self) -> f64 {
        match self {
            MmTier::Martyr => 0.5,
            MmTier::Citizen => 1.0,
            MmTier::Sovereign => 2.0,
        }
    }
}

/// Gating outcome for a scored provider.
///
/// Rejection is a decision, not a tier: the score fell in the no-trade gap
/// where admission is unprofitable at either extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierDecision {
    /// Admitted into the given tier.
    Admit(MmTier),
    /// Score lies in the no-trade gap.
    Reject,
}

/// Optimal allocation rule.
///
/// Boundary scores are admitted on both sides (>= and <=, not strict). The
/// high-commitment check runs first, which also fixes the precedence when
/// thresholds overlap on pathological distributions.
pub fn allocate_tier(score: f64, boundaries: &TierBoundaries) -> TierDecision {
    if score >= boundaries.martyr_minimum {
        TierDecision::Admit(MmTier::Martyr)
    } else if score <= boundaries.sovereign_maximum {
        TierDecision::Admit(MmTier::Sovereign)
    } else {
        TierDecision::Reject
    }
}

/// Cap a computed spread at the tier's limit.
///
/// A plain minimum, never a rescale: spreads under the cap pass through
/// unchanged.
pub fn apply_spread_constraint(spread_bps: f64, tier: MmTier) -> f64 {
    match tier.spread_cap_bps() {
        Some(cap) => spread_bps.min(cap),
        None => spread_bps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanism::threshold::RootEstimate;

    fn boundaries(martyr_minimum: f64, sovereign_maximum: f64) -> TierBoundaries {
        TierBoundaries {
            martyr_minimum,
            sovereign_maximum,
            no_trade_gap_width: (martyr_minimum - sovereign_maximum).max(0.0),
            upper_root: RootEstimate::Converged {
                root: martyr_minimum,
                iterations: 1,
            },
            lower_root: RootEstimate::Converged {
                root: sovereign_maximum,
                iterations: 1,
            },
        }
    }

    #[test]
    fn boundary_scores_are_admitted() {
        let b = boundaries(92.0, 82.0);
        assert_eq!(allocate_tier(92.0, &b), TierDecision::Admit(MmTier::Martyr));
        assert_eq!(
            allocate_tier(82.0, &b),
            TierDecision::Admit(MmTier::Sovereign)
        );
    }

    #[test]
    fn gap_scores_are_rejected() {
        let b = boundaries(92.0, 82.0);
        assert_eq!(allocate_tier(87.0, &b), TierDecision::Reject);
        assert_eq!(allocate_tier(82.001, &b), TierDecision::Reject);
        assert_eq!(allocate_tier(91.999, &b), TierDecision::Reject);
    }

    #[test]
    fn extremes_classify_cleanly() {
        let b = boundaries(92.0, 82.0);
        assert_eq!(allocate_tier(99.0, &b), TierDecision::Admit(MmTier::Martyr));
        assert_eq!(
            allocate_tier(50.0, &b),
            TierDecision::Admit(MmTier::Sovereign)
        );
    }

    #[test]
    fn inverted_thresholds_favor_the_committed_tier() {
        // Crossed roots leave an overlapping admission region; the first
        // check wins there.
        let b = boundaries(80.0, 90.0);
        assert!(b.is_inverted());
        assert_eq!(allocate_tier(85.0, &b), TierDecision::Admit(MmTier::Martyr));
        assert_eq!(
            allocate_tier(79.0, &b),
            TierDecision::Admit(MmTier::Sovereign)
        );
    }

    #[test]
    fn spread_caps_by_tier() {
        assert_eq!(apply_spread_constraint(250.0, MmTier::Martyr), 40.0);
        assert_eq!(apply_spread_constraint(250.0, MmTier::Citizen), 100.0);
        assert_eq!(apply_spread_constraint(250.0, MmTier::Sovereign), 250.0);
    }

    #[test]
    fn spreads_under_the_cap_pass_through() {
        assert_eq!(apply_spread_constraint(25.0, MmTier::Martyr), 25.0);
        assert_eq!(apply_spread_constraint(99.0, MmTier::Citizen), 99.0);
    }

    #[test]
    fn risk_aversion_orders_the_tiers() {
        assert!(
            MmTier::Martyr.default_risk_aversion() < MmTier::Citizen.default_risk_aversion()
        );
        assert!(
            MmTier::Citizen.default_risk_aversion() < MmTier::Sovereign.default_risk_aversion()
        );
    }
}
