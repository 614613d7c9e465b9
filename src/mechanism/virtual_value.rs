//! Myersonian virtual-value functions over a score distribution.
//!
//! The upper (profit-side) function prices admission to the high-commitment
//! tier and drives rewards and slashing. The lower (cost-side) function
//! prices the opportunistic tier's ceiling. Both net out the information
//! rent implied by the empirical score distribution: the payment needed to
//! make honest reporting worthwhile at that score level.

use serde::{Deserialize, Serialize};

use super::distribution::ScoreDistribution;
use crate::consts::RENT_EPSILON;

/// Profit-side virtual value at one score, clamped at zero.
///
/// phi_u(s) = s - (1 - F(s)) / (f(s) + eps) - penalty(s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpperVirtualValue {
    /// Queried score.
    pub score: f64,
    /// Information rent (1 - F(s)) / (f(s) + eps).
    pub information_rent: f64,
    /// Adverse-selection penalty, the deviation-scaled share of the rent.
    pub adverse_selection_penalty: f64,
    /// Clamped virtual value. Realized mechanism surplus cannot be negative.
    pub virtual_value: f64,
}

/// Cost-side virtual value at one score, left unclamped.
///
/// phi_l(s) = cost(s) - s - F(s) / (f(s) + eps)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LowerVirtualValue {
    /// Queried score.
    pub score: f64,
    /// Information rent F(s) / (f(s) + eps).
    pub information_rent: f64,
    /// Crisis cost, the deviation-scaled share of the rent.
    pub crisis_cost: f64,
    /// Unclamped virtual value, negative over most of the sample range.
    pub virtual_value: f64,
}

/// Deviation of `score` from the mean in stddev units.
///
/// Collapses to zero for degenerate (zero-variance) distributions so the
/// deviation-scaled terms stay finite; that policy is part of the engine's
/// liveness contract under degenerate inputs.
fn deviation_ratio(score: f64, dist: &ScoreDistribution) -> f64 {
    if dist.is_degenerate() {
        return 0.0;
    }
    (score - dist.mean).abs() / dist.stddev
}

/// Evaluate the profit-side virtual value at `score`.
///
/// Deterministic and pure: the same distribution and score always produce
/// the same breakdown.
pub fn upper_virtual_value(
    score: f64,
    dist: &ScoreDistribution,
    adverse_selection_param: f64,
) -> UpperVirtualValue {
    let cdf = dist.cdf(score);
    let pdf = dist.pdf(score);
    let information_rent = (1.0 - cdf) / (pdf + RENT_EPSILON);
    let adverse_selection_penalty =
        adverse_selection_param * deviation_ratio(score, dist) * information_rent;
    let virtual_value = (score - information_rent - adverse_selection_penalty).max(0.0);
    UpperVirtualValue {
        score,
        information_rent,
        adverse_selection_penalty,
        virtual_value,
    }
}

/// Evaluate the cost-side virtual value at `score`.
pub fn lower_virtual_value(
    score: f64,
    dist: &ScoreDistribution,
    crisis_cost_param: f64,
) -> LowerVirtualValue {
    let cdf = dist.cdf(score);
    let pdf = dist.pdf(score);
    let information_rent = cdf / (pdf + RENT_EPSILON);
    let crisis_cost = crisis_cost_param * deviation_ratio(score, dist) * information_rent;
    let virtual_value = crisis_cost - score - information_rent;
    LowerVirtualValue {
        score,
        information_rent,
        crisis_cost,
        virtual_value,
    }
}
