//! Engine facade bundling the protocol parameters.
//!
//! Every operation is also available as a free function taking explicit
//! parameters; the facade exists so callers that hold one parameter set
//! (the common case: one protocol deployment) do not thread it through
//! every call.

use super::config::MechanismParams;
use super::credibility::update_credibility;
use super::crisis::{crisis_state, CrisisDetectionConfig, CrisisState, MarketSnapshot};
use super::crisis_spread::{optimal_crisis_spread, CrisisSpreadBreakdown, CrisisSpreadInputs};
use super::distribution::ScoreDistribution;
use super::reward::{ic_reward, marginal_ic_reward};
use super::slashing::{slashing_amount, SlashResult};
use super::threshold::{compute_tier_boundaries, TierBoundaries};
use super::tier::{allocate_tier, apply_spread_constraint, MmTier, TierDecision};
use super::virtual_value::{lower_virtual_value, upper_virtual_value, LowerVirtualValue, UpperVirtualValue};

/// Stateless mechanism engine parameterized by one protocol configuration.
///
/// Holds no market state: each call reads only its arguments, so invocations
/// for different providers can run concurrently against a shared reference.
#[derive(Debug, Clone, Default)]
pub struct MechanismEngine {
    params: MechanismParams,
    crisis_config: CrisisDetectionConfig,
}

impl MechanismEngine {
    /// Engine with the given protocol parameters and default crisis
    /// thresholds.
    pub fn new(params: MechanismParams) -> Self {
        Self {
            params,
            crisis_config: CrisisDetectionConfig::default(),
        }
    }

    /// Engine with explicit crisis thresholds.
    pub fn with_crisis_config(params: MechanismParams, crisis_config: CrisisDetectionConfig) -> Self {
        Self {
            params,
            crisis_config,
        }
    }

    /// The protocol parameters in force.
    pub fn params(&self) -> &MechanismParams {
        &self.params
    }

    /// Profit-side virtual value at `score`.
    pub fn upper_virtual_value(&self, score: f64, dist: &ScoreDistribution) -> UpperVirtualValue {
        upper_virtual_value(score, dist, self.params.adverse_selection_param)
    }

    /// Cost-side virtual value at `score`.
    pub fn lower_virtual_value(&self, score: f64, dist: &ScoreDistribution) -> LowerVirtualValue {
        lower_virtual_value(score, dist, self.params.crisis_cost_param)
    }

    /// Tier boundaries for a distribution.
    pub fn tier_boundaries(&self, dist: &ScoreDistribution) -> TierBoundaries {
        compute_tier_boundaries(dist, &self.params)
    }

    /// Allocation decision for a score against precomputed boundaries.
    pub fn allocate(&self, score: f64, boundaries: &TierBoundaries) -> TierDecision {
        allocate_tier(score, boundaries)
    }

    /// Cumulative incentive-compatible reward for a score.
    pub fn reward(&self, score: f64, dist: &ScoreDistribution) -> f64 {
        ic_reward(score, dist, &self.params)
    }

    /// Marginal reward for a score.
    pub fn marginal_reward(&self, score: f64, dist: &ScoreDistribution) -> f64 {
        marginal_ic_reward(score, dist, &self.params)
    }

    /// Crisis spread decomposition, uncapped.
    pub fn crisis_spread(&self, inputs: &CrisisSpreadInputs) -> CrisisSpreadBreakdown {
        optimal_crisis_spread(inputs, self.params.adverse_selection_param)
    }

    /// Crisis spread total, capped at the tier's limit.
    pub fn capped_crisis_spread(&self, inputs: &CrisisSpreadInputs, tier: MmTier) -> f64 {
        let breakdown = self.crisis_spread(inputs);
        apply_spread_constraint(breakdown.total_bps, tier)
    }

    /// Slash verdict for a claimed score against the verified actual score.
    pub fn slash(
        &self,
        claimed_score: f64,
        actual_score: f64,
        dist: &ScoreDistribution,
    ) -> SlashResult {
        slashing_amount(claimed_score, actual_score, dist, &self.params)
    }

    /// Posterior credibility after a verified proof outcome.
    pub fn update_credibility(&self, prior: f64, proof_outcome: f64) -> f64 {
        update_credibility(prior, proof_outcome, self.params.belief_update_weight)
    }

    /// Crisis verdict for a market snapshot.
    pub fn classify_snapshot(&self, snapshot: &MarketSnapshot) -> CrisisState {
        crisis_state(snapshot, &self.crisis_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_matches_the_free_functions() {
        let dist = ScoreDistribution::from_scores(vec![
            85.0, 90.0, 88.0, 92.0, 78.0, 95.0, 87.0, 91.0, 89.0, 93.0,
        ])
        .unwrap();
        let params = MechanismParams::default();
        let engine = MechanismEngine::new(params.clone());

        assert_eq!(
            engine.upper_virtual_value(90.0, &dist),
            upper_virtual_value(90.0, &dist, params.adverse_selection_param)
        );
        assert_eq!(engine.reward(90.0, &dist), ic_reward(90.0, &dist, &params));
        assert_eq!(
            engine.tier_boundaries(&dist),
            compute_tier_boundaries(&dist, &params)
        );
    }

    #[test]
    fn capped_spread_respects_the_tier_limit() {
        let engine = MechanismEngine::default();
        let inputs = CrisisSpreadInputs {
            base_price: 4.0,
            current_volatility: 0.9,
            normal_volatility: 0.15,
            information_advantage: 0.9,
            risk_aversion: MmTier::Martyr.default_risk_aversion(),
        };
        let uncapped = engine.crisis_spread(&inputs).total_bps;
        assert!(uncapped > 40.0);
        assert_eq!(engine.capped_crisis_spread(&inputs, MmTier::Martyr), 40.0);
        assert_eq!(
            engine.capped_crisis_spread(&inputs, MmTier::Sovereign),
            uncapped
        );
    }
}
