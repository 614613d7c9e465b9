//! Crisis spread decomposition.
//!
//! During a stress period the quoted bid/ask spread decomposes into a
//! monopoly-profit component, priced off the provider's information
//! advantage, and an adverse-selection component scaled by the volatility
//! regime. The engine consumes already-computed volatility figures; it never
//! measures the market itself.

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_SPREAD_BPS, BPS_PER_UNIT, LOG_EPSILON, MIN_NORMAL_VOLATILITY};

/// Market conditions and provider posture feeding the spread decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrisisSpreadInputs {
    /// Mid price the spread is quoted around. Must be positive.
    pub base_price: f64,
    /// Realized volatility during the stress period. Must be positive.
    pub current_volatility: f64,
    /// Volatility under normal conditions. A zero figure is substituted with
    /// [`MIN_NORMAL_VOLATILITY`].
    pub normal_volatility: f64,
    /// Provider information advantage, in [0, 1].
    pub information_advantage: f64,
    /// Risk-aversion multiplier, conventionally the tier coefficient.
    pub risk_aversion: f64,
}

/// Spread decomposition in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrisisSpreadBreakdown {
    /// Resting spread under normal conditions.
    pub base_spread_bps: f64,
    /// Monopoly-profit component.
    pub monopoly_bps: f64,
    /// Adverse-selection component.
    pub adverse_selection_bps: f64,
    /// Total crisis spread.
    pub total_bps: f64,
    /// current / normal volatility ratio applied to the adverse-selection
    /// term.
    pub volatility_multiplier: f64,
}

/// Decompose the optimal crisis spread for the given conditions.
///
/// The monopoly term grows as the information advantage approaches 1 and the
/// log argument approaches zero from above, held off the asymptote by
/// [`LOG_EPSILON`]. The adverse-selection term grows linearly in the
/// volatility ratio and shrinks as the advantage rises: an informed provider
/// has less to fear from the flow.
pub fn optimal_crisis_spread(
    inputs: &CrisisSpreadInputs,
    adverse_selection_param: f64,
) -> CrisisSpreadBreakdown {
    let normal_volatility = if inputs.normal_volatility == 0.0 {
        MIN_NORMAL_VOLATILITY
    } else {
        inputs.normal_volatility
    };
    let volatility_multiplier = inputs.current_volatility / normal_volatility;

    let monopoly = 2.0
        * inputs.current_volatility.sqrt()
        * (2.0 / std::f64::consts::PI).sqrt()
        * (-(1.0 - inputs.information_advantage + LOG_EPSILON).ln())
            .max(0.0)
            .sqrt();

    let adverse_selection = volatility_multiplier
        * adverse_selection_param
        * (1.0 - inputs.information_advantage)
        * inputs.risk_aversion;

    let total_dollars = (monopoly + adverse_selection) * inputs.base_price.sqrt();
    let total_bps = total_dollars / inputs.base_price * BPS_PER_UNIT;

    CrisisSpreadBreakdown {
        base_spread_bps: BASE_SPREAD_BPS,
        monopoly_bps: monopoly * BPS_PER_UNIT / inputs.base_price,
        adverse_selection_bps: adverse_selection * BPS_PER_UNIT / inputs.base_price,
        total_bps,
        volatility_multiplier,
    }
}
