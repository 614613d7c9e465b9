//! Slashing from over-claimed virtual value.
//!
//! A provider that over-reports its score extracts virtual value it never
//! earned. The slash recovers exactly that extracted value, capped as a
//! fraction of stake, rather than confiscating the whole position.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::MechanismParams;
use super::distribution::ScoreDistribution;
use super::virtual_value::upper_virtual_value;

/// Penalty verdict for a claimed-versus-verified score pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashResult {
    /// Fraction of stake to slash, capped. The settlement layer multiplies
    /// this by the staked amount; the engine never touches token amounts.
    pub slash_fraction: f64,
    /// Human-readable justification for the verdict.
    pub justification: String,
}

/// Compute the slash for a claimed score against the verified actual score.
///
/// overclaimed = max(0, phi_u(claimed) - phi_u(actual)), then capped at
/// `params.max_slash_fraction`. Conservative or honest reporting (actual at
/// or above claimed virtual value) slashes nothing.
pub fn slashing_amount(
    claimed_score: f64,
    actual_score: f64,
    dist: &ScoreDistribution,
    params: &MechanismParams,
) -> SlashResult {
    let claimed =
        upper_virtual_value(claimed_score, dist, params.adverse_selection_param).virtual_value;
    let actual =
        upper_virtual_value(actual_score, dist, params.adverse_selection_param).virtual_value;
    let overclaimed = (claimed - actual).max(0.0);
    let slash_fraction = overclaimed.min(params.max_slash_fraction);

    debug!(
        claimed_score,
        actual_score, overclaimed, slash_fraction, "slashing evaluated"
    );

    let justification = if overclaimed <= 0.0 {
        "no slashing: provider was conservative or honest".to_string()
    } else {
        format!(
            "overclaimed virtual value {overclaimed:.2}, slashing {slash_fraction:.2} of stake"
        )
    };

    SlashResult {
        slash_fraction,
        justification,
    }
}
