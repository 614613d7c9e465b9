//! Configuration for the mechanism engine.

use serde::{Deserialize, Serialize};

/// Protocol parameters for scoring, thresholding, rewards, and penalties.
///
/// Defaults reproduce the reference parameterization. Deployments override
/// individual fields with struct-update syntax and keep the rest:
///
/// ```
/// use mm_mechanism::MechanismParams;
///
/// let params = MechanismParams {
///     max_slash_fraction: 0.25,
///     ..Default::default()
/// };
/// assert_eq!(params.adverse_selection_param, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismParams {
    /// Adverse-selection coefficient in the upper virtual value.
    /// Scales the deviation-from-mean penalty on the information rent.
    /// Default: 0.05
    pub adverse_selection_param: f64,

    /// Crisis-cost coefficient in the lower virtual value.
    /// Default: 0.1
    pub crisis_cost_param: f64,

    /// Acceptance tolerance for virtual-value roots.
    /// Default: 0.1
    pub root_tolerance: f64,

    /// Iteration cap for the bisection solver.
    /// Default: 100
    pub max_bisection_iterations: usize,

    /// Number of Simpson's-rule segments for reward integration. Must be even.
    /// Default: 100
    pub integration_segments: usize,

    /// Maximum slash as a fraction of stake.
    /// Default: 0.5 (half the stake)
    pub max_slash_fraction: f64,

    /// Weight given to a verified proof outcome in credibility updates.
    /// Default: 0.7 (proof at 70%, prior at 30%)
    pub belief_update_weight: f64,
}

impl Default for MechanismParams {
    fn default() -> Self {
        Self {
            adverse_selection_param: 0.05,
            crisis_cost_param: 0.1,
            root_tolerance: 0.1,
            max_bisection_iterations: 100,
            integration_segments: 100,
            max_slash_fraction: 0.5,
            belief_update_weight: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_segment_count_is_even() {
        let params = MechanismParams::default();
        assert_eq!(params.integration_segments % 2, 0);
    }

    #[test]
    fn override_keeps_remaining_defaults() {
        let params = MechanismParams {
            root_tolerance: 0.01,
            ..Default::default()
        };
        assert_eq!(params.root_tolerance, 0.01);
        assert_eq!(params.max_bisection_iterations, 100);
        assert_eq!(params.belief_update_weight, 0.7);
    }
}
