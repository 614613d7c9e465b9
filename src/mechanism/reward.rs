//! Incentive-compatible reward schedule.
//!
//! The cumulative reward is the integral of the upper virtual value from the
//! distribution minimum, so the schedule's slope at any score equals the
//! virtual value there. That equality is what makes truthful score reporting
//! the optimal strategy for a rational provider.

use super::config::MechanismParams;
use super::distribution::ScoreDistribution;
use super::virtual_value::upper_virtual_value;

/// Cumulative reward R(s) = integral of phi_u over [min, min(s, max)].
///
/// Simpson's rule over `params.integration_segments` segments; the count
/// must be even for the 1-4-2 weighting to close correctly. Scores below the
/// distribution minimum earn nothing, and the result is floored at zero.
///
/// Non-decreasing in `s` for a fixed distribution: the integrand is clamped
/// non-negative and the upper limit only grows.
pub fn ic_reward(score: f64, dist: &ScoreDistribution, params: &MechanismParams) -> f64 {
    if score < dist.min {
        return 0.0;
    }
    debug_assert!(
        params.integration_segments % 2 == 0,
        "Simpson's rule needs an even segment count"
    );

    let a = dist.min;
    let b = score.min(dist.max);
    let n = params.integration_segments;
    let h = (b - a) / n as f64;

    let mut sum = 0.0;
    for i in 0..=n {
        let x = a + i as f64 * h;
        let y = upper_virtual_value(x, dist, params.adverse_selection_param).virtual_value;
        if i == 0 || i == n {
            sum += y;
        } else if i % 2 == 1 {
            sum += 4.0 * y;
        } else {
            sum += 2.0 * y;
        }
    }

    ((h / 3.0) * sum).max(0.0)
}

/// Marginal reward dR/ds at `score`.
///
/// The integrand itself, not a numerical derivative of [`ic_reward`].
pub fn marginal_ic_reward(score: f64, dist: &ScoreDistribution, params: &MechanismParams) -> f64 {
    upper_virtual_value(score, dist, params.adverse_selection_param).virtual_value
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
    fn scores_below_the_minimum_earn_nothing() {
        let dist = reference_distribution();
        let params = MechanismParams::default();
        assert_eq!(ic_reward(75.0, &dist, &params), 0.0);
        assert_eq!(ic_reward(77.999, &dist, &params), 0.0);
    }

    #[test]
    fn cumulative_reward_is_non_decreasing() {
        let dist = reference_distribution();
        let params = MechanismParams::default();
        let mut previous = 0.0;
        for score in [78.0, 80.0, 82.5, 85.0, 87.5, 90.0, 92.5, 95.0, 97.0] {
            let reward = ic_reward(score, &dist, &params);
            assert!(
                reward >= previous,
                "reward decreased at score {score}: {reward} < {previous}"
            );
            previous = reward;
        }
    }

    #[test]
    fn reward_saturates_past_the_sample_maximum() {
        let dist = reference_distribution();
        let params = MechanismParams::default();
        let at_max = ic_reward(95.0, &dist, &params);
        let beyond = ic_reward(150.0, &dist, &params);
        assert!((at_max - beyond).abs() < 1e-9);
        assert!(at_max > 0.0);
    }

    #[test]
    fn marginal_reward_equals_the_integrand() {
        let dist = reference_distribution();
        let params = MechanismParams::default();
        for score in [80.0, 85.0, 90.0, 95.0] {
            let marginal = marginal_ic_reward(score, &dist, &params);
            let integrand =
                upper_virtual_value(score, &dist, params.adverse_selection_param).virtual_value;
            assert_eq!(marginal, integrand);
        }
    }

    #[test]
    fn coarser_integration_stays_close_to_the_default() {
        let dist = reference_distribution();
        let fine = MechanismParams::default();
        let coarse = MechanismParams {
            integration_segments: 20,
            ..Default::default()
        };
        let a = ic_reward(92.0, &dist, &fine);
        let b = ic_reward(92.0, &dist, &coarse);
        // Within a few percent of each other on a smooth integrand.
        assert!((a - b).abs() / a.max(1e-12) < 0.05);
    }
}
