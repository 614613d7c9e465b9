//! Myersonian mechanism engine for tiered liquidity provision.
//!
//! Pure scoring and parameter computation over externally supplied data:
//! - **Distribution**: empirical CDF, kernel density, and hazard rate over historical scores
//! - **Virtual values**: profit-side and cost-side Myersonian transforms
//! - **Thresholds**: bounded bisection roots combined into tier boundaries
//! - **Allocation**: three-tier classification with a no-trade gap
//! - **Rewards**: incentive-compatible integral of the upper virtual value
//! - **Crisis**: spread decomposition and snapshot classification
//! - **Enforcement**: slashing and credibility updates from verified outcomes
//!
//! Every component is a pure function of its arguments. The only shared
//! input is a [`ScoreDistribution`] snapshot, rebuilt per scoring epoch and
//! never mutated, so per-provider invocations parallelize freely.

mod config;
mod credibility;
mod crisis;
mod crisis_spread;
mod distribution;
mod engine;
mod reward;
mod slashing;
mod threshold;
mod tier;
mod virtual_value;

pub use config::*;
pub use credibility::*;
pub use crisis::*;
pub use crisis_spread::*;
pub use distribution::*;
pub use engine::*;
pub use reward::*;
pub use slashing::*;
pub use threshold::*;
pub use tier::*;
pub use virtual_value::*;

#[cfg(test)]
mod tests;
