//! Protocol constants shared across the engine.
//!
//! The epsilon values below are protocol constants, not numerical tolerances.
//! They bound worst-case information rent near the distribution extremes and
//! must match across implementations; changing one changes every downstream
//! tier boundary.

/// Additive guard on the estimated density in information-rent denominators.
pub const RENT_EPSILON: f64 = 0.0001;

/// Additive guard on the Scott's-rule bandwidth for low-variance samples.
pub const BANDWIDTH_EPSILON: f64 = 0.001;

/// Density reported for an empty sample set.
pub const EMPTY_SET_DENSITY: f64 = 0.001;

/// Survival probability below which the hazard rate saturates.
pub const SURVIVAL_FLOOR: f64 = 0.001;

/// Hazard rate reported once survival drops below [`SURVIVAL_FLOOR`].
pub const HAZARD_CEILING: f64 = 1000.0;

/// Additive guard inside the monopoly-component logarithm.
pub const LOG_EPSILON: f64 = 0.001;

/// Normal volatility substituted when the supplied figure is zero.
pub const MIN_NORMAL_VOLATILITY: f64 = 0.01;

/// Basis points per unit of fractional price.
pub const BPS_PER_UNIT: f64 = 10_000.0;

/// Reported resting spread in basis points under normal conditions.
pub const BASE_SPREAD_BPS: f64 = 10.0;
