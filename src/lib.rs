#![deny(unreachable_pub)]

// Core modules
mod consts;
mod errors;

// Engine
mod mechanism;

// Re-exports
pub use consts::{
    BANDWIDTH_EPSILON, BASE_SPREAD_BPS, BPS_PER_UNIT, EMPTY_SET_DENSITY, HAZARD_CEILING,
    LOG_EPSILON, MIN_NORMAL_VOLATILITY, RENT_EPSILON, SURVIVAL_FLOOR,
};
pub use errors::{MechanismError, Result};
pub use mechanism::*;
