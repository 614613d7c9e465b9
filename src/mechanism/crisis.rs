//! Crisis classification over externally supplied market figures.
//!
//! The engine never ingests market data. An external scheduler hands it a
//! snapshot of already-computed figures once per detection interval, and the
//! classifier is a pure function of that snapshot and the configured
//! thresholds.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of stress event detected in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrisisType {
    /// Realized volatility above the crisis threshold.
    VolatilitySpike,
    /// Resting liquidity below the configured floor.
    LiquidityDrain,
    /// Average quoted spread above the widening threshold.
    SpreadWidening,
    /// 24h volume above the surge threshold.
    VolumeSurge,
}

/// Already-computed market figures for one detection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Snapshot timestamp in milliseconds, on the caller's clock.
    pub timestamp_ms: u64,
    /// Mid price.
    pub mid_price: f64,
    /// Average quoted spread in basis points.
    pub spread_bps: f64,
    /// Realized volatility in basis points.
    pub volatility_bps: f64,
    /// Total resting liquidity in quote units.
    pub total_liquidity: f64,
    /// 24h traded volume in quote units.
    pub volume_24h: f64,
}

/// Thresholds for crisis classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrisisDetectionConfig {
    /// Volatility at or above this is a spike.
    /// Default: 3000 bps (30%)
    pub volatility_threshold_bps: f64,
    /// Liquidity below this is a drain.
    /// Default: 100_000 quote units
    pub min_liquidity: f64,
    /// Average spread at or above this is widening.
    /// Default: 200 bps
    pub spread_widening_bps: f64,
    /// 24h volume at or above this is a surge.
    /// Default: 10_000_000 quote units
    pub volume_surge_threshold: f64,
}

impl Default for CrisisDetectionConfig {
    fn default() -> Self {
        Self {
            volatility_threshold_bps: 3000.0,
            min_liquidity: 100_000.0,
            spread_widening_bps: 200.0,
            volume_surge_threshold: 10_000_000.0,
        }
    }
}

/// Crisis verdict for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrisisState {
    /// Whether any threshold tripped.
    pub active: bool,
    /// Most severe tripped condition, if any.
    pub crisis_type: Option<CrisisType>,
    /// Timestamp of the triggering snapshot.
    pub triggered_at_ms: u64,
    /// Volatility at trigger time.
    pub volatility_bps: f64,
    /// Liquidity remaining at trigger time.
    pub liquidity_remaining: f64,
    /// Average spread at trigger time.
    pub avg_spread_bps: f64,
}

/// Classify a snapshot against the thresholds.
///
/// Conditions are checked in severity order (volatility, liquidity, spread,
/// volume) and the first hit wins.
pub fn detect_crisis(
    snapshot: &MarketSnapshot,
    config: &CrisisDetectionConfig,
) -> Option<CrisisType> {
    let crisis = if snapshot.volatility_bps >= config.volatility_threshold_bps {
        Some(CrisisType::VolatilitySpike)
    } else if snapshot.total_liquidity < config.min_liquidity {
        Some(CrisisType::LiquidityDrain)
    } else if snapshot.spread_bps >= config.spread_widening_bps {
        Some(CrisisType::SpreadWidening)
    } else if snapshot.volume_24h >= config.volume_surge_threshold {
        Some(CrisisType::VolumeSurge)
    } else {
        None
    };

    if let Some(kind) = crisis {
        debug!(
            ?kind,
            volatility_bps = snapshot.volatility_bps,
            liquidity = snapshot.total_liquidity,
            spread_bps = snapshot.spread_bps,
            "crisis condition tripped"
        );
    }
    crisis
}

/// Build the full crisis state for a snapshot.
pub fn crisis_state(snapshot: &MarketSnapshot, config: &CrisisDetectionConfig) -> CrisisState {
    let crisis_type = detect_crisis(snapshot, config);
    CrisisState {
        active: crisis_type.is_some(),
        crisis_type,
        triggered_at_ms: snapshot.timestamp_ms,
        volatility_bps: snapshot.volatility_bps,
        liquidity_remaining: snapshot.total_liquidity,
        avg_spread_bps: snapshot.spread_bps,
    }
}
