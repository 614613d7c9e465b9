use thiserror::Error;

/// Errors raised at the engine's construction boundary.
///
/// Everything past construction favors defined fallback values over errors:
/// the engine must stay live under degenerate statistical inputs, so the
/// estimators substitute epsilon constants instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MechanismError {
    /// A score distribution cannot be built from an empty sample set.
    #[error("cannot build a score distribution from an empty sample set")]
    EmptySamples,
}

/// Crate-wide result alias.
pub type Result<T, E = MechanismError> = std::result::Result<T, E>;
