/// Errors of the kinetics evaluator.
///
/// Only two kinds exist: mathematically undefined input (`Domain`) and caller
/// contract violations (`InvalidInput`). Both are returned immediately, nothing
/// is retried or replaced by a default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KineticsError {
    /// Undefined input, e.g. zero absolute temperature
    #[error("Domain error: {0}")]
    Domain(String),

    /// Non-positive initial concentration, malformed time samples, bad solver settings
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KineticsError {
    pub fn is_domain(&self) -> bool {
        matches!(self, KineticsError::Domain(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, KineticsError::InvalidInput(_))
    }
}
