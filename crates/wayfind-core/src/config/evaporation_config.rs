use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{WayfindError, WayfindResult};

/// Evaporation (time-decay) parameters.
///
/// The same `rho` drives both the retention cutoff and the weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaporationConfig {
    /// Decay coefficient. Must be finite and strictly positive.
    pub rho: f64,
    /// Drop records older than the retention cutoff before weighting.
    pub apply_retention_cutoff: bool,
}

impl EvaporationConfig {
    /// Config with the given `rho` and default retention behaviour.
    pub fn with_rho(rho: f64) -> Self {
        Self {
            rho,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> WayfindResult<()> {
        if !self.rho.is_finite() || self.rho <= 0.0 {
            return Err(WayfindError::invalid(
                "rho",
                format!("must be a finite value > 0, got {}", self.rho),
            ));
        }
        Ok(())
    }
}

impl Default for EvaporationConfig {
    fn default() -> Self {
        Self {
            rho: defaults::DEFAULT_RHO,
            apply_retention_cutoff: defaults::DEFAULT_APPLY_RETENTION_CUTOFF,
        }
    }
}
