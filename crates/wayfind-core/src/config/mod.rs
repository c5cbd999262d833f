pub mod bucketing_config;
pub mod defaults;
pub mod evaluation_config;
pub mod evaporation_config;
pub mod observability_config;

pub use bucketing_config::BucketingConfig;
pub use evaluation_config::{CandidateSource, EvaluationConfig, ScorerKind};
pub use evaporation_config::EvaporationConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, WayfindResult};

/// Top-level configuration, passed by reference into every component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfindConfig {
    pub evaporation: EvaporationConfig,
    pub bucketing: BucketingConfig,
    pub evaluation: EvaluationConfig,
    pub observability: ObservabilityConfig,
}

impl WayfindConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(s: &str) -> WayfindResult<Self> {
        let config: Self = toml::from_str(s).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Reject parameter values no component can run with.
    pub fn validate(&self) -> WayfindResult<()> {
        self.evaporation.validate()?;
        self.bucketing.validate()?;
        Ok(())
    }
}
