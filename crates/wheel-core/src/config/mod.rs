pub mod cache_config;
pub mod defaults;
pub mod guardrail_config;
pub mod pipeline_config;
pub mod rules_config;

pub use cache_config::CacheConfig;
pub use guardrail_config::GuardrailConfig;
pub use pipeline_config::PipelineConfig;
pub use rules_config::{RuleOverride, RulesConfig};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to defaults, so a
/// partial (or empty) TOML document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub pipeline: PipelineConfig,
    pub guardrails: GuardrailConfig,
    pub cache: CacheConfig,
    pub rules: RulesConfig,
}

impl WheelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pipeline.validate()?;
        self.guardrails.validate()?;
        self.cache.validate()?;
        self.rules.validate()
    }
}
