use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Free-only and free+outdoor guardrail tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardrailConfig {
    /// Below this many survivors the curated fallback pool is consulted.
    pub fallback_floor: usize,
    /// Fallback injection fills up to this many entries.
    pub fallback_target: usize,
    /// Additional words that mark a place as paid.
    pub extra_paid_signals: Vec<String>,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            fallback_floor: defaults::DEFAULT_FALLBACK_FLOOR,
            fallback_target: defaults::DEFAULT_FALLBACK_TARGET,
            extra_paid_signals: Vec::new(),
        }
    }
}

impl GuardrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_target < self.fallback_floor {
            return Err(ConfigError::InvalidValue {
                field: "guardrails.fallback_target",
                reason: format!(
                    "{} is below fallback_floor {}",
                    self.fallback_target, self.fallback_floor
                ),
            });
        }
        if self.extra_paid_signals.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "guardrails.extra_paid_signals",
                reason: "blank keyword".to_string(),
            });
        }
        Ok(())
    }
}
