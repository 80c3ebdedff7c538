use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::Intent;

/// Additive per-intent rule overrides, keyed by intent name.
///
/// ```toml
/// [rules.activity]
/// extra_excluded_keywords = ["timeshare"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulesConfig {
    pub overrides: BTreeMap<String, RuleOverride>,
}

/// Extra entries merged into one intent's rule set. Overrides can only add;
/// there is no way to lift a built-in veto.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOverride {
    pub extra_allowed_types: Vec<String>,
    pub extra_required_keywords: Vec<String>,
    pub extra_excluded_types: Vec<String>,
    pub extra_excluded_keywords: Vec<String>,
    pub extra_fallback_types: Vec<String>,
}

impl RulesConfig {
    /// Overrides resolved to intents.
    pub fn resolved(&self) -> Result<Vec<(Intent, &RuleOverride)>, ConfigError> {
        self.overrides
            .iter()
            .map(|(name, rule)| name.parse::<Intent>().map(|intent| (intent, rule)))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolved().map(|_| ())
    }
}
