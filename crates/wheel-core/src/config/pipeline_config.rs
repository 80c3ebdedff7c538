use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_SHUFFLE_WEIGHT;
use crate::errors::ConfigError;

/// Widening and ordering defaults. Requests may override both numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Widening stops once this many distinct candidates are accepted.
    pub min_results: usize,
    /// Bound of the random tie-breaking jitter. 0 disables it.
    pub shuffle_weight: f64,
    /// Keep price/setting as soft scoring in tier 3 instead of ignoring them.
    pub tier3_advisory_constraints: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_results: defaults::DEFAULT_MIN_RESULTS,
            shuffle_weight: defaults::DEFAULT_SHUFFLE_WEIGHT,
            tier3_advisory_constraints: defaults::DEFAULT_TIER3_ADVISORY_CONSTRAINTS,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.shuffle_weight.is_finite()
            || !(0.0..=MAX_SHUFFLE_WEIGHT).contains(&self.shuffle_weight)
        {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.shuffle_weight",
                reason: format!("{} not in 0..={MAX_SHUFFLE_WEIGHT}", self.shuffle_weight),
            });
        }
        Ok(())
    }
}
