use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Candidate cache owned by the search service, never by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub max_entries: u64,
    /// Decimal places coordinates are rounded to when building cache keys.
    pub coordinate_precision: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            coordinate_precision: defaults::DEFAULT_COORDINATE_PRECISION,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coordinate_precision > defaults::MAX_COORDINATE_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "cache.coordinate_precision",
                reason: format!(
                    "{} exceeds {}",
                    self.coordinate_precision,
                    defaults::MAX_COORDINATE_PRECISION
                ),
            });
        }
        if self.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
