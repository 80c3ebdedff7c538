//! Candidate batch cache using moka.
//!
//! Keys round the search center so nearby repeat searches share a batch.
//! Exclusions are not part of the key; the service applies them on read.

use std::sync::Arc;

use moka::sync::Cache;

use wheel_core::config::CacheConfig;
use wheel_core::models::AcquisitionQuery;
use wheel_core::{Candidate, Intent};

/// Rounded location, intent and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub lat: i64,
    pub lng: i64,
    pub intent: Option<Intent>,
    pub radius_m: u32,
}

pub struct CandidateCache {
    cache: Cache<CacheKey, Arc<Vec<Candidate>>>,
    precision: u32,
}

impl CandidateCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl())
            .build();

        Self {
            cache,
            precision: config.coordinate_precision,
        }
    }

    pub fn key_for(&self, query: &AcquisitionQuery) -> CacheKey {
        let scale = 10f64.powi(self.precision as i32);
        CacheKey {
            lat: (query.center.lat * scale).round() as i64,
            lng: (query.center.lng * scale).round() as i64,
            intent: query.intent,
            radius_m: query.radius_m,
        }
    }

    pub fn get(&self, query: &AcquisitionQuery) -> Option<Arc<Vec<Candidate>>> {
        self.cache.get(&self.key_for(query))
    }

    pub fn insert(&self, query: &AcquisitionQuery, batch: Vec<Candidate>) -> Arc<Vec<Candidate>> {
        let batch = Arc::new(batch);
        self.cache.insert(self.key_for(query), Arc::clone(&batch));
        batch
    }

    /// Drop the batch for one location/intent.
    pub fn invalidate(&self, query: &AcquisitionQuery) {
        self.cache.invalidate(&self.key_for(query));
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
