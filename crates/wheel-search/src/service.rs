//! SearchService: acquire → exclude → match → guard.

use std::collections::HashMap;
use std::sync::Arc;

use rand::RngCore;
use tracing::{debug, info, warn};

use wheel_core::constants::VERSION;
use wheel_core::errors::{ConfigError, WheelResult};
use wheel_core::traits::ICandidateSource;
use wheel_core::{Candidate, Intent, ResultEntry, WheelConfig};
use wheel_guardrails::{GuardrailContext, GuardrailStack};
use wheel_matching::FilterPipeline;
use wheel_rules::RuleTable;

use crate::cache::CandidateCache;
use crate::request::{SearchRequest, SearchResponse};

/// Runs searches against one candidate source. Holds no per-request
/// state, so a single instance serves concurrent requests.
pub struct SearchService<'s> {
    source: &'s dyn ICandidateSource,
    cache: Option<CandidateCache>,
    rules: RuleTable,
    config: WheelConfig,
}

impl<'s> SearchService<'s> {
    /// Validate `config`, apply its rule overrides, and enable the cache.
    pub fn new(source: &'s dyn ICandidateSource, config: WheelConfig) -> WheelResult<Self> {
        config.validate()?;
        let rules = RuleTable::with_overrides(&config.rules)?;
        let cache = Some(CandidateCache::new(&config.cache));
        debug!(version = VERSION, overrides = config.rules.overrides.len(), "search service ready");
        Ok(Self {
            source,
            cache,
            rules,
            config,
        })
    }

    /// Always fetch from the source.
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn cache(&self) -> Option<&CandidateCache> {
        self.cache.as_ref()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn search(&self, request: &SearchRequest, rng: &mut dyn RngCore) -> WheelResult<SearchResponse> {
        let span = wheel_matching::search_span!(request.intent, request.radius_m);
        let _guard = span.enter();

        let shuffle_weight = match request.shuffle_weight {
            Some(w) if !w.is_finite() || w < 0.0 => {
                return Err(ConfigError::InvalidValue {
                    field: "request.shuffle_weight",
                    reason: format!("{w} is not a non-negative number"),
                }
                .into());
            }
            Some(w) => w,
            None => self.config.pipeline.shuffle_weight,
        };
        let min_results = request.min_results.unwrap_or(self.config.pipeline.min_results);

        let (batch, cache_hit) = self.acquire(request)?;
        let candidates: Vec<Candidate> = batch
            .iter()
            .filter(|c| !request.exclude_ids.contains(&c.identity()))
            .cloned()
            .collect();
        debug!(
            fetched = batch.len(),
            excluded = batch.len() - candidates.len(),
            cache_hit,
            "candidates acquired"
        );

        let intent = Intent::resolve(request.intent);
        let pipeline = FilterPipeline::new(&self.rules, self.config.pipeline.clone());
        let outcome = pipeline.run_with_report(
            &candidates,
            intent,
            &request.preferences,
            min_results,
            shuffle_weight,
            rng,
        );

        let guardrails =
            GuardrailStack::from_config(&self.config.guardrails).excluding(&request.exclude_ids);
        let ctx = GuardrailContext {
            prefs: &request.preferences,
            intent: request.intent,
            vibe: request.vibe,
        };
        let guarded = guardrails.apply(outcome.candidates(), &ctx, rng);

        let entries = merge_entries(outcome.entries, guarded.candidates);
        let mut rejections = outcome.rejections;
        rejections.extend(guarded.removed);

        info!(
            results = entries.len(),
            injected = guarded.injected,
            rejected = rejections.len(),
            cache_hit,
            "search complete"
        );

        Ok(SearchResponse {
            entries,
            rejections,
            injected_fallbacks: guarded.injected,
            cache_hit,
            tiers_run: outcome.tiers_run,
        })
    }

    fn acquire(&self, request: &SearchRequest) -> WheelResult<(Arc<Vec<Candidate>>, bool)> {
        let mut query = request.acquisition_query();
        if let Some(cache) = &self.cache {
            if let Some(batch) = cache.get(&query) {
                return Ok((batch, true));
            }
            // Cached batches are shared across requests, so exclusion
            // happens on read only.
            query.exclude_ids.clear();
        }

        let batch = self.source.fetch(&query).map_err(|e| {
            warn!(error = %e, "candidate source failed");
            e
        })?;

        let batch = match &self.cache {
            Some(cache) => cache.insert(&query, batch),
            None => Arc::new(batch),
        };
        Ok((batch, false))
    }
}

/// Keep pipeline entries the guardrails let through, in pipeline order,
/// then append curated injections. Ranks are reassigned.
fn merge_entries(entries: Vec<ResultEntry>, survivors: Vec<Candidate>) -> Vec<ResultEntry> {
    let mut by_identity: HashMap<String, ResultEntry> = entries
        .into_iter()
        .map(|e| (e.candidate.identity(), e))
        .collect();

    survivors
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| {
            let mut entry = by_identity
                .remove(&candidate.identity())
                .unwrap_or(ResultEntry {
                    candidate,
                    score: 0.0,
                    rank: 0,
                    tier: None,
                });
            entry.rank = i + 1;
            entry
        })
        .collect()
}
