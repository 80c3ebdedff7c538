use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use wheel_core::config::defaults;
use wheel_core::models::AcquisitionQuery;
use wheel_core::{Coordinates, Intent, MatchTier, PreferenceVector, Rejection, ResultEntry, Vibe};

/// One spin of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub center: Coordinates,
    /// `None` means "surprise me".
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub preferences: PreferenceVector,
    #[serde(default)]
    pub vibe: Option<Vibe>,
    /// Places dismissed earlier in the session.
    #[serde(default)]
    pub exclude_ids: BTreeSet<String>,
    /// Overrides `pipeline.min_results`.
    #[serde(default)]
    pub min_results: Option<usize>,
    /// Overrides `pipeline.shuffle_weight`.
    #[serde(default)]
    pub shuffle_weight: Option<f64>,
    #[serde(default = "default_radius")]
    pub radius_m: u32,
}

fn default_radius() -> u32 {
    defaults::DEFAULT_SEARCH_RADIUS_M
}

impl SearchRequest {
    pub fn new(center: Coordinates) -> Self {
        Self {
            center,
            intent: None,
            preferences: PreferenceVector::new(),
            vibe: None,
            exclude_ids: BTreeSet::new(),
            min_results: None,
            shuffle_weight: None,
            radius_m: default_radius(),
        }
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_preferences(mut self, preferences: PreferenceVector) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = Some(vibe);
        self
    }

    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.exclude_ids.insert(id.into());
        self
    }

    pub fn with_min_results(mut self, min_results: usize) -> Self {
        self.min_results = Some(min_results);
        self
    }

    pub fn with_shuffle_weight(mut self, weight: f64) -> Self {
        self.shuffle_weight = Some(weight);
        self
    }

    pub fn acquisition_query(&self) -> AcquisitionQuery {
        AcquisitionQuery {
            center: self.center,
            intent: self.intent,
            radius_m: self.radius_m,
            exclude_ids: self.exclude_ids.clone(),
        }
    }
}

/// Ranked results plus diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub entries: Vec<ResultEntry>,
    /// Pipeline and guardrail rejections, in that order.
    pub rejections: Vec<Rejection>,
    /// Curated fallbacks appended by the free+outdoor guardrail.
    pub injected_fallbacks: usize,
    /// The candidate batch came from the cache rather than the source.
    pub cache_hit: bool,
    pub tiers_run: Vec<MatchTier>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn identities(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.candidate.identity()).collect()
    }
}
