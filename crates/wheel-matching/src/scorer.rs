//! Deterministic rank score for a validated candidate.
//!
//! Score = 5·type match + 2·keyword match + rating + popularity + boost.
//! Type and keyword matches are independent; a candidate can earn both.

use wheel_core::constants::{
    KEYWORD_MATCH_WEIGHT, MAX_RATING, POPULARITY_HIGH_BONUS, POPULARITY_HIGH_THRESHOLD,
    POPULARITY_MID_BONUS, POPULARITY_MID_THRESHOLD, RATING_WEIGHT, TYPE_MATCH_WEIGHT,
};
use wheel_core::{Candidate, Intent};
use wheel_rules::RuleTable;

/// Per-factor contributions, kept for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub type_match: f64,
    pub keyword_match: f64,
    pub rating: f64,
    pub popularity: f64,
    pub preference: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.type_match + self.keyword_match + self.rating + self.popularity + self.preference
    }
}

/// Score a candidate for `intent`, adding the preference boost from the
/// constraint evaluator. Tier penalties are applied by the pipeline.
pub fn score(table: &RuleTable, candidate: &Candidate, intent: Intent, preference_boost: f64) -> f64 {
    breakdown(table, candidate, intent, preference_boost).total()
}

pub fn breakdown(
    table: &RuleTable,
    candidate: &Candidate,
    intent: Intent,
    preference_boost: f64,
) -> ScoreBreakdown {
    let rules = table.rules(intent);
    let text = candidate.searchable_text();

    let type_match = if rules.allowed_type(candidate).is_some() {
        TYPE_MATCH_WEIGHT
    } else {
        0.0
    };
    let keyword_match = if rules.required_keyword(&text).is_some() {
        KEYWORD_MATCH_WEIGHT
    } else {
        0.0
    };

    ScoreBreakdown {
        type_match,
        keyword_match,
        rating: sanitized_rating(candidate.rating) * RATING_WEIGHT,
        popularity: popularity_bonus(candidate.rating_count),
        preference: if preference_boost.is_finite() {
            preference_boost
        } else {
            0.0
        },
    }
}

fn popularity_bonus(rating_count: u32) -> f64 {
    if rating_count > POPULARITY_HIGH_THRESHOLD {
        POPULARITY_HIGH_BONUS
    } else if rating_count > POPULARITY_MID_THRESHOLD {
        POPULARITY_MID_BONUS
    } else {
        0.0
    }
}

/// Missing or non-finite ratings count as 0; others clamp to the scale.
fn sanitized_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r.is_finite() => r.clamp(0.0, MAX_RATING),
        _ => 0.0,
    }
}
