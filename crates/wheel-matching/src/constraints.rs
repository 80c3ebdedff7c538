//! Preference constraints: price bands and indoor/outdoor setting.
//!
//! Each active preference yields either a rank adjustment or a hard
//! reject. Adjustments from several tokens add up. Setting mismatches are
//! hard only for `activity`, where being outside (or inside) is usually the
//! whole point of the request.

use wheel_core::constants::{
    ADVISORY_MISS_PENALTY, PRICE_IN_BAND_BOOST, PRICE_UNKNOWN_PENALTY, SETTING_MATCH_BOOST,
    SETTING_MISMATCH_PENALTY, SETTING_UNKNOWN_PENALTY,
};
use wheel_core::{
    Candidate, Intent, PreferenceToken, PreferenceVector, RejectionReason, SettingPreference,
};
use wheel_rules::setting::classify;
use wheel_rules::PriceBand;

/// Result of evaluating a candidate against the preference vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintOutcome {
    pub passes: bool,
    /// Net adjustment to add to the score.
    pub rank_boost: f64,
    /// First hard reject, when `passes` is false.
    pub rejection: Option<RejectionReason>,
}

impl ConstraintOutcome {
    /// No active preferences, or preferences ignored.
    pub fn neutral() -> Self {
        Self {
            passes: true,
            rank_boost: 0.0,
            rejection: None,
        }
    }
}

enum Effect {
    Adjust(f64),
    Reject(RejectionReason),
}

/// Hard evaluation, used by tiers 1 and 2.
pub fn apply_constraints(
    candidate: &Candidate,
    prefs: &PreferenceVector,
    intent: Intent,
) -> ConstraintOutcome {
    let mut outcome = ConstraintOutcome::neutral();
    for effect in effects(candidate, prefs, intent) {
        match effect {
            Effect::Adjust(delta) => outcome.rank_boost += delta,
            Effect::Reject(reason) => {
                if outcome.rejection.is_none() {
                    outcome.rejection = Some(reason);
                }
                outcome.passes = false;
            }
        }
    }
    outcome
}

/// Advisory evaluation, used by tier 3: never rejects, a would-be reject
/// costs [`ADVISORY_MISS_PENALTY`] instead.
pub fn apply_advisory_constraints(
    candidate: &Candidate,
    prefs: &PreferenceVector,
    intent: Intent,
) -> ConstraintOutcome {
    let rank_boost = effects(candidate, prefs, intent)
        .into_iter()
        .map(|effect| match effect {
            Effect::Adjust(delta) => delta,
            Effect::Reject(_) => ADVISORY_MISS_PENALTY,
        })
        .sum();
    ConstraintOutcome {
        rank_boost,
        ..ConstraintOutcome::neutral()
    }
}

fn effects(candidate: &Candidate, prefs: &PreferenceVector, intent: Intent) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if let Some(effect) = price_effect(candidate, prefs) {
        effects.push(effect);
    }
    if let Some(effect) = setting_effect(candidate, prefs, intent) {
        effects.push(effect);
    }
    effects
}

fn price_effect(candidate: &Candidate, prefs: &PreferenceVector) -> Option<Effect> {
    let tokens: Vec<PreferenceToken> = prefs.price_tokens().collect();
    if tokens.is_empty() {
        return None;
    }

    // An explicit free tag stands in for a missing price level.
    let price_level = match candidate.price_level {
        None if candidate.tagged_free => Some(0),
        level => level,
    };
    let effect = match price_level {
        Some(level) => {
            let in_band = tokens
                .iter()
                .filter_map(|t| PriceBand::for_token(*t))
                .any(|band| band.contains(level));
            if in_band {
                Effect::Adjust(PRICE_IN_BAND_BOOST)
            } else {
                Effect::Reject(RejectionReason::PriceOutOfBand { level, tokens })
            }
        }
        // Unknown price might not be cheap; other bands just rank it lower.
        None if tokens == [PreferenceToken::Cheap] => Effect::Reject(RejectionReason::PriceUnknown),
        None => Effect::Adjust(PRICE_UNKNOWN_PENALTY),
    };
    Some(effect)
}

fn setting_effect(candidate: &Candidate, prefs: &PreferenceVector, intent: Intent) -> Option<Effect> {
    let wanted = prefs.setting_preference()?;
    let effect = match classify(candidate).satisfies(wanted) {
        Some(true) => Effect::Adjust(SETTING_MATCH_BOOST),
        Some(false) if intent == Intent::Activity => Effect::Reject(RejectionReason::SettingMismatch {
            wanted: token_for(wanted),
        }),
        Some(false) => Effect::Adjust(SETTING_MISMATCH_PENALTY),
        None => Effect::Adjust(SETTING_UNKNOWN_PENALTY),
    };
    Some(effect)
}

fn token_for(setting: SettingPreference) -> PreferenceToken {
    match setting {
        SettingPreference::Indoor => PreferenceToken::Indoor,
        SettingPreference::Outdoor => PreferenceToken::Outdoor,
    }
}
