//! Composes the guardrails by their trigger conditions.

use std::collections::BTreeSet;

use rand::RngCore;

use wheel_core::config::GuardrailConfig;
use wheel_core::{Candidate, Intent, PreferenceVector, Vibe};

use crate::free_only::{apply_free_only_guardrail, FreeOnlyGuardrail};
use crate::free_outdoor::{apply_free_outdoor_guardrail, FreeOutdoorGuardrail};
use crate::output::GuardrailOutput;

/// The request facts the triggers look at.
#[derive(Debug, Clone, Copy)]
pub struct GuardrailContext<'a> {
    pub prefs: &'a PreferenceVector,
    /// `None` when the user left the intent unset.
    pub intent: Option<Intent>,
    pub vibe: Option<Vibe>,
}

impl GuardrailContext<'_> {
    /// Free-only runs whenever `cheap` is active.
    pub fn free_only_active(&self) -> bool {
        self.prefs.wants_free()
    }

    /// Free+outdoor additionally needs the wild/beautiful vibe or an
    /// open-ended intent.
    pub fn free_outdoor_active(&self) -> bool {
        self.free_only_active()
            && (self.vibe == Some(Vibe::WildBeautiful)
                || self.intent.map_or(true, Intent::is_surprise))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuardrailStack {
    free_only: FreeOnlyGuardrail,
    free_outdoor: FreeOutdoorGuardrail,
}

impl GuardrailStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GuardrailConfig) -> Self {
        Self {
            free_only: FreeOnlyGuardrail::from_config(config),
            free_outdoor: FreeOutdoorGuardrail::from_config(config),
        }
    }

    /// Keep curated entries with these ids out of any injection.
    pub fn excluding(mut self, ids: &BTreeSet<String>) -> Self {
        self.free_outdoor = self.free_outdoor.excluding(ids);
        self
    }

    /// Apply whichever guardrails the context triggers, free-only first.
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        ctx: &GuardrailContext<'_>,
        rng: &mut dyn RngCore,
    ) -> GuardrailOutput {
        if !ctx.free_only_active() {
            return GuardrailOutput::passthrough(candidates);
        }

        let free = apply_free_only_guardrail(candidates, &self.free_only);
        if !ctx.free_outdoor_active() {
            return free;
        }

        let mut outdoor = apply_free_outdoor_guardrail(free.candidates, &self.free_outdoor, rng);
        let mut removed = free.removed;
        removed.append(&mut outdoor.removed);
        outdoor.removed = removed;
        outdoor
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wheel_core::PreferenceToken;

    use super::*;

    fn cheap() -> PreferenceVector {
        PreferenceVector::new().with(PreferenceToken::Cheap)
    }

    fn ctx(
        prefs: &PreferenceVector,
        intent: Option<Intent>,
        vibe: Option<Vibe>,
    ) -> GuardrailContext<'_> {
        GuardrailContext {
            prefs,
            intent,
            vibe,
        }
    }

    #[test]
    fn triggers() {
        let none = PreferenceVector::new();
        let cheap = cheap();

        assert!(!ctx(&none, None, None).free_only_active());
        assert!(ctx(&cheap, Some(Intent::Food), None).free_only_active());
        assert!(!ctx(&cheap, Some(Intent::Food), None).free_outdoor_active());
        assert!(ctx(&cheap, Some(Intent::Food), Some(Vibe::WildBeautiful)).free_outdoor_active());
        assert!(ctx(&cheap, None, None).free_outdoor_active());
        assert!(ctx(&cheap, Some(Intent::Surprise), Some(Vibe::Chill)).free_outdoor_active());
        assert!(!ctx(&none, None, Some(Vibe::WildBeautiful)).free_outdoor_active());
    }

    #[test]
    fn no_cheap_is_passthrough() {
        let input = vec![Candidate::new("a", "Steak Palace", &["restaurant"]).with_price_level(4)];
        let prefs = PreferenceVector::new();
        let ctx = GuardrailContext {
            prefs: &prefs,
            intent: None,
            vibe: None,
        };
        let out = GuardrailStack::new().apply(input.clone(), &ctx, &mut StdRng::seed_from_u64(1));
        assert_eq!(out, GuardrailOutput::passthrough(input));
    }

    #[test]
    fn free_filter_runs_before_outdoor_filter() {
        let input = vec![
            Candidate::new("a", "Riverside Park", &["park"]).with_price_level(0),
            Candidate::new("b", "Paid Gardens", &["botanical_garden"]).with_price_level(2),
            Candidate::new("c", "Park Street Grill", &["restaurant"]).with_price_level(0),
        ];
        let prefs = cheap();
        let ctx = GuardrailContext {
            prefs: &prefs,
            intent: None,
            vibe: None,
        };
        let out = GuardrailStack::new().apply(input, &ctx, &mut StdRng::seed_from_u64(1));

        assert_eq!(out.candidates[0].identity(), "a");
        assert_eq!(out.candidates.len(), 6);
        assert_eq!(out.injected, 5);
        let removed: Vec<&str> = out.removed.iter().map(|r| r.identity.as_str()).collect();
        assert_eq!(removed, vec!["b", "c"]);
    }
}
