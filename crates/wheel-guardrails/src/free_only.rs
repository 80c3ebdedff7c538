//! Free-only guardrail.
//!
//! Provider price levels are an unreliable proxy for "free": a museum with
//! level 0 may still charge admission. A paid signal in the description
//! vetoes regardless of price.

use tracing::debug;

use wheel_core::config::GuardrailConfig;
use wheel_core::{Candidate, Rejection, RejectionReason};

use crate::output::GuardrailOutput;
use crate::patterns;

#[derive(Debug, Clone, Default)]
pub struct FreeOnlyGuardrail {
    /// Lowercase extra paid-signal keywords, matched as substrings.
    extra_paid_signals: Vec<String>,
}

impl FreeOnlyGuardrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GuardrailConfig) -> Self {
        Self {
            extra_paid_signals: config
                .extra_paid_signals
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// `Ok` when the candidate is genuinely free.
    pub fn check(&self, candidate: &Candidate) -> Result<(), RejectionReason> {
        let priced_free = match candidate.price_level {
            Some(level) => level == 0,
            None => candidate.tagged_free,
        };
        if !priced_free {
            return Err(RejectionReason::NotFree);
        }
        match self.paid_signal(&candidate.descriptive_text()) {
            Some(keyword) => Err(RejectionReason::PaidSignal { keyword }),
            None => Ok(()),
        }
    }

    fn paid_signal(&self, text: &str) -> Option<String> {
        patterns::paid_signal(text).or_else(|| {
            self.extra_paid_signals
                .iter()
                .find(|kw| text.contains(kw.as_str()))
                .cloned()
        })
    }
}

/// Keep only genuinely free candidates.
pub fn apply_free_only_guardrail(
    candidates: Vec<Candidate>,
    guardrail: &FreeOnlyGuardrail,
) -> GuardrailOutput {
    let span = wheel_matching::guardrail_span!("free_only", candidates.len());
    let _guard = span.enter();

    let mut output = GuardrailOutput::default();
    for candidate in candidates {
        match guardrail.check(&candidate) {
            Ok(()) => output.candidates.push(candidate),
            Err(reason) => output
                .removed
                .push(Rejection::new(candidate.identity(), None, reason)),
        }
    }

    debug!(
        kept = output.candidates.len(),
        removed = output.removed.len(),
        "free-only guardrail applied"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_zero_is_free() {
        let c = Candidate::new("p", "Riverside Park", &["park"]).with_price_level(0);
        assert_eq!(FreeOnlyGuardrail::new().check(&c), Ok(()));
    }

    #[test]
    fn unknown_price_needs_free_tag() {
        let plain = Candidate::new("p", "Riverside Park", &["park"]);
        assert_eq!(
            FreeOnlyGuardrail::new().check(&plain),
            Err(RejectionReason::NotFree)
        );
        assert_eq!(FreeOnlyGuardrail::new().check(&plain.tagged_free()), Ok(()));
    }

    #[test]
    fn known_price_overrides_free_tag() {
        let c = Candidate::new("p", "Pottery Studio", &["art_studio"])
            .with_price_level(2)
            .tagged_free();
        assert_eq!(FreeOnlyGuardrail::new().check(&c), Err(RejectionReason::NotFree));
    }

    #[test]
    fn paid_signal_vetoes_price_zero() {
        let c = Candidate::new("p", "City Art Museum", &["museum"])
            .with_price_level(0)
            .with_description("Special exhibits require timed tickets.");
        assert_eq!(
            FreeOnlyGuardrail::new().check(&c),
            Err(RejectionReason::PaidSignal {
                keyword: "tickets".into()
            })
        );
    }

    #[test]
    fn free_admission_is_not_a_paid_signal() {
        let c = Candidate::new("p", "City Art Museum", &["museum"])
            .with_price_level(0)
            .with_description("Free admission on the main floor.");
        assert_eq!(FreeOnlyGuardrail::new().check(&c), Ok(()));
    }

    #[test]
    fn configured_signals_are_honoured() {
        let config = GuardrailConfig {
            extra_paid_signals: vec!["Suggested Donation".into()],
            ..GuardrailConfig::default()
        };
        let guardrail = FreeOnlyGuardrail::from_config(&config);
        let c = Candidate::new("p", "Hall of Minerals", &["museum"])
            .with_price_level(0)
            .with_description("Suggested donation at the door");
        assert_eq!(
            guardrail.check(&c),
            Err(RejectionReason::PaidSignal {
                keyword: "suggested donation".into()
            })
        );
    }

    #[test]
    fn apply_reports_removals_without_tier() {
        let out = apply_free_only_guardrail(
            vec![
                Candidate::new("a", "Riverside Park", &["park"]).with_price_level(0),
                Candidate::new("b", "Steak Palace", &["restaurant"]).with_price_level(4),
            ],
            &FreeOnlyGuardrail::new(),
        );
        assert_eq!(out.candidates.len(), 1);
        assert_eq!(out.removed.len(), 1);
        assert_eq!(out.removed[0].identity, "b");
        assert_eq!(out.removed[0].tier, None);
        assert_eq!(out.injected, 0);
    }
}
