//! FilterPipeline: validate → constrain → score, widened over three tiers.
//!
//! Tier 1 always runs. Tiers 2 and 3 run only while fewer than
//! `min_results` distinct candidates have been accepted. A candidate
//! accepted by an earlier tier is never re-evaluated, and vetoes settle a
//! candidate for good.

use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::{debug, info};

use wheel_core::config::PipelineConfig;
use wheel_core::constants::MAX_SHUFFLE_WEIGHT;
use wheel_core::{
    Candidate, Intent, MatchTier, PreferenceVector, Rejection, RejectionReason, ResultEntry,
};
use wheel_rules::RuleTable;

use crate::constraints::{apply_advisory_constraints, apply_constraints, ConstraintOutcome};
use crate::dedup::dedup_by_key;
use crate::scorer;
use crate::validator::{validate_for_tier, Validation};

/// Everything a pipeline run produced, for callers that want diagnostics.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    /// Ranked, deduplicated survivors.
    pub entries: Vec<ResultEntry>,
    /// One entry per input candidate that was never accepted, carrying the
    /// reason from the last tier that looked at it.
    pub rejections: Vec<Rejection>,
    pub tiers_run: Vec<MatchTier>,
}

impl PipelineOutcome {
    pub fn candidates(&self) -> Vec<Candidate> {
        self.entries.iter().map(|e| e.candidate.clone()).collect()
    }
}

/// The widening filter pipeline over a read-only rule table.
#[derive(Debug, Clone)]
pub struct FilterPipeline<'r> {
    rules: &'r RuleTable,
    config: PipelineConfig,
}

struct Accepted {
    candidate: Candidate,
    score: f64,
    tier: MatchTier,
}

impl<'r> FilterPipeline<'r> {
    pub fn new(rules: &'r RuleTable, config: PipelineConfig) -> Self {
        Self { rules, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        self.rules
    }

    /// Run and return just the ordered candidates.
    pub fn run(
        &self,
        candidates: &[Candidate],
        intent: Intent,
        prefs: &PreferenceVector,
        min_results: usize,
        shuffle_weight: f64,
        rng: &mut dyn RngCore,
    ) -> Vec<Candidate> {
        self.run_with_report(candidates, intent, prefs, min_results, shuffle_weight, rng)
            .entries
            .into_iter()
            .map(|e| e.candidate)
            .collect()
    }

    /// Run with the configured `min_results` and `shuffle_weight`.
    pub fn run_default(
        &self,
        candidates: &[Candidate],
        intent: Intent,
        prefs: &PreferenceVector,
        rng: &mut dyn RngCore,
    ) -> PipelineOutcome {
        self.run_with_report(
            candidates,
            intent,
            prefs,
            self.config.min_results,
            self.config.shuffle_weight,
            rng,
        )
    }

    pub fn run_with_report(
        &self,
        candidates: &[Candidate],
        intent: Intent,
        prefs: &PreferenceVector,
        min_results: usize,
        shuffle_weight: f64,
        rng: &mut dyn RngCore,
    ) -> PipelineOutcome {
        let span = crate::pipeline_span!(intent, candidates.len());
        let _guard = span.enter();

        let mut accepted: Vec<Accepted> = Vec::new();
        let mut accepted_ids: HashSet<String> = HashSet::new();
        let mut settled = vec![false; candidates.len()];
        let mut last_rejection: Vec<Option<Rejection>> = vec![None; candidates.len()];
        let mut tiers_run = Vec::with_capacity(MatchTier::ALL.len());

        for tier in MatchTier::ALL {
            if tier != MatchTier::Strict && accepted_ids.len() >= min_results {
                break;
            }
            let tier_span = crate::tier_span!(tier.number());
            let _tier_guard = tier_span.enter();
            tiers_run.push(tier);

            let before = accepted.len();
            for (idx, candidate) in candidates.iter().enumerate() {
                if settled[idx] {
                    continue;
                }
                let identity = candidate.identity();

                let reason = match validate_for_tier(self.rules, candidate, intent, tier) {
                    Validation::Invalid(reason) => reason,
                    Validation::Valid(_) => {
                        let outcome = self.constraints(candidate, prefs, intent, tier);
                        match outcome.rejection {
                            Some(reason) if !outcome.passes => reason,
                            _ => {
                                let score = scorer::score(
                                    self.rules,
                                    candidate,
                                    intent,
                                    outcome.rank_boost,
                                ) + tier.penalty();
                                accepted.push(Accepted {
                                    candidate: candidate.clone(),
                                    score,
                                    tier,
                                });
                                accepted_ids.insert(identity);
                                settled[idx] = true;
                                last_rejection[idx] = None;
                                continue;
                            }
                        }
                    }
                };

                if is_final(&reason) {
                    settled[idx] = true;
                }
                last_rejection[idx] = Some(Rejection::new(identity, Some(tier), reason));
            }

            debug!(
                tier = tier.number(),
                accepted = accepted.len() - before,
                distinct = accepted_ids.len(),
                "tier complete"
            );
        }

        let entries = order(accepted, shuffle_weight, rng);
        let rejections: Vec<Rejection> = last_rejection.into_iter().flatten().collect();

        info!(
            results = entries.len(),
            rejected = rejections.len(),
            tiers = tiers_run.len(),
            "pipeline complete"
        );

        PipelineOutcome {
            entries,
            rejections,
            tiers_run,
        }
    }

    fn constraints(
        &self,
        candidate: &Candidate,
        prefs: &PreferenceVector,
        intent: Intent,
        tier: MatchTier,
    ) -> ConstraintOutcome {
        match tier {
            MatchTier::Strict | MatchTier::FallbackTypes => apply_constraints(candidate, prefs, intent),
            MatchTier::Relaxed if self.config.tier3_advisory_constraints => {
                apply_advisory_constraints(candidate, prefs, intent)
            }
            MatchTier::Relaxed => ConstraintOutcome::neutral(),
        }
    }
}

impl FilterPipeline<'static> {
    /// Built-in rule table with default config.
    pub fn standard() -> Self {
        Self::new(RuleTable::standard(), PipelineConfig::default())
    }
}

/// Reasons that no later tier can overturn.
fn is_final(reason: &RejectionReason) -> bool {
    matches!(
        reason,
        RejectionReason::ExcludedType { .. }
            | RejectionReason::ExcludedKeyword { .. }
            | RejectionReason::PureBarForFood
            | RejectionReason::PureCafeForDrinks
    )
}

/// Sort by score, dedup by identity, then jitter if requested.
fn order(mut accepted: Vec<Accepted>, shuffle_weight: f64, rng: &mut dyn RngCore) -> Vec<ResultEntry> {
    accepted.sort_by(|a, b| b.score.total_cmp(&a.score));
    let mut accepted = dedup_by_key(accepted, |a| a.candidate.identity());

    let weight = if shuffle_weight.is_finite() {
        shuffle_weight.clamp(0.0, MAX_SHUFFLE_WEIGHT)
    } else {
        0.0
    };
    if weight > 0.0 {
        let mut keyed: Vec<(f64, Accepted)> = accepted
            .into_iter()
            .map(|a| (a.score + rng.gen_range(0.0..weight), a))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        accepted = keyed.into_iter().map(|(_, a)| a).collect();
    }

    accepted
        .into_iter()
        .enumerate()
        .map(|(i, a)| ResultEntry {
            candidate: a.candidate,
            score: a.score,
            rank: i + 1,
            tier: Some(a.tier),
        })
        .collect()
}
