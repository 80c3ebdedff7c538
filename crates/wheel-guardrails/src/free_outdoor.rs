//! Free+outdoor guardrail: a stricter allow-list plus a food/drink veto.
//!
//! Type tags under-catch chains (a coffee chain inside a park is often
//! typed `park`), so names are checked against food/drink words and chain
//! fragments too. Input is assumed to be free-filtered already.

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::{debug, info};

use wheel_core::config::{defaults, GuardrailConfig};
use wheel_core::{Candidate, Rejection, RejectionReason};
use wheel_rules::overlap;

use crate::fallback_pool::curated_pool;
use crate::output::GuardrailOutput;
use crate::patterns::{first_match, RE_CHAIN_FRAGMENT, RE_FOOD_DRINK_NAME};

/// Types that count as a free outdoor outing.
pub const OUTDOOR_ALLOW_TYPES: &[&str] = &[
    "park",
    "national_park",
    "state_park",
    "hiking_area",
    "botanical_garden",
    "garden",
    "natural_feature",
    "beach",
    "campground",
    "playground",
    "dog_park",
    "museum",
    "art_gallery",
];

#[derive(Debug, Clone)]
pub struct FreeOutdoorGuardrail {
    floor: usize,
    target: usize,
    pool: Vec<Candidate>,
}

impl Default for FreeOutdoorGuardrail {
    fn default() -> Self {
        Self {
            floor: defaults::DEFAULT_FALLBACK_FLOOR,
            target: defaults::DEFAULT_FALLBACK_TARGET,
            pool: curated_pool(),
        }
    }
}

impl FreeOutdoorGuardrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GuardrailConfig) -> Self {
        Self {
            floor: config.fallback_floor,
            target: config.fallback_target.max(config.fallback_floor),
            pool: curated_pool(),
        }
    }

    /// Replace the curated pool.
    pub fn with_pool(mut self, pool: Vec<Candidate>) -> Self {
        self.pool = pool;
        self
    }

    /// Drop pool entries the caller never wants injected.
    pub fn excluding(mut self, ids: &BTreeSet<String>) -> Self {
        self.pool.retain(|c| !ids.contains(&c.identity()));
        self
    }

    pub fn floor(&self) -> usize {
        self.floor
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// `Ok` when the candidate is an outdoor-friendly, non-food place.
    pub fn check(&self, candidate: &Candidate) -> Result<(), RejectionReason> {
        if let Some(tag) = candidate.types.iter().find(|t| is_food_or_drink_type(t)) {
            return Err(RejectionReason::FoodOrDrinkEstablishment {
                matched: tag.clone(),
            });
        }
        let name_hit = first_match(&RE_CHAIN_FRAGMENT, &candidate.name)
            .or_else(|| first_match(&RE_FOOD_DRINK_NAME, &candidate.name));
        if let Some(matched) = name_hit {
            return Err(RejectionReason::FoodOrDrinkEstablishment { matched });
        }
        if !candidate
            .types
            .iter()
            .any(|t| OUTDOOR_ALLOW_TYPES.contains(&t.as_str()))
        {
            return Err(RejectionReason::NotOutdoorFriendly);
        }
        Ok(())
    }
}

fn is_food_or_drink_type(tag: &str) -> bool {
    overlap::is_food_type(tag)
        || overlap::is_drinks_type(tag)
        || overlap::CAFE_TYPES.contains(&tag)
}

/// Filter to free outdoor places, topping up from the curated pool when
/// fewer than the floor survive.
pub fn apply_free_outdoor_guardrail(
    candidates: Vec<Candidate>,
    guardrail: &FreeOutdoorGuardrail,
    rng: &mut dyn RngCore,
) -> GuardrailOutput {
    let span = wheel_matching::guardrail_span!("free_outdoor", candidates.len());
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

    if output.candidates.len() < guardrail.floor {
        output.injected = inject_fallbacks(&mut output.candidates, guardrail, rng);
        info!(
            injected = output.injected,
            total = output.candidates.len(),
            "free-outdoor fallback pool used"
        );
    }

    debug!(
        kept = output.candidates.len() - output.injected,
        removed = output.removed.len(),
        "free-outdoor guardrail applied"
    );
    output
}

fn inject_fallbacks(
    candidates: &mut Vec<Candidate>,
    guardrail: &FreeOutdoorGuardrail,
    rng: &mut dyn RngCore,
) -> usize {
    let mut present: HashSet<String> = candidates.iter().map(Candidate::identity).collect();
    let mut pool = guardrail.pool.clone();
    pool.shuffle(rng);

    let mut injected = 0;
    for fallback in pool {
        if candidates.len() >= guardrail.target {
            break;
        }
        if present.insert(fallback.identity()) {
            candidates.push(fallback);
            injected += 1;
        }
    }
    injected
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn park(id: &str, name: &str) -> Candidate {
        Candidate::new(id, name, &["park"]).with_price_level(0)
    }

    #[test]
    fn allow_list_admits_trails_and_museums() {
        let g = FreeOutdoorGuardrail::new();
        assert_eq!(g.check(&Candidate::new("a", "Sunset Trail", &["hiking_area"])), Ok(()));
        assert_eq!(g.check(&Candidate::new("b", "City Art Museum", &["museum"])), Ok(()));
        assert_eq!(
            g.check(&Candidate::new("c", "Corner Hardware", &["hardware_store"])),
            Err(RejectionReason::NotOutdoorFriendly)
        );
    }

    #[test]
    fn food_types_are_vetoed_even_with_park_type() {
        let g = FreeOutdoorGuardrail::new();
        let c = Candidate::new("a", "Boathouse", &["park", "restaurant"]);
        assert_eq!(
            g.check(&c),
            Err(RejectionReason::FoodOrDrinkEstablishment {
                matched: "restaurant".into()
            })
        );
    }

    #[test]
    fn chain_names_are_vetoed_when_typed_as_park() {
        let g = FreeOutdoorGuardrail::new();
        let c = Candidate::new("a", "Starbucks Reserve Plaza", &["park"]);
        assert_eq!(
            g.check(&c),
            Err(RejectionReason::FoodOrDrinkEstablishment {
                matched: "starbucks".into()
            })
        );
    }

    #[test]
    fn enough_survivors_means_no_injection() {
        let input = vec![park("a", "North Park"), park("b", "South Park"), park("c", "East Park")];
        let out = apply_free_outdoor_guardrail(input, &FreeOutdoorGuardrail::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(out.injected, 0);
        assert_eq!(out.candidates.len(), 3);
    }

    #[test]
    fn below_floor_fills_to_target_without_duplicates() {
        let input = vec![park("a", "North Park")];
        let out = apply_free_outdoor_guardrail(input, &FreeOutdoorGuardrail::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(out.candidates.len(), 6);
        assert_eq!(out.injected, 5);
        assert_eq!(out.candidates[0].identity(), "a");
        let ids: HashSet<String> = out.candidates.iter().map(Candidate::identity).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn injection_skips_fallbacks_already_present() {
        let pool = curated_pool();
        let already = pool[0].clone();
        let g = FreeOutdoorGuardrail::new().with_pool(pool[..2].to_vec());
        let out = apply_free_outdoor_guardrail(vec![already], &g, &mut StdRng::seed_from_u64(5));
        assert_eq!(out.candidates.len(), 2);
        assert_eq!(out.injected, 1);
    }

    #[test]
    fn excluded_pool_entries_are_never_injected() {
        let pool = curated_pool();
        let banned: BTreeSet<String> = pool.iter().take(3).map(Candidate::identity).collect();
        let g = FreeOutdoorGuardrail::new().excluding(&banned);
        let out = apply_free_outdoor_guardrail(Vec::new(), &g, &mut StdRng::seed_from_u64(2));
        assert!(out.candidates.iter().all(|c| !banned.contains(&c.identity())));
        assert_eq!(out.injected, 6);
    }

    #[test]
    fn curated_pool_passes_its_own_checks() {
        let g = FreeOutdoorGuardrail::new();
        for c in curated_pool() {
            assert_eq!(g.check(&c), Ok(()), "{}", c.name);
        }
    }
}
