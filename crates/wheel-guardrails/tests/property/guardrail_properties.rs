use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wheel_core::Candidate;
use wheel_guardrails::{
    apply_free_only_guardrail, apply_free_outdoor_guardrail, FreeOnlyGuardrail,
    FreeOutdoorGuardrail,
};

const TYPES: &[&str] = &[
    "park", "museum", "restaurant", "bar", "cafe", "beach", "hiking_area", "store", "garden",
];

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        "[A-Za-z ]{3,20}",
        prop::sample::subsequence(TYPES, 1..3),
        prop::option::of(0u8..=4),
        any::<bool>(),
    )
        .prop_map(|(name, types, price, free)| {
            let mut c = Candidate::new("p", name, &types);
            c.price_level = price;
            c.tagged_free = free;
            c
        })
}

/// Pipeline output is already deduplicated, so ids are unique here.
fn arb_batch() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(arb_candidate(), 0..20).prop_map(|mut batch| {
        for (i, c) in batch.iter_mut().enumerate() {
            c.id = Some(format!("p{i}"));
        }
        batch
    })
}

// ── Free-only never lets a priced place through ───────────────────────────

proptest! {
    #[test]
    fn free_only_output_is_free(candidates in arb_batch()) {
        let n = candidates.len();
        let out = apply_free_only_guardrail(candidates, &FreeOnlyGuardrail::new());
        prop_assert_eq!(out.candidates.len() + out.removed.len(), n);
        for c in &out.candidates {
            prop_assert!(c.price_level == Some(0) || (c.price_level.is_none() && c.tagged_free));
        }
    }
}

// ── Free+outdoor reaches the floor and never duplicates ──────────────────

proptest! {
    #[test]
    fn free_outdoor_meets_floor_without_duplicates(
        candidates in arb_batch(),
        seed in any::<u64>(),
    ) {
        let guardrail = FreeOutdoorGuardrail::new();
        let out = apply_free_outdoor_guardrail(candidates, &guardrail, &mut StdRng::seed_from_u64(seed));
        prop_assert!(out.candidates.len() >= guardrail.floor());
        let ids: HashSet<String> = out.candidates.iter().map(Candidate::identity).collect();
        prop_assert_eq!(ids.len(), out.candidates.len());
        for c in &out.candidates {
            prop_assert!(guardrail.check(c).is_ok());
        }
    }
}
