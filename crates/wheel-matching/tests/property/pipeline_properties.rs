use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wheel_core::{Candidate, Intent, PreferenceToken, PreferenceVector};
use wheel_matching::FilterPipeline;
use wheel_rules::RuleTable;

const TYPES: &[&str] = &[
    "restaurant",
    "bar",
    "cafe",
    "park",
    "museum",
    "clothing_store",
    "spa",
    "library",
    "hardware_store",
    "plumber",
    "gas_station",
    "rv_park",
    "point_of_interest",
];

const NAME_PARTS: &[&str] = &[
    "Harbor", "Grill", "Tavern", "Trail", "Boutique", "Plumbing", "Auto Repair", "Garden",
    "Books", "Spa", "Kitchen", "Lounge", "Market", "Parking",
];

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        0u8..12,
        prop::sample::subsequence(NAME_PARTS, 1..3),
        prop::sample::subsequence(TYPES, 0..3),
        prop::option::of(0u8..=4),
        prop::option::of(0.0f64..=5.0),
        0u32..500,
    )
        .prop_map(|(id, name, types, price, rating, count)| {
            let mut c = Candidate::new(format!("p{id}"), &name.join(" "), &types);
            c.price_level = price;
            c.rating = rating;
            c.rating_count = count;
            c
        })
}

fn arb_intent() -> impl Strategy<Value = Intent> {
    prop::sample::select(Intent::ALL.to_vec())
}

fn arb_prefs() -> impl Strategy<Value = PreferenceVector> {
    prop::sample::subsequence(PreferenceToken::ALL.to_vec(), 0..3)
        .prop_map(|tokens| tokens.into_iter().collect())
}

// ── Vetoes hold no matter how far the pipeline widens ────────────────────

proptest! {
    #[test]
    fn vetoed_candidates_never_appear(
        candidates in prop::collection::vec(arb_candidate(), 0..20),
        intent in arb_intent(),
        prefs in arb_prefs(),
        min_results in 0usize..30,
    ) {
        let rules = RuleTable::standard().rules(intent);
        let out = FilterPipeline::standard().run(
            &candidates, intent, &prefs, min_results, 0.0, &mut StdRng::seed_from_u64(1),
        );
        for c in &out {
            prop_assert!(rules.excluded_type(c).is_none(), "{} survived", c.name);
            prop_assert!(rules.excluded_keyword(&c.searchable_text()).is_none(), "{} survived", c.name);
        }
    }
}

// ── Output identities are unique ──────────────────────────────────────────

proptest! {
    #[test]
    fn output_has_no_duplicate_identities(
        candidates in prop::collection::vec(arb_candidate(), 0..20),
        intent in arb_intent(),
        weight in 0.0f64..=1.5,
        seed in any::<u64>(),
    ) {
        let out = FilterPipeline::standard().run(
            &candidates, intent, &PreferenceVector::new(), 8, weight, &mut StdRng::seed_from_u64(seed),
        );
        let ids: HashSet<String> = out.iter().map(Candidate::identity).collect();
        prop_assert_eq!(ids.len(), out.len());
    }
}

// ── With no jitter, the order is a pure function of the input ────────────

proptest! {
    #[test]
    fn zero_weight_is_deterministic(
        candidates in prop::collection::vec(arb_candidate(), 0..20),
        intent in arb_intent(),
        prefs in arb_prefs(),
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let pipeline = FilterPipeline::standard();
        let a = pipeline.run(&candidates, intent, &prefs, 8, 0.0, &mut StdRng::seed_from_u64(seed_a));
        let b = pipeline.run(&candidates, intent, &prefs, 8, 0.0, &mut StdRng::seed_from_u64(seed_b));
        prop_assert_eq!(a, b);
    }
}

// ── Scores are non-increasing when there is no jitter ────────────────────

proptest! {
    #[test]
    fn entries_sorted_by_score(
        candidates in prop::collection::vec(arb_candidate(), 0..20),
        intent in arb_intent(),
        prefs in arb_prefs(),
    ) {
        let out = FilterPipeline::standard().run_with_report(
            &candidates, intent, &prefs, 8, 0.0, &mut StdRng::seed_from_u64(3),
        );
        for pair in out.entries.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
