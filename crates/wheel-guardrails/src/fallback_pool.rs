//! Curated free outdoor activities, injected when the free+outdoor
//! guardrail leaves too little to spin.
//!
//! Entries are location-independent suggestions; ids carry a `fallback:`
//! prefix so they never collide with source identifiers.

use wheel_core::Candidate;

/// Id prefix shared by every curated entry.
pub const FALLBACK_ID_PREFIX: &str = "fallback:";

const POOL: &[(&str, &str, &[&str], &str)] = &[
    (
        "neighborhood-park",
        "Stroll the nearest neighborhood park",
        &["park"],
        "Open lawns, shade trees and benches. Bring a blanket.",
    ),
    (
        "nature-trail",
        "Walk a nature trail loop",
        &["hiking_area"],
        "Pick a short marked loop and go at your own pace.",
    ),
    (
        "botanical-garden",
        "Visit a public garden",
        &["garden"],
        "Seasonal beds and quiet paths in a free public garden.",
    ),
    (
        "sunset-viewpoint",
        "Catch the sunset from a viewpoint",
        &["natural_feature"],
        "Find high ground facing west about half an hour before sunset.",
    ),
    (
        "waterfront-walk",
        "Waterfront or shoreline walk",
        &["beach"],
        "Follow the water's edge and look for birds.",
    ),
    (
        "stargazing",
        "Stargazing at a dark-sky spot",
        &["natural_feature"],
        "Away from streetlights, after dark, with a star map app.",
    ),
    (
        "dog-park",
        "People-watch at the dog park",
        &["dog_park"],
        "Dogs optional.",
    ),
    (
        "playground-picnic",
        "Picnic by a playground",
        &["playground", "park"],
        "Pack your own snacks and claim a table.",
    ),
    (
        "public-art",
        "Self-guided public art walk",
        &["art_gallery"],
        "Murals and sculptures around town; map a route and wander.",
    ),
    (
        "national-park-overlook",
        "Drive to a scenic overlook",
        &["national_park"],
        "Pull-outs along scenic routes are usually free to stop at.",
    ),
];

/// The curated pool, freshly built. Every entry is priced free and tagged free.
pub fn curated_pool() -> Vec<Candidate> {
    POOL.iter()
        .map(|(slug, name, types, description)| {
            Candidate::new(format!("{FALLBACK_ID_PREFIX}{slug}"), *name, types)
                .with_price_level(0)
                .with_description(*description)
                .tagged_free()
        })
        .collect()
}

pub fn is_fallback(candidate: &Candidate) -> bool {
    candidate
        .id
        .as_deref()
        .is_some_and(|id| id.starts_with(FALLBACK_ID_PREFIX))
}
