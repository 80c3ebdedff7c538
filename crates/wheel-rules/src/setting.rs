//! Indoor/outdoor classification from type membership and keyword hints.
//!
//! Hints match whole words only, so "hall" says nothing about "Marshall".

use std::sync::LazyLock;

use regex::Regex;
use wheel_core::{Candidate, SettingPreference};

/// Where a place is experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Indoor,
    Outdoor,
    /// No type or keyword signal either way.
    Unknown,
}

impl Setting {
    /// Whether this setting satisfies `wanted`. `None` when unknown.
    pub fn satisfies(self, wanted: SettingPreference) -> Option<bool> {
        match (self, wanted) {
            (Self::Unknown, _) => None,
            (Self::Indoor, SettingPreference::Indoor) | (Self::Outdoor, SettingPreference::Outdoor) => {
                Some(true)
            }
            _ => Some(false),
        }
    }
}

pub const OUTDOOR_TYPES: &[&str] = &[
    "park",
    "national_park",
    "dog_park",
    "playground",
    "campground",
    "hiking_area",
    "beach",
    "zoo",
    "amusement_park",
    "water_park",
    "botanical_garden",
    "garden",
    "golf_course",
    "mini_golf",
    "marina",
    "beer_garden",
    "natural_feature",
];

pub const OUTDOOR_KEYWORDS: &[&str] = &[
    "rooftop",
    "patio",
    "beer garden",
    "terrace",
    "outdoor",
    "open air",
    "open-air",
    "courtyard",
    "trail",
    "beach",
    "lakeside",
    "waterfront",
];

pub const INDOOR_TYPES: &[&str] = &[
    "restaurant",
    "cafe",
    "bakery",
    "bar",
    "night_club",
    "museum",
    "art_gallery",
    "aquarium",
    "movie_theater",
    "performing_arts_theater",
    "concert_hall",
    "bowling_alley",
    "escape_room",
    "arcade",
    "climbing_gym",
    "skating_rink",
    "casino",
    "karaoke",
    "library",
    "shopping_mall",
    "department_store",
    "clothing_store",
    "book_store",
    "spa",
    "gym",
    "yoga_studio",
];

pub const INDOOR_KEYWORDS: &[&str] = &["indoor", "cinema", "arcade", "hall", "studio"];

static RE_OUTDOOR_HINT: LazyLock<Option<Regex>> = LazyLock::new(|| word_pattern(OUTDOOR_KEYWORDS));
static RE_INDOOR_HINT: LazyLock<Option<Regex>> = LazyLock::new(|| word_pattern(INDOOR_KEYWORDS));

fn word_pattern(words: &[&str]) -> Option<Regex> {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).ok()
}

/// Classify a candidate. Outdoor signals win: a restaurant with a patio is outdoor.
pub fn classify(candidate: &Candidate) -> Setting {
    let text = candidate.searchable_text();
    let has_type = |set: &[&str]| candidate.types.iter().any(|t| set.contains(&t.as_str()));
    let has_hint = |re: &LazyLock<Option<Regex>>| re.as_ref().is_some_and(|re| re.is_match(&text));

    if has_type(OUTDOOR_TYPES) || has_hint(&RE_OUTDOOR_HINT) {
        Setting::Outdoor
    } else if has_type(INDOOR_TYPES) || has_hint(&RE_INDOOR_HINT) {
        Setting::Indoor
    } else {
        Setting::Unknown
    }
}
