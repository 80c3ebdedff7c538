//! Type sets for the places where provider taxonomies overlap.
//!
//! A gastropub may carry both `bar` and `restaurant`; a coffee roaster may
//! carry `cafe` and match the keyword "bar" in "espresso bar". Set
//! intersection alone over- or under-includes, so the validator consults
//! these tables for the food/drinks special cases.

use wheel_core::Candidate;

/// Types that make a place a food venue.
pub const FOOD_QUALIFYING_TYPES: &[&str] = &[
    "restaurant",
    "meal_takeaway",
    "meal_delivery",
    "food",
    "cafe",
    "bakery",
    "diner",
    "steak_house",
    "sandwich_shop",
    "food_court",
];

/// Provider subtypes such as `thai_restaurant` all qualify as food.
const FOOD_TYPE_SUFFIX: &str = "_restaurant";

/// Drinking-only venue types.
pub const BAR_TYPES: &[&str] = &[
    "bar",
    "night_club",
    "pub",
    "wine_bar",
    "cocktail_bar",
    "sports_bar",
];

/// Types that make a place a drinks venue.
pub const DRINKS_QUALIFYING_TYPES: &[&str] = &[
    "bar",
    "night_club",
    "pub",
    "wine_bar",
    "cocktail_bar",
    "sports_bar",
    "brewery",
    "brewpub",
    "winery",
    "distillery",
    "beer_garden",
];

/// Coffee and pastry venue types.
pub const CAFE_TYPES: &[&str] = &["cafe", "bakery", "coffee_shop", "tea_house"];

pub fn is_food_type(tag: &str) -> bool {
    FOOD_QUALIFYING_TYPES.contains(&tag) || tag.ends_with(FOOD_TYPE_SUFFIX)
}

pub fn is_drinks_type(tag: &str) -> bool {
    DRINKS_QUALIFYING_TYPES.contains(&tag)
}

/// Typed as a bar or club with no food-qualifying type.
pub fn is_pure_bar(candidate: &Candidate) -> bool {
    candidate.types.iter().any(|t| BAR_TYPES.contains(&t.as_str()))
        && !candidate.types.iter().any(|t| is_food_type(t))
}

/// Typed as a café or bakery with no drinks-qualifying type.
pub fn is_pure_cafe(candidate: &Candidate) -> bool {
    candidate.types.iter().any(|t| CAFE_TYPES.contains(&t.as_str()))
        && !candidate.types.iter().any(|t| is_drinks_type(t))
}
