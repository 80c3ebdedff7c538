//! Built-in rule rows, one per concrete intent.
//!
//! Type tags follow the POI provider's snake_case taxonomy. Keywords are
//! lowercase substrings matched against a candidate's searchable text.
//! `Surprise` has no row of its own; the table derives it from these.

use wheel_core::Intent;

/// Static definition of one intent's rules.
pub struct IntentRow {
    pub intent: Intent,
    pub allowed_types: &'static [&'static str],
    pub required_keywords: &'static [&'static str],
    pub excluded_types: &'static [&'static str],
    pub excluded_keywords: &'static [&'static str],
    pub fallback_allowed_types: &'static [&'static str],
}

/// Never a destination, whatever the intent.
pub const GLOBAL_EXCLUDED_TYPES: &[&str] = &[
    "plumber",
    "electrician",
    "roofing_contractor",
    "general_contractor",
    "painter",
    "moving_company",
    "locksmith",
    "car_repair",
    "car_wash",
    "car_dealer",
    "car_rental",
    "gas_station",
    "parking",
    "storage",
    "insurance_agency",
    "real_estate_agency",
    "lawyer",
    "accounting",
    "bank",
    "atm",
    "post_office",
    "police",
    "fire_station",
    "courthouse",
    "local_government_office",
    "hospital",
    "doctor",
    "dentist",
    "pharmacy",
    "drugstore",
    "veterinary_care",
    "funeral_home",
    "cemetery",
    "laundry",
    "primary_school",
    "secondary_school",
];

pub const GLOBAL_EXCLUDED_KEYWORDS: &[&str] = &[
    "plumbing",
    "contractor",
    "auto repair",
    "auto body",
    "collision",
    "insurance",
    "self storage",
    "law office",
    "attorney",
    "tax service",
    "funeral",
    "urgent care",
    "dental",
    "orthodont",
    "hvac",
];

pub const FOOD: IntentRow = IntentRow {
    intent: Intent::Food,
    allowed_types: &[
        "restaurant",
        "cafe",
        "bakery",
        "meal_takeaway",
        "meal_delivery",
        "food",
        "fast_food_restaurant",
        "pizza_restaurant",
        "sushi_restaurant",
        "mexican_restaurant",
        "ramen_restaurant",
        "seafood_restaurant",
        "barbecue_restaurant",
        "vegetarian_restaurant",
        "breakfast_restaurant",
        "brunch_restaurant",
        "steak_house",
        "sandwich_shop",
        "diner",
    ],
    required_keywords: &[
        "restaurant",
        "kitchen",
        "grill",
        "diner",
        "bistro",
        "eatery",
        "cafe",
        "café",
        "pizza",
        "sushi",
        "taco",
        "taqueria",
        "burger",
        "bbq",
        "barbecue",
        "noodle",
        "ramen",
        "deli",
        "bakery",
        "brunch",
        "dumpling",
        "curry",
        "trattoria",
    ],
    excluded_types: &[
        "grocery_or_supermarket",
        "supermarket",
        "convenience_store",
        "liquor_store",
        "wholesaler",
    ],
    excluded_keywords: &["catering", "wholesale", "food bank", "distributor", "meal prep"],
    fallback_allowed_types: &[
        "food_court",
        "market",
        "ice_cream_shop",
        "dessert_shop",
        "coffee_shop",
        "juice_shop",
        "tea_house",
        "food_truck",
    ],
};

pub const DRINKS: IntentRow = IntentRow {
    intent: Intent::Drinks,
    allowed_types: &[
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
    ],
    required_keywords: &[
        "bar",
        "pub",
        "tavern",
        "taproom",
        "brewery",
        "brewing",
        "lounge",
        "cocktail",
        "wine",
        "saloon",
        "beer",
        "speakeasy",
        "cidery",
        "distillery",
        "alehouse",
        "izakaya",
    ],
    excluded_types: &[
        "liquor_store",
        "convenience_store",
        "grocery_or_supermarket",
        "supermarket",
        "hair_care",
        "beauty_salon",
        "book_store",
    ],
    excluded_keywords: &[
        "liquor store",
        "beer distributor",
        "bottle shop",
        "package store",
        "barber",
    ],
    fallback_allowed_types: &[
        "restaurant",
        "bowling_alley",
        "casino",
        "live_music_venue",
        "karaoke",
        "hookah_bar",
    ],
};

pub const ACTIVITY: IntentRow = IntentRow {
    intent: Intent::Activity,
    allowed_types: &[
        "park",
        "amusement_park",
        "bowling_alley",
        "museum",
        "art_gallery",
        "zoo",
        "aquarium",
        "tourist_attraction",
        "movie_theater",
        "hiking_area",
        "campground",
        "botanical_garden",
        "national_park",
        "escape_room",
        "mini_golf",
        "climbing_gym",
        "skating_rink",
        "golf_course",
        "water_park",
        "beach",
        "marina",
        "playground",
        "dog_park",
        "arcade",
    ],
    required_keywords: &[
        "park",
        "trail",
        "museum",
        "gallery",
        "bowling",
        "arcade",
        "climbing",
        "escape room",
        "mini golf",
        "karaoke",
        "garden",
        "hike",
        "kayak",
        "zoo",
        "aquarium",
        "beach",
        "lake",
        "skate",
        "trampoline",
        "laser tag",
        "observatory",
    ],
    excluded_types: &["lodging", "apartment_complex", "rv_park", "parking_lot"],
    excluded_keywords: &[
        "parking",
        "rv park",
        "mobile home",
        "trailer park",
        "industrial park",
        "business park",
        "office park",
        "apartments",
    ],
    fallback_allowed_types: &[
        "library",
        "community_center",
        "stadium",
        "performing_arts_theater",
        "casino",
        "shopping_mall",
    ],
};

pub const SHOPPING: IntentRow = IntentRow {
    intent: Intent::Shopping,
    allowed_types: &[
        "shopping_mall",
        "clothing_store",
        "book_store",
        "department_store",
        "shoe_store",
        "jewelry_store",
        "gift_shop",
        "home_goods_store",
        "furniture_store",
        "electronics_store",
        "market",
        "flea_market",
        "thrift_store",
        "toy_store",
        "sporting_goods_store",
        "florist",
        "antique_store",
        "record_store",
    ],
    required_keywords: &[
        "boutique",
        "market",
        "shop",
        "store",
        "thrift",
        "vintage",
        "outlet",
        "mall",
        "books",
        "antique",
        "emporium",
        "bazaar",
        "consignment",
    ],
    excluded_types: &["convenience_store", "liquor_store", "wholesaler"],
    excluded_keywords: &[
        "auto parts",
        "wholesale",
        "pawn",
        "cash for gold",
        "vape",
        "repair shop",
    ],
    fallback_allowed_types: &[
        "store",
        "supermarket",
        "grocery_or_supermarket",
        "hardware_store",
        "bicycle_store",
        "pet_store",
    ],
};

pub const EVENTS: IntentRow = IntentRow {
    intent: Intent::Events,
    allowed_types: &[
        "stadium",
        "movie_theater",
        "performing_arts_theater",
        "concert_hall",
        "event_venue",
        "amphitheatre",
        "arena",
        "casino",
        "comedy_club",
        "live_music_venue",
        "opera_house",
    ],
    required_keywords: &[
        "theater",
        "theatre",
        "arena",
        "live music",
        "concert",
        "comedy",
        "festival",
        "venue",
        "stadium",
        "amphitheater",
        "amphitheatre",
        "playhouse",
        "philharmonic",
        "symphony",
        "opera",
        "cinema",
    ],
    excluded_types: &["banquet_hall", "wedding_venue"],
    excluded_keywords: &[
        "wedding",
        "banquet",
        "memorial",
        "conference room",
        "meeting room",
    ],
    fallback_allowed_types: &[
        "night_club",
        "bar",
        "museum",
        "art_gallery",
        "tourist_attraction",
        "community_center",
        "park",
        "bowling_alley",
    ],
};

pub const WELLNESS: IntentRow = IntentRow {
    intent: Intent::Wellness,
    allowed_types: &[
        "spa",
        "day_spa",
        "gym",
        "fitness_center",
        "yoga_studio",
        "pilates_studio",
        "massage",
        "sauna",
        "wellness_center",
        "public_bath",
        "meditation_center",
    ],
    required_keywords: &[
        "spa",
        "yoga",
        "massage",
        "pilates",
        "meditation",
        "sauna",
        "wellness",
        "float",
        "bathhouse",
        "fitness",
        "gym",
        "reiki",
        "hot spring",
        "onsen",
        "barre",
    ],
    excluded_types: &[
        "restaurant",
        "fast_food_restaurant",
        "meal_takeaway",
        "bar",
        "night_club",
    ],
    excluded_keywords: &[
        "clinic",
        "urgent care",
        "medical center",
        "physical therapy",
        "chiropract",
        "rehabilitation",
    ],
    fallback_allowed_types: &[
        "park",
        "beauty_salon",
        "hair_care",
        "nail_salon",
        "swimming_pool",
        "sports_club",
        "hiking_area",
    ],
};

/// Every concrete intent row, in [`Intent::CONCRETE`] order.
pub const ROWS: [&IntentRow; 6] = [&FOOD, &DRINKS, &ACTIVITY, &SHOPPING, &EVENTS, &WELLNESS];
