/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest ordinal price level a source may report (0 = free).
pub const MAX_PRICE_LEVEL: u8 = 4;

/// Highest star rating a source may report.
pub const MAX_RATING: f64 = 5.0;

/// Score weight for a direct allowed-type match.
pub const TYPE_MATCH_WEIGHT: f64 = 5.0;

/// Score weight for a required-keyword hit in searchable text.
pub const KEYWORD_MATCH_WEIGHT: f64 = 2.0;

/// Multiplier applied to the star rating.
pub const RATING_WEIGHT: f64 = 1.0;

/// Review-count thresholds and the popularity bonus each earns.
pub const POPULARITY_HIGH_THRESHOLD: u32 = 100;
pub const POPULARITY_HIGH_BONUS: f64 = 2.0;
pub const POPULARITY_MID_THRESHOLD: u32 = 50;
pub const POPULARITY_MID_BONUS: f64 = 1.0;

/// Preference adjustments.
pub const PRICE_IN_BAND_BOOST: f64 = 0.5;
pub const PRICE_UNKNOWN_PENALTY: f64 = -0.5;
pub const SETTING_MATCH_BOOST: f64 = 0.5;
pub const SETTING_MISMATCH_PENALTY: f64 = -1.0;
pub const SETTING_UNKNOWN_PENALTY: f64 = -0.5;

/// Applied in advisory mode (tier 3) in place of a hard reject.
pub const ADVISORY_MISS_PENALTY: f64 = -1.0;

/// Upper bound on shuffle jitter. Stays below the 2-point gap between tiers.
pub const MAX_SHUFFLE_WEIGHT: f64 = 1.5;
