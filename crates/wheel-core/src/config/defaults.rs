//! Default values for every config section.

pub const DEFAULT_MIN_RESULTS: usize = 8;
pub const DEFAULT_SHUFFLE_WEIGHT: f64 = 0.0;
pub const DEFAULT_TIER3_ADVISORY_CONSTRAINTS: bool = true;

pub const DEFAULT_FALLBACK_FLOOR: usize = 3;
pub const DEFAULT_FALLBACK_TARGET: usize = 6;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 512;
pub const DEFAULT_COORDINATE_PRECISION: u32 = 3;
pub const MAX_COORDINATE_PRECISION: u32 = 6;

pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5_000;
