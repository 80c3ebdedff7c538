//! Span definitions per operation: pipeline, tier, guardrail, search.
//!
//! Each span carries its metadata via the `tracing` crate.

/// Create a pipeline span.
#[macro_export]
macro_rules! pipeline_span {
    ($intent:expr, $candidates:expr) => {
        tracing::info_span!("wheel.pipeline", intent = %$intent, candidates = $candidates)
    };
}

/// Create a widening tier span.
#[macro_export]
macro_rules! tier_span {
    ($tier:expr) => {
        tracing::debug_span!("wheel.tier", tier = $tier)
    };
}

/// Create a guardrail span.
#[macro_export]
macro_rules! guardrail_span {
    ($guardrail:expr, $candidates:expr) => {
        tracing::info_span!("wheel.guardrail", guardrail = %$guardrail, candidates = $candidates)
    };
}

/// Create a search request span.
#[macro_export]
macro_rules! search_span {
    ($intent:expr, $radius_m:expr) => {
        tracing::info_span!("wheel.search", intent = ?$intent, radius_m = $radius_m)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "wheel.pipeline";
    pub const TIER: &str = "wheel.tier";
    pub const GUARDRAIL: &str = "wheel.guardrail";
    pub const SEARCH: &str = "wheel.search";
}
