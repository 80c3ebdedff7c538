//! # wheel-search
//!
//! One search request end to end: acquire candidates (through the cache),
//! drop session exclusions, run the widening pipeline, then the guardrails.

pub mod cache;
pub mod request;
pub mod service;

pub use cache::{CacheKey, CandidateCache};
pub use request::{SearchRequest, SearchResponse};
pub use service::SearchService;
