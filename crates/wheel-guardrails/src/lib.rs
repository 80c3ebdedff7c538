//! # wheel-guardrails
//!
//! Post-filters layered after the matching pipeline. "Free" and "outdoor"
//! cut across every intent, so they live here as independent veto passes
//! instead of inside the rule table.
//!
//! - **Free-only**: price level 0 (or unknown but tagged free) and no paid
//!   signal in the description.
//! - **Free+outdoor**: parks, trails, gardens, museums; no food or drink
//!   establishments, including chains typed as something else. Tops up
//!   from a curated pool when too few survive.

pub mod fallback_pool;
pub mod free_only;
pub mod free_outdoor;
pub mod output;
pub mod patterns;
pub mod stack;

pub use fallback_pool::curated_pool;
pub use free_only::{apply_free_only_guardrail, FreeOnlyGuardrail};
pub use free_outdoor::{apply_free_outdoor_guardrail, FreeOutdoorGuardrail};
pub use output::GuardrailOutput;
pub use stack::{GuardrailContext, GuardrailStack};
