//! # wheel-matching
//!
//! Decides which candidates are valid for an intent, scores them, and
//! widens in three tiers until enough survive.
//!
//! ## Stages
//! 1. **Category validation**: vetoes first, then allowed types or required
//!    keywords, then the food/drinks special cases.
//! 2. **Preference constraints**: price bands and indoor/outdoor, hard or
//!    soft depending on intent.
//! 3. **Scoring**: type match, keyword match, rating, popularity, boost.
//! 4. **Widening**: strict → fallback types → relaxed, each pass only when
//!    the accepted set is still short. Vetoes never relax.
//! 5. **Ordering**: sort by score, dedup by identity, optional jitter.
//!
//! Pure and synchronous: no I/O, no shared mutable state.

pub mod constraints;
pub mod dedup;
pub mod pipeline;
pub mod scorer;
pub mod spans;
pub mod validator;

pub use constraints::{apply_advisory_constraints, apply_constraints, ConstraintOutcome};
pub use pipeline::{FilterPipeline, PipelineOutcome};
pub use scorer::{score, ScoreBreakdown};
pub use validator::{validate, validate_for_tier, MatchSignal, Validation};
