//! # wheel-core
//!
//! Foundation crate for the place-matching pipeline.
//! Defines intents, candidates, preferences, result models, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod preference;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use candidate::{Candidate, Coordinates, RawCandidate};
pub use config::WheelConfig;
pub use errors::{WheelError, WheelResult};
pub use intent::Intent;
pub use models::{MatchTier, Rejection, RejectionReason, ResultEntry};
pub use preference::{PreferenceToken, PreferenceVector, SettingPreference, Vibe};
