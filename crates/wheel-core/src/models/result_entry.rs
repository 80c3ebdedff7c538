use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::MatchTier;
use crate::Candidate;

/// One ranked candidate. Produced fresh per search, never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultEntry {
    pub candidate: Candidate,
    /// Final score including tier penalty and preference boost, excluding jitter.
    /// Curated fallbacks score 0.
    pub score: f64,
    /// 1-based position in the final ordering.
    pub rank: usize,
    /// The tier that accepted it. `None` for curated fallback injections.
    pub tier: Option<MatchTier>,
}
