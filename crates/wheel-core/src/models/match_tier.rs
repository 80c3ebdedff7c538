use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The widening pass that accepted a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Full category validation and hard preference constraints.
    Strict,
    /// Fallback-allowed types accepted, constraints still hard.
    FallbackTypes,
    /// Keyword requirement dropped, constraints advisory.
    Relaxed,
}

impl MatchTier {
    pub const ALL: [MatchTier; 3] = [Self::Strict, Self::FallbackTypes, Self::Relaxed];

    /// Score penalty applied to every match from this tier.
    pub fn penalty(self) -> f64 {
        match self {
            Self::Strict => 0.0,
            Self::FallbackTypes => -2.0,
            Self::Relaxed => -4.0,
        }
    }

    /// 1-based tier number, as used in logs.
    pub fn number(self) -> u8 {
        match self {
            Self::Strict => 1,
            Self::FallbackTypes => 2,
            Self::Relaxed => 3,
        }
    }
}
