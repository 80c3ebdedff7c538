use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ConfigError;

/// The user's declared search category for one spin of the wheel.
///
/// `Surprise` is the union of every other intent: it accepts anything a
/// concrete intent would accept and carries no keyword requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Food,
    Drinks,
    Activity,
    Shopping,
    Events,
    Wellness,
    Surprise,
}

impl Intent {
    /// Total number of intents.
    pub const COUNT: usize = 7;

    /// Every intent, surprise last.
    pub const ALL: [Intent; Self::COUNT] = [
        Self::Food,
        Self::Drinks,
        Self::Activity,
        Self::Shopping,
        Self::Events,
        Self::Wellness,
        Self::Surprise,
    ];

    /// Intents with their own rule rows. `Surprise` is derived from these.
    pub const CONCRETE: [Intent; Self::COUNT - 1] = [
        Self::Food,
        Self::Drinks,
        Self::Activity,
        Self::Shopping,
        Self::Events,
        Self::Wellness,
    ];

    /// Stable snake_case name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drinks => "drinks",
            Self::Activity => "activity",
            Self::Shopping => "shopping",
            Self::Events => "events",
            Self::Wellness => "wellness",
            Self::Surprise => "surprise",
        }
    }

    /// An unset intent behaves as `Surprise`.
    pub fn resolve(intent: Option<Intent>) -> Intent {
        intent.unwrap_or(Self::Surprise)
    }

    /// Whether this is the catch-all intent.
    pub fn is_surprise(self) -> bool {
        matches!(self, Self::Surprise)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == normalized)
            .ok_or(ConfigError::UnknownIntent { name: s.to_string() })
    }
}
