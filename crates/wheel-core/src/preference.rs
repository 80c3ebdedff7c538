use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ConfigError;

/// A single active, non-category filter chosen for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceToken {
    Cheap,
    Mid,
    Treat,
    Indoor,
    Outdoor,
}

impl PreferenceToken {
    pub const ALL: [PreferenceToken; 5] = [
        Self::Cheap,
        Self::Mid,
        Self::Treat,
        Self::Indoor,
        Self::Outdoor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cheap => "cheap",
            Self::Mid => "mid",
            Self::Treat => "treat",
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
        }
    }

    /// Price tokens map to a price band; setting tokens do not.
    pub fn is_price(self) -> bool {
        matches!(self, Self::Cheap | Self::Mid | Self::Treat)
    }
}

impl fmt::Display for PreferenceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|token| token.as_str() == normalized)
            .ok_or(ConfigError::UnknownPreference {
                token: s.to_string(),
            })
    }
}

/// The indoor/outdoor filter the vector resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingPreference {
    Indoor,
    Outdoor,
}

/// The set of active preference tokens for one search.
///
/// Independent of intent; the same vector is evaluated against whichever
/// intent the request carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceVector {
    tokens: BTreeSet<PreferenceToken>,
}

impl PreferenceVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of token names, rejecting anything unrecognised.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ConfigError> {
        tokens
            .iter()
            .map(|t| t.as_ref().parse::<PreferenceToken>())
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|tokens| Self { tokens })
    }

    pub fn with(mut self, token: PreferenceToken) -> Self {
        self.tokens.insert(token);
        self
    }

    pub fn contains(&self, token: PreferenceToken) -> bool {
        self.tokens.contains(&token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PreferenceToken> + '_ {
        self.tokens.iter().copied()
    }

    /// Active price tokens, in declaration order.
    pub fn price_tokens(&self) -> impl Iterator<Item = PreferenceToken> + '_ {
        self.iter().filter(|t| t.is_price())
    }

    /// The setting filter, if exactly one of indoor/outdoor is active.
    /// Both active cancel each other out.
    pub fn setting_preference(&self) -> Option<SettingPreference> {
        match (
            self.contains(PreferenceToken::Indoor),
            self.contains(PreferenceToken::Outdoor),
        ) {
            (true, false) => Some(SettingPreference::Indoor),
            (false, true) => Some(SettingPreference::Outdoor),
            _ => None,
        }
    }

    /// Whether the "free" cross-cutting constraint is requested.
    pub fn wants_free(&self) -> bool {
        self.contains(PreferenceToken::Cheap)
    }
}

impl FromIterator<PreferenceToken> for PreferenceVector {
    fn from_iter<I: IntoIterator<Item = PreferenceToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Mood preset picked alongside the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Vibe {
    /// Nature, views, open air.
    WildBeautiful,
    Chill,
    Lively,
    Romantic,
}
