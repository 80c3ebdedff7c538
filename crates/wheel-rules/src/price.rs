use wheel_core::PreferenceToken;

/// Inclusive range of price levels a price token accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub min: u8,
    pub max: u8,
}

impl PriceBand {
    pub const CHEAP: PriceBand = PriceBand { min: 0, max: 1 };
    pub const MID: PriceBand = PriceBand { min: 2, max: 2 };
    pub const TREAT: PriceBand = PriceBand { min: 3, max: 4 };

    /// Band for a price token; `None` for setting tokens.
    pub fn for_token(token: PreferenceToken) -> Option<PriceBand> {
        match token {
            PreferenceToken::Cheap => Some(Self::CHEAP),
            PreferenceToken::Mid => Some(Self::MID),
            PreferenceToken::Treat => Some(Self::TREAT),
            PreferenceToken::Indoor | PreferenceToken::Outdoor => None,
        }
    }

    pub fn contains(self, level: u8) -> bool {
        (self.min..=self.max).contains(&level)
    }
}
