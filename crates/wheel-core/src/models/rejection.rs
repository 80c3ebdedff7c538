use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::MatchTier;
use crate::PreferenceToken;

/// Why a candidate was dropped. Diagnostics only; never fed back into scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Carries a type tag the intent vetoes.
    ExcludedType { tag: String },
    /// Searchable text contains a vetoed keyword.
    ExcludedKeyword { keyword: String },
    /// Neither an allowed type nor a required keyword matched.
    NoCategoryMatch,
    /// Typed only as a bar or night club under the food intent.
    PureBarForFood,
    /// Typed only as a café or bakery under the drinks intent.
    PureCafeForDrinks,
    /// Known price level outside every active price band.
    PriceOutOfBand { level: u8, tokens: Vec<PreferenceToken> },
    /// Price unknown while only `cheap` is active.
    PriceUnknown,
    /// Indoor/outdoor mismatch where the setting is load-bearing.
    SettingMismatch { wanted: PreferenceToken },
    /// Descriptive text mentions admission, tickets, cover charges and similar.
    PaidSignal { keyword: String },
    /// Not priced free and not explicitly tagged free.
    NotFree,
    /// Outside the free-outdoor allow-list.
    NotOutdoorFriendly,
    /// A food or drink establishment, by type or by name.
    FoodOrDrinkEstablishment { matched: String },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludedType { tag } => write!(f, "excluded type `{tag}`"),
            Self::ExcludedKeyword { keyword } => write!(f, "excluded keyword `{keyword}`"),
            Self::NoCategoryMatch => f.write_str("no allowed type or required keyword matched"),
            Self::PureBarForFood => f.write_str("pure bar is not a food venue"),
            Self::PureCafeForDrinks => f.write_str("pure cafe is not a drinks venue"),
            Self::PriceOutOfBand { level, tokens } => {
                let names: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
                write!(f, "price level {level} outside [{}]", names.join(", "))
            }
            Self::PriceUnknown => f.write_str("price unknown, cannot confirm cheap"),
            Self::SettingMismatch { wanted } => write!(f, "setting is not {wanted}"),
            Self::PaidSignal { keyword } => write!(f, "paid signal `{keyword}`"),
            Self::NotFree => f.write_str("not free"),
            Self::NotOutdoorFriendly => f.write_str("not a free outdoor place"),
            Self::FoodOrDrinkEstablishment { matched } => {
                write!(f, "food or drink establishment (`{matched}`)")
            }
        }
    }
}

/// A dropped candidate, annotated for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rejection {
    /// [`Candidate::identity`](crate::Candidate::identity) of the dropped record.
    pub identity: String,
    /// The tier that rejected it. `None` for guardrail rejections.
    pub tier: Option<MatchTier>,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn new(identity: impl Into<String>, tier: Option<MatchTier>, reason: RejectionReason) -> Self {
        Self {
            identity: identity.into(),
            tier,
            reason,
        }
    }

    /// Whether this came from an absolute veto rather than a positive-match miss.
    pub fn is_veto(&self) -> bool {
        matches!(
            self.reason,
            RejectionReason::ExcludedType { .. } | RejectionReason::ExcludedKeyword { .. }
        )
    }
}
