//! Category validation for a single candidate against a single intent.

use std::fmt;

use wheel_core::{Candidate, Intent, MatchTier, RejectionReason};
use wheel_rules::{overlap, RuleSet, RuleTable};

/// The positive signal that qualified a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSignal {
    AllowedType(String),
    Keyword(String),
    /// The intent has no keyword requirement (surprise).
    Unrestricted,
    /// Widening tiers only.
    FallbackType(String),
}

impl fmt::Display for MatchSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllowedType(tag) => write!(f, "allowed type `{tag}`"),
            Self::Keyword(kw) => write!(f, "keyword `{kw}`"),
            Self::Unrestricted => f.write_str("no keyword requirement"),
            Self::FallbackType(tag) => write!(f, "fallback type `{tag}`"),
        }
    }
}

/// Outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(MatchSignal),
    Invalid(RejectionReason),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Human-readable reason, for diagnostics.
    pub fn reason(&self) -> String {
        match self {
            Self::Valid(signal) => format!("matched {signal}"),
            Self::Invalid(reason) => reason.to_string(),
        }
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

/// Strict validation, as used by tier 1.
pub fn validate(table: &RuleTable, candidate: &Candidate, intent: Intent) -> Validation {
    validate_for_tier(table, candidate, intent, MatchTier::Strict)
}

/// Validate with the positive matching rules of `tier`.
///
/// Vetoes and the category special cases hold at every tier; only the
/// positive criteria loosen.
pub fn validate_for_tier(
    table: &RuleTable,
    candidate: &Candidate,
    intent: Intent,
    tier: MatchTier,
) -> Validation {
    let rules = table.rules(intent);
    let text = candidate.searchable_text();

    if let Some(reason) = veto(rules, candidate, &text) {
        return Validation::Invalid(reason);
    }

    let signal = match tier {
        MatchTier::Strict => strict_signal(rules, candidate, &text),
        MatchTier::FallbackTypes | MatchTier::Relaxed => widened_signal(rules, candidate),
    };
    let Some(signal) = signal else {
        return Validation::Invalid(RejectionReason::NoCategoryMatch);
    };

    if let Some(reason) = special_case(intent, candidate) {
        return Validation::Invalid(reason);
    }

    Validation::Valid(signal)
}

/// Excluded types, then excluded keywords.
pub(crate) fn veto(rules: &RuleSet, candidate: &Candidate, text: &str) -> Option<RejectionReason> {
    if let Some(tag) = rules.excluded_type(candidate) {
        return Some(RejectionReason::ExcludedType {
            tag: tag.to_string(),
        });
    }
    rules
        .excluded_keyword(text)
        .map(|kw| RejectionReason::ExcludedKeyword {
            keyword: kw.to_string(),
        })
}

fn strict_signal(rules: &RuleSet, candidate: &Candidate, text: &str) -> Option<MatchSignal> {
    if let Some(tag) = rules.allowed_type(candidate) {
        return Some(MatchSignal::AllowedType(tag.to_string()));
    }
    if !rules.has_keyword_requirement() {
        return Some(MatchSignal::Unrestricted);
    }
    rules
        .required_keyword(text)
        .map(|kw| MatchSignal::Keyword(kw.to_string()))
}

/// Tiers 2 and 3: the keyword clause is gone, types must intersect
/// `allowed ∪ fallback`.
fn widened_signal(rules: &RuleSet, candidate: &Candidate) -> Option<MatchSignal> {
    if let Some(tag) = rules.allowed_type(candidate) {
        return Some(MatchSignal::AllowedType(tag.to_string()));
    }
    rules
        .fallback_type(candidate)
        .map(|tag| MatchSignal::FallbackType(tag.to_string()))
}

fn special_case(intent: Intent, candidate: &Candidate) -> Option<RejectionReason> {
    match intent {
        Intent::Food if overlap::is_pure_bar(candidate) => Some(RejectionReason::PureBarForFood),
        Intent::Drinks if overlap::is_pure_cafe(candidate) => {
            Some(RejectionReason::PureCafeForDrinks)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static RuleTable {
        RuleTable::standard()
    }

    #[test]
    fn excluded_type_wins_over_allowed_type() {
        let c = Candidate::new("p", "Bayside Diner", &["restaurant", "gas_station"]);
        let v = validate(table(), &c, Intent::Food);
        assert_eq!(
            v,
            Validation::Invalid(RejectionReason::ExcludedType {
                tag: "gas_station".into()
            })
        );
        assert!(v.reason().contains("gas_station"));
    }

    #[test]
    fn excluded_keyword_is_case_insensitive() {
        let c = Candidate::new("p", "Ridge AUTO REPAIR & Grill", &["restaurant"]);
        let v = validate(table(), &c, Intent::Food);
        assert!(matches!(
            v,
            Validation::Invalid(RejectionReason::ExcludedKeyword { .. })
        ));
    }

    #[test]
    fn keyword_qualifies_without_allowed_type() {
        let c = Candidate::new("p", "Noodle Bar 88", &["point_of_interest"]);
        assert_eq!(
            validate(table(), &c, Intent::Food),
            Validation::Valid(MatchSignal::Keyword("noodle".into()))
        );
    }

    #[test]
    fn no_signal_is_no_category_match() {
        let c = Candidate::new("p", "Mystery Spot", &["point_of_interest"]);
        assert_eq!(
            validate(table(), &c, Intent::Shopping),
            Validation::Invalid(RejectionReason::NoCategoryMatch)
        );
    }

    #[test]
    fn surprise_keyword_clause_is_vacuous() {
        let c = Candidate::new("p", "Mystery Spot", &["point_of_interest"]);
        assert_eq!(
            validate(table(), &c, Intent::Surprise),
            Validation::Valid(MatchSignal::Unrestricted)
        );
    }

    #[test]
    fn pure_bar_is_not_food() {
        let c = Candidate::new("p", "Taproom Kitchen", &["bar"]);
        let v = validate(table(), &c, Intent::Food);
        assert_eq!(v, Validation::Invalid(RejectionReason::PureBarForFood));
        assert!(v.reason().contains("pure bar"));
    }

    #[test]
    fn gastropub_is_food() {
        let c = Candidate::new("p", "The Crown", &["bar", "restaurant"]);
        assert!(validate(table(), &c, Intent::Food).is_valid());
    }

    #[test]
    fn pure_cafe_is_not_drinks() {
        let c = Candidate::new("p", "Espresso Bar", &["cafe"]);
        assert_eq!(
            validate(table(), &c, Intent::Drinks),
            Validation::Invalid(RejectionReason::PureCafeForDrinks)
        );
    }

    #[test]
    fn fallback_type_only_counts_when_widening() {
        let c = Candidate::new("p", "Central Library", &["library"]);
        assert!(!validate(table(), &c, Intent::Activity).is_valid());
        assert_eq!(
            validate_for_tier(table(), &c, Intent::Activity, MatchTier::FallbackTypes),
            Validation::Valid(MatchSignal::FallbackType("library".into()))
        );
    }

    #[test]
    fn keyword_only_match_is_dropped_when_widening() {
        let c = Candidate::new("p", "Noodle Bar 88", &["point_of_interest"]);
        assert!(!validate_for_tier(table(), &c, Intent::Food, MatchTier::Relaxed).is_valid());
    }

    #[test]
    fn vetoes_hold_at_every_tier() {
        let c = Candidate::new("p", "Lakeside RV Park", &["campground", "rv_park"]);
        for tier in MatchTier::ALL {
            let v = validate_for_tier(table(), &c, Intent::Activity, tier);
            assert!(
                matches!(v, Validation::Invalid(RejectionReason::ExcludedType { .. })),
                "{tier:?}"
            );
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let c = Candidate::new("p", "Sunset Trail", &["hiking_area"]);
        let first = validate(table(), &c, Intent::Activity);
        let second = validate(table(), &c, Intent::Activity);
        assert_eq!(first, second);
        assert_eq!(first.reason(), second.reason());
    }
}
