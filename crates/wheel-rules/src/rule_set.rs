use std::collections::BTreeSet;

use wheel_core::config::RuleOverride;
use wheel_core::Candidate;

use crate::catalog::{IntentRow, GLOBAL_EXCLUDED_KEYWORDS, GLOBAL_EXCLUDED_TYPES};

/// One intent's matching rules.
///
/// Vetoes (`excluded_types`, `excluded_keywords`) are absolute: they apply at
/// every widening tier. Everything else is positive matching that widening
/// may loosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub allowed_types: BTreeSet<String>,
    /// Ordered; the first hit is reported. Empty means no keyword requirement.
    pub required_keywords: Vec<String>,
    pub excluded_types: BTreeSet<String>,
    pub excluded_keywords: Vec<String>,
    /// Consulted only when widening.
    pub fallback_allowed_types: BTreeSet<String>,
}

impl RuleSet {
    /// Build from a static row, with the global veto lists merged in.
    pub fn from_row(row: &IntentRow) -> Self {
        let mut set = Self::global_vetoes();
        set.allowed_types.extend(owned(row.allowed_types));
        set.required_keywords.extend(owned(row.required_keywords));
        set.excluded_types.extend(owned(row.excluded_types));
        extend_unique(&mut set.excluded_keywords, owned(row.excluded_keywords));
        set.fallback_allowed_types
            .extend(owned(row.fallback_allowed_types));
        set
    }

    /// Only the vetoes every intent shares.
    pub fn global_vetoes() -> Self {
        Self {
            excluded_types: owned(GLOBAL_EXCLUDED_TYPES).collect(),
            excluded_keywords: owned(GLOBAL_EXCLUDED_KEYWORDS).collect(),
            ..Self::default()
        }
    }

    /// Merge an additive override. Lowercases keywords so matching stays
    /// case-insensitive.
    pub fn merge(&mut self, rule: &RuleOverride) {
        self.allowed_types
            .extend(normalized(&rule.extra_allowed_types));
        extend_unique(
            &mut self.required_keywords,
            normalized(&rule.extra_required_keywords),
        );
        self.excluded_types
            .extend(normalized(&rule.extra_excluded_types));
        extend_unique(
            &mut self.excluded_keywords,
            normalized(&rule.extra_excluded_keywords),
        );
        self.fallback_allowed_types
            .extend(normalized(&rule.extra_fallback_types));
    }

    /// First candidate type the intent vetoes.
    pub fn excluded_type<'c>(&self, candidate: &'c Candidate) -> Option<&'c str> {
        candidate
            .types
            .iter()
            .map(String::as_str)
            .find(|t| self.excluded_types.contains(*t))
    }

    /// First vetoed keyword found in lowercased `text`.
    pub fn excluded_keyword(&self, text: &str) -> Option<&str> {
        self.excluded_keywords
            .iter()
            .map(String::as_str)
            .find(|kw| text.contains(kw))
    }

    /// First candidate type that directly qualifies.
    pub fn allowed_type<'c>(&self, candidate: &'c Candidate) -> Option<&'c str> {
        candidate
            .types
            .iter()
            .map(String::as_str)
            .find(|t| self.allowed_types.contains(*t))
    }

    /// First required keyword found in lowercased `text`.
    pub fn required_keyword(&self, text: &str) -> Option<&str> {
        self.required_keywords
            .iter()
            .map(String::as_str)
            .find(|kw| text.contains(kw))
    }

    /// First candidate type in the widening set.
    pub fn fallback_type<'c>(&self, candidate: &'c Candidate) -> Option<&'c str> {
        candidate
            .types
            .iter()
            .map(String::as_str)
            .find(|t| self.fallback_allowed_types.contains(*t))
    }

    /// Whether the keyword clause is vacuously satisfied.
    pub fn has_keyword_requirement(&self) -> bool {
        !self.required_keywords.is_empty()
    }
}

fn owned(items: &'static [&'static str]) -> impl Iterator<Item = String> {
    items.iter().map(|s| (*s).to_string())
}

fn normalized(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

fn extend_unique(target: &mut Vec<String>, items: impl Iterator<Item = String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
