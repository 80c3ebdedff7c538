//! Compiled word lists for the guardrails.
//!
//! Patterns that fail to compile yield `None` and match nothing.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! guard_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Paid signals in descriptive text ───────────────────────────────────────
guard_pattern!(
    RE_PAID_SIGNAL,
    r"(?i)(?:\b(?:admission|tickets?|ticketed|cover charge|entry fee|entrance fee|day pass|membership required|reservations? required|per person)\b|\$\d+)"
);

// ── Phrases that deny a charge ("free admission", "no cover charge") ──────
guard_pattern!(
    RE_FREE_PHRASE,
    r"(?i)\b(?:free|no)\s+(?:admission|tickets?|cover charge|entry fee|entrance fee|day pass)\b|\b(?:admission|entry|entrance) (?:is )?free\b"
);

// ── Food/drink words in a place name ───────────────────────────────────────
guard_pattern!(
    RE_FOOD_DRINK_NAME,
    r"(?i)\b(?:grill|tavern|pub|bar|brewery|brewing|taproom|saloon|pizzeria|pizza|diner|cafe|café|coffee|bistro|eatery|kitchen|bakery|burger|taqueria|cantina|restaurant|deli|steakhouse|smokehouse|bbq|wings)\b"
);

// ── Chain name fragments (prefix match) ───────────────────────────────────
guard_pattern!(
    RE_CHAIN_FRAGMENT,
    r"(?i)\b(?:mcdonald|starbucks|burger king|wendy'?s|taco bell|subway|chick-fil-a|dunkin|applebee|chili'?s|buffalo wild wings|hooters|7-eleven|domino|pizza hut|kfc|panera|chipotle|popeyes|sonic drive|arby|dairy queen|tim horton|olive garden|ihop|denny)"
);

/// First match of `pattern` in `text`, lowercased.
pub fn first_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    re.find(text).map(|m| m.as_str().to_lowercase())
}

/// First paid signal in `text`, ignoring phrases that deny a charge.
pub fn paid_signal(text: &str) -> Option<String> {
    match RE_FREE_PHRASE.as_ref() {
        Some(free) => first_match(&RE_PAID_SIGNAL, &free.replace_all(text, " ")),
        None => first_match(&RE_PAID_SIGNAL, text),
    }
}

/// Health check: names of patterns that failed to compile.
pub fn failed_patterns() -> Vec<&'static str> {
    [
        ("paid_signal", &RE_PAID_SIGNAL),
        ("free_phrase", &RE_FREE_PHRASE),
        ("food_drink_name", &RE_FOOD_DRINK_NAME),
        ("chain_fragment", &RE_CHAIN_FRAGMENT),
    ]
    .into_iter()
    .filter(|(_, re)| re.is_none())
    .map(|(name, _)| name)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert!(failed_patterns().is_empty(), "{:?}", failed_patterns());
    }

    #[test]
    fn paid_signal_matches_common_phrasing() {
        assert_eq!(
            first_match(&RE_PAID_SIGNAL, "General Admission $25"),
            Some("admission".to_string())
        );
        assert!(first_match(&RE_PAID_SIGNAL, "Tickets at the door").is_some());
        assert!(first_match(&RE_PAID_SIGNAL, "Open lawn by the river").is_none());
    }

    #[test]
    fn phrases_denying_a_charge_are_not_paid_signals() {
        assert_eq!(paid_signal("Free admission every day"), None);
        assert_eq!(paid_signal("No cover charge before 9"), None);
        assert_eq!(paid_signal("Entry is free for all ages"), None);
        assert_eq!(
            paid_signal("Free admission, parking $10"),
            Some("$10".to_string())
        );
        assert_eq!(
            paid_signal("Tickets required for the tower"),
            Some("tickets".to_string())
        );
    }

    #[test]
    fn food_words_need_word_boundaries() {
        assert!(first_match(&RE_FOOD_DRINK_NAME, "Meadow Pub").is_some());
        assert!(first_match(&RE_FOOD_DRINK_NAME, "Barton Creek Greenbelt").is_none());
        assert!(first_match(&RE_FOOD_DRINK_NAME, "Republic Square").is_none());
    }

    #[test]
    fn chain_fragments_match_possessives() {
        assert_eq!(
            first_match(&RE_CHAIN_FRAGMENT, "McDonald's Playplace"),
            Some("mcdonald".to_string())
        );
        assert!(first_match(&RE_CHAIN_FRAGMENT, "Starbucks Reserve Plaza").is_some());
        assert!(first_match(&RE_CHAIN_FRAGMENT, "Kfc Express").is_some());
    }
}
