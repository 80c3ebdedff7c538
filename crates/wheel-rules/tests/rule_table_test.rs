use wheel_core::{Candidate, Intent, PreferenceToken};
use wheel_rules::setting::{classify, Setting};
use wheel_rules::{PriceBand, RuleTable};

#[test]
fn plumbing_contractor_is_vetoed_for_every_intent() {
    let table = RuleTable::standard();
    let c = Candidate::new("p", "Ace Plumbing Contractor", &["plumber", "point_of_interest"]);
    for intent in Intent::ALL {
        let rules = table.rules(intent);
        assert_eq!(rules.excluded_type(&c), Some("plumber"), "{intent}");
        assert!(rules.excluded_keyword(&c.searchable_text()).is_some(), "{intent}");
    }
}

#[test]
fn fallback_types_are_looser_than_allowed() {
    let table = RuleTable::standard();
    for intent in Intent::CONCRETE {
        let rules = table.rules(intent);
        assert!(!rules.fallback_allowed_types.is_empty(), "{intent}");
        assert!(
            rules.fallback_allowed_types.is_disjoint(&rules.allowed_types),
            "{intent} fallback overlaps allowed"
        );
    }
}

#[test]
fn only_surprise_lacks_keyword_requirement() {
    let table = RuleTable::standard();
    for intent in Intent::ALL {
        assert_eq!(
            table.rules(intent).has_keyword_requirement(),
            !intent.is_surprise(),
            "{intent}"
        );
    }
}

#[test]
fn cheap_band_covers_free_and_inexpensive() {
    let band = PriceBand::for_token(PreferenceToken::Cheap).unwrap();
    assert!(band.contains(0));
    assert!(band.contains(1));
    assert!(!band.contains(2));
}

#[test]
fn park_is_outdoor_museum_is_indoor() {
    assert_eq!(
        classify(&Candidate::new("a", "Riverside", &["park"])),
        Setting::Outdoor
    );
    assert_eq!(
        classify(&Candidate::new("b", "City Museum", &["museum"])),
        Setting::Indoor
    );
}
