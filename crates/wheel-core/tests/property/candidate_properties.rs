use proptest::prelude::*;
use serde_json::json;
use wheel_core::candidate::ingest;
use wheel_core::Candidate;

proptest! {
    #[test]
    fn ingest_never_loses_or_invents_records(
        names in prop::collection::vec(prop::option::of("[a-zA-Z ]{0,12}"), 0..20),
        levels in prop::collection::vec(-2i64..8, 20),
    ) {
        let records: Vec<_> = names
            .iter()
            .zip(levels.iter())
            .enumerate()
            .map(|(i, (name, level))| json!({
                "id": format!("p{i}"),
                "name": name,
                "price_level": level,
            }))
            .collect();

        let report = ingest(&records);
        prop_assert_eq!(report.candidates.len() + report.skipped.len(), records.len());
        for c in &report.candidates {
            prop_assert!(!c.name.is_empty());
            prop_assert!(c.price_level.map_or(true, |l| l <= 4));
        }
    }

    #[test]
    fn identity_is_stable(name in "[a-zA-Z]{1,10}", with_id in any::<bool>()) {
        let mut c = Candidate::new("x", name.clone(), &["park"]);
        if !with_id {
            c.id = None;
        }
        prop_assert_eq!(c.identity(), c.clone().identity());
        if !with_id {
            prop_assert_eq!(c.identity(), name.to_lowercase());
        }
    }
}
