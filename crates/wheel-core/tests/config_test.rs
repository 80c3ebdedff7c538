use wheel_core::config::*;
use wheel_core::errors::ConfigError;
use wheel_core::Intent;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = WheelConfig::from_toml("").unwrap();

    // Pipeline defaults
    assert_eq!(config.pipeline.min_results, 8);
    assert_eq!(config.pipeline.shuffle_weight, 0.0);
    assert!(config.pipeline.tier3_advisory_constraints);

    // Guardrail defaults
    assert_eq!(config.guardrails.fallback_floor, 3);
    assert_eq!(config.guardrails.fallback_target, 6);
    assert!(config.guardrails.extra_paid_signals.is_empty());

    // Cache defaults
    assert_eq!(config.cache.ttl_secs, 600);
    assert_eq!(config.cache.max_entries, 512);
    assert_eq!(config.cache.coordinate_precision, 3);

    assert!(config.rules.overrides.is_empty());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[pipeline]
min_results = 12
shuffle_weight = 0.75

[guardrails]
extra_paid_signals = ["donation required"]

[rules.activity]
extra_excluded_keywords = ["timeshare"]
"#;
    let config = WheelConfig::from_toml(toml).unwrap();
    assert_eq!(config.pipeline.min_results, 12);
    assert_eq!(config.pipeline.shuffle_weight, 0.75);
    // Non-overridden fields keep defaults
    assert!(config.pipeline.tier3_advisory_constraints);
    assert_eq!(config.guardrails.fallback_target, 6);
    assert_eq!(config.guardrails.extra_paid_signals, vec!["donation required"]);

    let resolved = config.rules.resolved().unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].0, Intent::Activity);
    assert_eq!(resolved[0].1.extra_excluded_keywords, vec!["timeshare"]);
}

#[test]
fn config_rejects_unknown_intent_section() {
    let err = WheelConfig::from_toml("[rules.brunch]\nextra_allowed_types = [\"diner\"]\n")
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownIntent {
            name: "brunch".into()
        }
    );
}

#[test]
fn config_rejects_out_of_range_shuffle_weight() {
    let err = WheelConfig::from_toml("[pipeline]\nshuffle_weight = 3.0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "pipeline.shuffle_weight",
            ..
        }
    ));
}

#[test]
fn config_rejects_target_below_floor() {
    let err = WheelConfig::from_toml("[guardrails]\nfallback_floor = 5\nfallback_target = 2\n")
        .unwrap_err();
    assert!(err.to_string().contains("fallback_target"));
}

#[test]
fn config_rejects_excess_coordinate_precision() {
    assert!(WheelConfig::from_toml("[cache]\ncoordinate_precision = 9\n").is_err());
}

#[test]
fn config_reports_malformed_toml() {
    let err = WheelConfig::from_toml("[pipeline\nmin_results = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = WheelConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = WheelConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.pipeline.min_results, config.pipeline.min_results);
    assert_eq!(roundtripped.cache.ttl_secs, config.cache.ttl_secs);
}
