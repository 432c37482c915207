use marketrank_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MarketrankConfig::from_toml("").unwrap();

    // Attention defaults
    assert_eq!(config.attention.max_entries, 32);
    assert_eq!(config.attention.load_decay_base, 0.94);
    assert_eq!(config.attention.load_decay_window_minutes, 18.0);
    assert_eq!(config.attention.flush_decay, 0.985);
    assert_eq!(config.attention.prune_threshold, 0.01);

    // Browsing defaults
    assert_eq!(config.browsing.max_signals, 6);
    assert_eq!(config.browsing.max_tracked, 64);

    // Needs defaults
    assert_eq!(config.needs.max_needs, 4);
    assert_eq!(config.needs.enterprise_team_size, 500);
    assert_eq!(config.needs.team_productivity_size, 120);

    // Ranking defaults
    assert_eq!(config.ranking.active_need_tag, 7.0);
    assert_eq!(config.ranking.industry, 6.0);
    assert_eq!(config.ranking.browsing_category, 1.1);

    // Aggregate defaults
    assert!(config.aggregate.background_enabled);
    assert_eq!(config.aggregate.combo_size, 3);
    assert_eq!(config.aggregate.combo_min_overlap, 2);

    // Search defaults
    assert_eq!(config.search.debounce_ms, 300);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[attention]
max_entries = 16

[aggregate]
background_enabled = false

[search]
debounce_ms = 150
"#;
    let config = MarketrankConfig::from_toml(toml).unwrap();
    assert_eq!(config.attention.max_entries, 16);
    // Non-overridden fields keep defaults
    assert_eq!(config.attention.flush_decay, 0.985);
    assert!(!config.aggregate.background_enabled);
    assert_eq!(config.aggregate.combo_size, 3);
    assert_eq!(config.search.debounce_ms, 150);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = MarketrankConfig::from_toml("[attention\nmax_entries = ").unwrap_err();
    assert!(matches!(
        err,
        marketrank_core::MarketrankError::ConfigError { .. }
    ));
}

#[test]
fn config_serde_roundtrip() {
    let config = MarketrankConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = MarketrankConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.attention.storage_key,
        config.attention.storage_key
    );
    assert_eq!(roundtripped.ranking.need_tag, config.ranking.need_tag);
}

#[test]
fn config_from_missing_file_is_config_error() {
    let err = MarketrankConfig::from_file("/definitely/not/here/marketrank.toml").unwrap_err();
    assert!(err.to_string().contains("marketrank.toml"));
}
