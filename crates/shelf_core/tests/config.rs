use shelf_core::{ConfigError, ShelfConfig};

#[test]
fn defaults_match_widget_constants() {
    let config = ShelfConfig::default();
    assert_eq!(config.page_size, 5);
    assert_eq!(config.window_duration_ms, 600_000);
    assert_eq!(config.poll_interval_ms, 10_000);
    assert_eq!(config.seed_mix, 0x9E37_79B9);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn partial_ron_falls_back_to_defaults() {
    let config: ShelfConfig = ron::from_str("(page_size: 8)").expect("parse");
    assert_eq!(config.page_size, 8);
    assert_eq!(config.window_duration_ms, 600_000);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(ron::from_str::<ShelfConfig>("(single_card: true)").is_err());
}

#[test]
fn zero_values_fail_validation() {
    let zero_page = ShelfConfig {
        page_size: 0,
        ..ShelfConfig::default()
    };
    assert_eq!(zero_page.validate(), Err(ConfigError::ZeroPageSize));

    let zero_window = ShelfConfig {
        window_duration_ms: 0,
        ..ShelfConfig::default()
    };
    assert_eq!(zero_window.validate(), Err(ConfigError::ZeroWindowDuration));

    let zero_poll = ShelfConfig {
        poll_interval_ms: 0,
        ..ShelfConfig::default()
    };
    assert_eq!(zero_poll.validate(), Err(ConfigError::ZeroPollInterval));
}
