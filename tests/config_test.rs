//! Tests for preference persistence.

use std::fs;
use tempfile::tempdir;
use xtmines::xtm_game::{Config, ConfigError, load_config_from, save_config_to};

#[test]
fn test_round_trip_through_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("xtmines.toml");
    let cfg = Config {
        language: "zh".to_string(),
        ascii_icons: true,
        show_indicator: false,
        reveal_delay_ms: 120,
        default_click_limit: 4,
    };
    save_config_to(&path, &cfg).unwrap();
    assert_eq!(load_config_from(&path).unwrap(), cfg);
}

#[test]
fn test_missing_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("xtmines.toml");
    fs::write(&path, "ascii_icons = true\n").unwrap();
    let cfg = load_config_from(&path).unwrap();
    let defaults = Config::default();
    assert!(cfg.ascii_icons);
    assert_eq!(cfg.reveal_delay_ms, defaults.reveal_delay_ms);
    assert_eq!(cfg.default_click_limit, defaults.default_click_limit);
    assert_eq!(cfg.show_indicator, defaults.show_indicator);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("xtmines.toml");
    fs::write(&path, "reveal_delay_ms = \"fast\"\n").unwrap();
    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("not valid TOML"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_startup_click_limit_is_clamped() {
    let mut cfg = Config::default();
    cfg.default_click_limit = 0;
    assert_eq!(cfg.click_limit(), 1);
    cfg.default_click_limit = 12;
    assert_eq!(cfg.click_limit(), 5);
}
