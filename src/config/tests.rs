//! Configuration tests
//!
//! Round-trips guard `to_toml` against drifting away from `FileConfig`:
//! every field written out must parse back to the same resolved value.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = ThemeMode::Light;
    config.frame_ms = 16;
    config.mouse_enabled = false;
    config.navigation.wheel_threshold = 150.0;
    config.navigation.cooldown_ms = 750;
    config.typography.max_font_size = 64.0;
    config.cursor.stiffness = 320.0;
    config.contact.rotate_interval_ms = 2500;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file(&config.to_toml()).expect("should parse");
    let restored = Config::from_sources(file, no_env).expect("should resolve");

    assert_eq!(restored.theme, ThemeMode::Light);
    assert_eq!(restored.frame_ms, 16);
    assert!(!restored.mouse_enabled);
    assert_eq!(restored.navigation, config.navigation);
    assert_eq!(restored.typography, config.typography);
    assert_eq!(restored.cursor, config.cursor);
    assert_eq!(restored.contact, config.contact);
    assert!(restored.logging.file_enabled);
    assert_eq!(restored.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Partial files and defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_yields_defaults() {
    let file = Config::parse_file("").expect("empty file is valid");
    let config = Config::from_sources(file, no_env).expect("should resolve");

    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.navigation.wheel_threshold, 100.0);
    assert_eq!(config.navigation.cooldown_ms, 1000);
    assert_eq!(config.typography.min_font_size, 24.0);
    assert_eq!(config.typography.max_font_size, 80.0);
    assert_eq!(config.cursor.normal_dot_size, 20.0);
    assert_eq!(config.cursor.enlarged_dot_size, 35.0);
    assert_eq!(config.contact.rotate_interval_ms, 3000);
    assert_eq!(config.logging.file_prefix, "folio");
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let file = Config::parse_file(
        r#"
[navigation]
cooldown_ms = 400
"#,
    )
    .expect("should parse");
    let config = Config::from_sources(file, no_env).expect("should resolve");

    assert_eq!(config.navigation.cooldown_ms, 400);
    assert_eq!(config.navigation.wheel_threshold, 100.0);
    assert_eq!(config.navigation.wheel_delta_per_notch, 40.0);
}

#[test]
fn test_invalid_numbers_fall_back() {
    let file = Config::parse_file(
        r#"
frame_ms = 0

[navigation]
wheel_threshold = -5.0
wheel_delta_per_notch = 0.0

[cursor]
stiffness = -1.0

[contact]
rotate_interval_ms = 0
"#,
    )
    .expect("should parse");
    let config = Config::from_sources(file, no_env).expect("should resolve");

    assert_eq!(config.frame_ms, 1);
    assert_eq!(config.navigation.wheel_threshold, 100.0);
    assert_eq!(config.navigation.wheel_delta_per_notch, 40.0);
    assert_eq!(config.cursor.stiffness, 200.0);
    assert_eq!(config.contact.rotate_interval_ms, 3000);
}

#[test]
fn test_inverted_font_bounds_are_kept_for_font_scale() {
    use crate::tracker::FontScale;

    let file = Config::parse_file(
        r#"
[typography]
min_font_size = 80.0
max_font_size = 24.0
"#,
    )
    .expect("should parse");
    let config = Config::from_sources(file, no_env).expect("should resolve");

    let scale = FontScale::new(
        config.typography.min_font_size,
        config.typography.max_font_size,
    );
    assert_eq!(scale.floor(), 24.0);
    assert_eq!(scale.ceiling(), 80.0);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file("theme = [").is_err());
    assert!(Config::parse_file("frame_ms = \"fast\"").is_err());
}

#[test]
fn test_unknown_theme_is_an_error() {
    let file = Config::parse_file(r#"theme = "sepia""#).expect("should parse");
    assert!(Config::from_sources(file, no_env).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment overrides
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file(
        r#"
theme = "dark"
mouse = true

[logging]
file_dir = "/var/log/folio"
"#,
    )
    .expect("should parse");
    let env = env_from(&[
        ("FOLIO_THEME", "light"),
        ("FOLIO_NO_MOUSE", "1"),
        ("FOLIO_LOG_DIR", "/tmp/folio-logs"),
    ]);
    let config = Config::from_sources(file, env).expect("should resolve");

    assert_eq!(config.theme, ThemeMode::Light);
    assert!(!config.mouse_enabled);
    assert_eq!(
        config.logging.file_dir,
        std::path::PathBuf::from("/tmp/folio-logs")
    );
}

#[test]
fn test_no_mouse_only_disables_on_truthy_values() {
    let config = Config::from_sources(
        FileConfig::default(),
        env_from(&[("FOLIO_NO_MOUSE", "0")]),
    )
    .expect("should resolve");
    assert!(config.mouse_enabled);

    let config = Config::from_sources(
        FileConfig::default(),
        env_from(&[("FOLIO_NO_MOUSE", "TRUE")]),
    )
    .expect("should resolve");
    assert!(!config.mouse_enabled);
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!(LogRotation::parse("HOURLY"), Some(LogRotation::Hourly));
    assert_eq!(LogRotation::parse(" never "), Some(LogRotation::Never));
    assert_eq!(LogRotation::parse("weekly"), None);
}

#[test]
fn test_unknown_log_rotation_is_an_error() {
    let file =
        Config::parse_file("[logging]\nfile_rotation = \"weekly\"\n").expect("valid toml");
    let err = Config::from_sources(file, no_env).expect_err("should reject rotation");
    assert!(format!("{:#}", err).contains("weekly"));
}

#[test]
fn test_log_level_is_validated_and_normalized() {
    let file = Config::parse_file("[logging]\nlevel = \"DEBUG\"\n").expect("valid toml");
    let config = Config::from_sources(file, no_env).expect("should resolve");
    assert_eq!(config.logging.level, "debug");

    let file = Config::parse_file("[logging]\nlevel = \"loud\"\n").expect("valid toml");
    assert!(Config::from_sources(file, no_env).is_err());
}
