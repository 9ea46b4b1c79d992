//! Integration tests for Settings loading.
//!
//! These tests pass an explicit config file from a temp directory; the
//! global XDG file is not created by the tests.

use std::fs;

use tempfile::TempDir;

use btviz::application::ApplicationError;
use btviz::config::{Settings, DEFAULT_INTERVAL_MS};
use btviz::domain::NullPolicy;

#[test]
fn given_defaults_when_created_then_match_reference_behavior() {
    let settings = Settings::default();

    assert_eq!(settings.interval_ms, DEFAULT_INTERVAL_MS);
    assert_eq!(settings.null_policy, NullPolicy::Preserve);
    assert!(!settings.lenient);
    assert!(settings.color);
}

#[test]
fn given_explicit_config_when_loading_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("btviz.toml");
    fs::write(
        &path,
        r#"
interval_ms = 250
null_policy = "drop"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.interval_ms, 250);
    assert_eq!(settings.null_policy, NullPolicy::Drop);
}

#[test]
fn given_missing_explicit_config_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_null_policy_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("btviz.toml");
    fs::write(&path, "null_policy = \"sometimes\"\n").unwrap();

    let result = Settings::load(Some(&path));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("config error"), "{}", err);
}
