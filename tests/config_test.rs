//! Integration tests for Settings config loading with layered merge semantics.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test explicit config files layered over defaults.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use lottie_keypath::application::ApplicationError;
use lottie_keypath::config::{RenderStyle, Settings};

#[test]
fn given_no_config_file_when_load_then_defaults() {
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_explicit_config_when_load_then_overrides_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keypath.toml");
    fs::write(
        &path,
        r#"
style = "tree"
separator = " / "
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.style, RenderStyle::Tree);
    assert_eq!(settings.separator, " / ");
    assert_eq!(settings.indent, "  ", "unspecified fields keep defaults");
    assert_eq!(settings.placeholder, "<No Data>");
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    let result = Settings::load(Some(Path::new("/nonexistent/keypath.toml")));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_when_load_then_config_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "style = [").unwrap();

    let err = Settings::load(Some(path.as_path())).unwrap_err();

    assert!(err.to_string().contains("broken.toml"), "got: {err}");
}

#[test]
fn given_unknown_style_in_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keypath.toml");
    fs::write(&path, "style = \"fancy\"\n").unwrap();

    let result = Settings::load(Some(path.as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_shown_settings_when_written_back_then_loads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keypath.toml");
    let settings = Settings {
        style: RenderStyle::Tree,
        indent: "\t".into(),
        separator: "::".into(),
        placeholder: "(empty)".into(),
    };
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load(Some(path.as_path())).unwrap();

    assert_eq!(loaded, settings);
}
