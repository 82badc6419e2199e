//! Config file parsing as seen by the binary.

use std::fs;

use tempfile::tempdir;

use kivaw_config::{ConfigError, KivawConfig};
use kivaw_engine::UiOptions;

#[test]
fn config_file_enables_ui_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nascii_only = true\nreduced_motion = true\n").unwrap();

    let config = KivawConfig::load_from(&path).unwrap().unwrap();
    let options = config.ui_options();
    assert!(options.ascii_only);
    assert!(!options.high_contrast);
    assert!(options.reduced_motion);

    let flags = UiOptions {
        high_contrast: true,
        ..UiOptions::default()
    };
    let merged = flags.merge(options);
    assert!(merged.ascii_only && merged.high_contrast && merged.reduced_motion);
}

#[test]
fn missing_config_file_is_not_an_error() {
    let dir = tempdir().unwrap();
    let loaded = KivawConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = yes").unwrap();

    let err = KivawConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn empty_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = KivawConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(config.ui_options(), UiOptions::default());
}
