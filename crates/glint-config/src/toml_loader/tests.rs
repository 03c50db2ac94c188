//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::GlintConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_glint_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, glint_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_from_path_reads_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bloom]\nradius = 12\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.bloom.radius, 12);
    assert_eq!(config.window.width, 1280);
}

#[test]
fn load_from_path_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bloom\nradius = ").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, glint_common::ConfigError::ParseError(_)));
}

#[test]
fn load_from_path_keeps_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bloom]\nradius = 0\n").unwrap();

    // validation failures only warn
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.bloom.radius, 0);
}

#[test]
fn create_default_config_writes_parseable_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    let defaults = GlintConfig::default();
    assert_eq!(config.bloom.radius, defaults.bloom.radius);
    assert_eq!(config.textures.solid_color, defaults.textures.solid_color);
}

#[test]
fn default_config_path_ends_with_glint_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("glint/config.toml"));
    }
}
