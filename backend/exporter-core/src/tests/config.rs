// Unit tests for ExporterConfig loading and validation

use crate::config::{CONFIG_FILE_NAME, ExporterConfig};
use crate::error::config::ConfigError;

use std::time::Duration;

#[test]
fn given_no_config_file_when_loaded_then_defaults_are_used() {
    let dir = tempfile::tempdir().unwrap();

    let config = ExporterConfig::load(dir.path()).unwrap();

    assert_eq!(config, ExporterConfig::default());
    assert_eq!(config.timeout(), Duration::from_secs(100));
    assert_eq!(config.textures_dir, "textures");
    assert_eq!(config.texture_extensions, vec!["png", "jpg"]);
}

/// **VALUE**: Partial files keep defaults for the keys they omit.
///
/// **WHY THIS MATTERS**: Studios typically override one value (the timeout for large
/// uploads). Forcing every key would break every existing file on upgrade.
#[test]
fn given_partial_config_file_when_loaded_then_missing_keys_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "timeout_secs = 30\n").unwrap();

    let config = ExporterConfig::load(dir.path()).unwrap();

    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.textures_dir, "textures");
}

#[test]
fn given_garbage_config_file_when_loaded_then_parse_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "timeout_secs = [not toml").unwrap();

    let err = ExporterConfig::load(dir.path()).unwrap_err();

    match err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

/// **VALUE**: Out-of-range values are rejected instead of silently used.
///
/// **BUG THIS CATCHES**: A zero timeout makes every request fail instantly with a
/// TimeoutError that looks like a server problem.
#[test]
fn given_invalid_values_when_validated_then_validation_error() {
    let cases = [
        "timeout_secs = 0",
        "timeout_secs = 100000",
        "version = 2",
        "textures_dir = \"\"",
        "textures_dir = \"/abs/textures\"",
        "texture_extensions = []",
        "texture_extensions = [\".png\"]",
        "user_agent = \" \"",
    ];

    for case in cases {
        let result = ExporterConfig::from_toml_str(case);
        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "Should reject: {case}"
        );
    }
}

#[test]
fn given_extensions_when_matching_then_case_sensitive_suffix() {
    let config = ExporterConfig::default();

    assert!(config.is_texture("wall.png"));
    assert!(config.is_texture("roof.jpg"));
    assert!(!config.is_texture("wall.PNG"));
    assert!(!config.is_texture("notes.txt"));
    assert!(!config.is_texture("png"));
}
