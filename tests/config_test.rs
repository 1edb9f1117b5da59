// tests/config_test.rs
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};
use version_stamp::config::{load_config, Config, ConfigOverrides, CONFIG_FILE_NAME};
use version_stamp::StampError;

#[test]
#[serial]
fn test_load_from_fixture() {
    let config = load_config(Some(Path::new("tests/fixtures/versionstamp.toml")))
        .expect("Failed to load test config");
    assert_eq!(config.manifest, PathBuf::from("crates/core/Cargo.toml"));
    assert_eq!(config.env_var, "RELEASE_TAG");
    assert_eq!(config.placeholder, "0.0.0-placeholder");
}

#[test]
#[serial]
fn test_load_partial_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"placeholder = \"9.9.9-dev\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.placeholder, "9.9.9-dev");
    assert_eq!(config.env_var, "VERSION");
    assert_eq!(config.manifest, PathBuf::from("Cargo.toml"));
}

#[test]
#[serial]
fn test_load_invalid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"env_var = [not toml").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(matches!(err, StampError::Config(_)));
}

#[test]
#[serial]
fn test_load_missing_explicit_file() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "env_var = \"TAG\"\n").unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().env_var, "TAG");
}

#[test]
#[serial]
fn test_cli_overrides_file_values() {
    let config = load_config(Some(Path::new("tests/fixtures/versionstamp.toml")))
        .unwrap()
        .with_overrides(ConfigOverrides {
            manifest: Some(PathBuf::from("Cargo.toml")),
            env_var: None,
            placeholder: Some("0.0.1-dirty".to_string()),
        });

    assert_eq!(
        config,
        Config {
            manifest: PathBuf::from("Cargo.toml"),
            env_var: "RELEASE_TAG".to_string(),
            placeholder: "0.0.1-dirty".to_string(),
        }
    );
}
