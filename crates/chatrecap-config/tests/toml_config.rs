//! Tests for `chatrecap.toml` parsing and discovery.

use std::io::Write;
use std::path::PathBuf;

use chatrecap_config::{ConfigError, DEFAULT_CONFIG_FILE, TomlConfig};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn empty_file_is_all_defaults() {
    let config = TomlConfig::parse("").expect("empty TOML is valid");
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn full_file_round_trips_every_key() {
    let config = TomlConfig::parse(
        r#"
input = "exports/conversations.json"
output = "out/summary.json"
utc_offset = "+08:00"
pretty = false

[backends]
tfidf = false
tokenizer = true
langdetect = false
"#,
    )
    .expect("valid config");
    assert_eq!(config.input, Some(PathBuf::from("exports/conversations.json")));
    assert_eq!(config.output, Some(PathBuf::from("out/summary.json")));
    assert_eq!(config.utc_offset.as_deref(), Some("+08:00"));
    assert_eq!(config.pretty, Some(false));
    assert_eq!(config.backends.tfidf, Some(false));
    assert_eq!(config.backends.tokenizer, Some(true));
    assert_eq!(config.backends.langdetect, Some(false));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(TomlConfig::parse("colour = \"blue\"\n").is_err());
    assert!(TomlConfig::parse("[backends]\nspacy = true\n").is_err());
}

#[test]
fn wrong_types_are_rejected() {
    assert!(TomlConfig::parse("pretty = \"yes\"\n").is_err());
}

#[test]
fn from_file_reports_parse_errors_with_the_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"pretty = = true").unwrap();
    let err = TomlConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = TomlConfig::discover(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn default_file_is_optional() {
    let dir = TempDir::new().unwrap();
    assert_eq!(TomlConfig::discover(None, dir.path()).unwrap(), None);
}

#[test]
fn default_file_is_picked_up_from_the_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "utc_offset = \"local\"\n").unwrap();
    let config = TomlConfig::discover(None, dir.path()).unwrap().expect("config found");
    assert_eq!(config.utc_offset.as_deref(), Some("local"));
}
