//! Tests for the configuration module.

use crate::config::{write_default_config, ConfigLoader, LogConfig, Settings, Validate};
use crate::data_structures::bloom_filter::{BloomFilter, BloomFilterConfig};
use crate::error::config::ConfigError;
use crate::tests::test_utils::TestFixture;

/// Default settings are valid and size a usable filter.
#[test]
fn test_default_config_is_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());

    let filter = BloomFilter::with_config(settings.filter).unwrap();
    assert_eq!(filter.bit_count() % 32, 0);
    assert!(filter.hash_count() >= 1);
}

/// Validation catches invalid values in either section.
#[test]
fn test_config_validation() {
    let mut settings = Settings::default();

    settings.filter = BloomFilterConfig::new().with_false_positive_rate(1.5);
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    settings.filter = BloomFilterConfig::new();
    settings.log = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Loading without a file yields the defaults.
#[test]
fn test_load_defaults() {
    let loader = ConfigLoader::new(None::<&str>, "BLOOM_DEFAULTS_TEST");
    let settings = loader.load().unwrap();
    assert_eq!(settings, Settings::default());
}

/// Loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "bloom.toml",
            r#"
            [filter]
            expected_items = 1000
            false_positive_rate = 0.001

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let settings = ConfigLoader::new(Some(&path), "BLOOM_FILE_TEST").load().unwrap();

    assert_eq!(settings.filter.expected_items(), 1000);
    assert_eq!(settings.filter.false_positive_rate(), 0.001);
    assert_eq!(settings.filter.parameters(), (14_400, 10));
    assert_eq!(settings.log.level, "debug");
    // untouched values keep their defaults
    assert!(!settings.log.json);
}

/// Explicit sizes in the file override the estimate.
#[test]
fn test_load_explicit_sizes_from_json() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "bloom.json",
            r#"{ "filter": { "bit_count": 2048, "hash_functions": 3 } }"#,
        )
        .unwrap();

    let settings = ConfigLoader::new(Some(&path), "BLOOM_JSON_TEST").load().unwrap();
    assert_eq!(settings.filter.parameters(), (2048, 3));
}

/// Invalid values in the file are rejected after loading.
#[test]
fn test_load_invalid_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("bad.toml", "[filter]\nfalse_positive_rate = 2.0\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "BLOOM_INVALID_TEST").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Missing files and unknown extensions are reported.
#[test]
fn test_load_missing_or_unsupported_file() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    let result = ConfigLoader::new(Some(&missing), "BLOOM_MISSING_TEST").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let path = fixture.create_file("bloom.ini", "expected_items = 5").unwrap();
    let result = ConfigLoader::new(Some(&path), "BLOOM_EXT_TEST").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Environment variables override file values.
#[test]
fn test_env_override() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("BLOOM_ENV_TEST__FILTER__EXPECTED_ITEMS", "5000");

    let settings = ConfigLoader::new(None::<&str>, "BLOOM_ENV_TEST").load().unwrap();
    assert_eq!(settings.filter.expected_items(), 5000);
}

/// The generated default file loads back to the defaults.
#[test]
fn test_write_default_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("nested").join("bloom.toml");

    write_default_config(&path).unwrap();
    assert!(path.exists());

    let settings = ConfigLoader::new(Some(&path), "BLOOM_WRITE_TEST").load().unwrap();
    assert_eq!(settings, Settings::default());
}
