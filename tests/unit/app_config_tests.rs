/*!
 * Tests for application configuration functionality
 */

use framecode::app_config::{Config, LogLevel};
use tempfile::TempDir;

#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.backend.endpoint, "http://localhost:8000/api");
    assert_eq!(config.backend.timeout_secs, 60);
    assert_eq!(config.backend.max_retries, 2);
    assert_eq!(config.backend.retry_backoff_ms, 1000);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.backend.endpoint = "ftp://files.example.com".to_string();
    assert!(config.validate().is_err());

    config.backend.endpoint = "localhost:8000".to_string();
    assert!(config.validate().is_err());

    config.backend.endpoint = "https://frames.example.com/api/".to_string();
    assert!(config.validate().is_ok());

    config.backend.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_partialJson_shouldFillDefaults() {
    let config: Config = serde_json::from_str(r#"{"backend": {"endpoint": "http://10.0.0.5:9000"}, "log_level": "debug"}"#)
        .unwrap();

    assert_eq!(config.backend.endpoint, "http://10.0.0.5:9000");
    assert_eq!(config.backend.timeout_secs, 60);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded.backend.endpoint, config.backend.endpoint);
}

#[test]
fn test_fromFile_withMalformedJson_shouldFailWithPath() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let error = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", error).contains("broken.json"));
}
