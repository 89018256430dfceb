use std::fs;

use coinradar::error::{ConfigError, Error};
use coinradar::infrastructure::config::{Config, LogFormat};

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.coingecko.timeout_secs, 10);
}

#[test]
fn load_requires_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn loads_provider_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[logging]
level = "warn"

[coingecko]
api_url = "https://pro-api.coingecko.com/api/v3/simple/price"
timeout_secs = 4
"#,
    );

    let config = Config::load_or_default(&path).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(
        config.coingecko.api_url,
        "https://pro-api.coingecko.com/api/v3/simple/price"
    );
    assert_eq!(config.coingecko.timeout_secs, 4);
    assert_eq!(config.coingecko.user_agent, "coinradar-bot/1.0");
}

#[test]
fn existing_invalid_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[coingecko]\napi_url = \"\"\n");

    match Config::load_or_default(&path) {
        Err(Error::Config(ConfigError::MissingField { field: "api_url" })) => {}
        Err(err) => panic!("Expected missing api_url error, got {err}"),
        Ok(_) => panic!("Expected empty api_url to be rejected"),
    }
}

#[test]
fn unparseable_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[coingecko]\napi_url = \"not a url\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "api_url",
            ..
        }))
    ));
}
