//! Configuration loading tests.

use namelord::config::Config;
use namelord::error::ConfigError;

fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("namelord.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_loads_full_config() {
    let (_dir, path) = write_config(
        r#"
        [logging]
        level = "debug"
        format = "json"

        [scoring.trait_weights]
        length = 0.10
        keyword_value = 0.30

        [scoring.market_weights]
        social_sentiment = 0.15

        [valuation]
        noise_mean = 1.1
        noise_std_dev = 0.25
        noise_floor = 0.4
        "#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.scoring.trait_weights.length, 0.10);
    assert_eq!(config.scoring.trait_weights.keyword_value, 0.30);
    // unspecified weights keep their defaults
    assert_eq!(config.scoring.trait_weights.rarity, 0.20);
    assert_eq!(config.scoring.market_weights.social_sentiment, 0.15);
    assert_eq!(config.valuation.noise_floor, 0.4);
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = Config::load("/nonexistent/namelord.toml").unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile(_)));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[logging\nlevel = ");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_negative_weight_is_rejected_on_load() {
    let (_dir, path) = write_config("[scoring.market_weights]\nprice_trend = -0.5\n");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
