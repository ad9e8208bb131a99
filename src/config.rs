//! Configuration loading and logging initialization.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{MarketWeights, TraitWeights};
use crate::error::ConfigError;

/// Top-level configuration, loaded from a TOML file.
///
/// Every section has documented defaults, so an empty file (or no file at
/// all) yields a working configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub scoring: ScoringConfig,
    pub valuation: ValuationConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.valuation.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so stdout stays clean for JSON output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Weight tables for both scoring policies.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub trait_weights: TraitWeights,
    pub market_weights: MarketWeights,
}

impl ScoringConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("scoring.trait_weights.length", self.trait_weights.length),
            (
                "scoring.trait_weights.keyword_value",
                self.trait_weights.keyword_value,
            ),
            ("scoring.trait_weights.rarity", self.trait_weights.rarity),
            (
                "scoring.trait_weights.tld_rarity",
                self.trait_weights.tld_rarity,
            ),
            (
                "scoring.trait_weights.on_chain_activity",
                self.trait_weights.on_chain_activity,
            ),
            ("scoring.market_weights.length", self.market_weights.length),
            (
                "scoring.market_weights.tld_popularity",
                self.market_weights.tld_popularity,
            ),
            (
                "scoring.market_weights.keyword_value",
                self.market_weights.keyword_value,
            ),
            (
                "scoring.market_weights.market_volume",
                self.market_weights.market_volume,
            ),
            (
                "scoring.market_weights.price_trend",
                self.market_weights.price_trend,
            ),
            (
                "scoring.market_weights.social_sentiment",
                self.market_weights.social_sentiment,
            ),
        ];

        for (field, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("weight must be a non-negative number, got {weight}"),
                });
            }
        }
        Ok(())
    }
}

/// Parameters of the valuation market-noise factor.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Mean of the normal noise distribution.
    pub noise_mean: f64,
    /// Standard deviation of the normal noise distribution.
    pub noise_std_dev: f64,
    /// Lower bound applied to each drawn noise factor.
    pub noise_floor: f64,
}

impl ValuationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.noise_std_dev.is_finite() || self.noise_std_dev <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "valuation.noise_std_dev",
                reason: format!("must be a positive number, got {}", self.noise_std_dev),
            });
        }
        if !self.noise_floor.is_finite() || self.noise_floor < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "valuation.noise_floor",
                reason: format!("must be non-negative, got {}", self.noise_floor),
            });
        }
        Ok(())
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            noise_mean: 1.0,
            noise_std_dev: 0.2,
            noise_floor: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.trait_weights.keyword_value, 0.25);
        assert_eq!(config.valuation.noise_floor, 0.5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config: Config = toml::from_str(
            r#"
            [scoring.trait_weights]
            rarity = -0.1
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field.contains("rarity")
        ));
    }

    #[test]
    fn test_zero_std_dev_rejected() {
        let config: Config = toml::from_str(
            r#"
            [valuation]
            noise_std_dev = 0.0
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
