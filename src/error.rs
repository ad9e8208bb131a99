use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors that occur when domain-name inputs violate the engine's contract.
///
/// A failed extraction is fatal to the single request, never to the process.
/// Downstream numeric degradations (missing market data) are absorbed into
/// neutral defaults and logged, not surfaced here.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// The input did not match the single-label `name.tld` format.
    #[error("invalid domain format '{domain}': expected a single label and TLD, e.g. 'crypto.eth'")]
    InvalidDomainFormat {
        /// The rejected input, trimmed.
        domain: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
