use thiserror::Error;

/// Failure to produce a name from the word dictionaries.
///
/// Wraps the underlying selection failure so the cause survives into log
/// output; HTTP responses carry only a fixed generic message.
#[derive(Debug, Error)]
#[error("failed to generate name")]
pub struct GenerationError {
    #[from]
    source: EmptyDictionary,
}

/// A uniform pick was attempted over an empty word list.
#[derive(Debug, Error)]
#[error("dictionary is empty")]
pub struct EmptyDictionary;

/// Invalid process configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid APP_ENV: {0}")]
    InvalidEnv(String),

    #[error("Invalid BASE_URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}
