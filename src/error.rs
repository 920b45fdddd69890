use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemewatchError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Token not found: {0}")]
    TokenNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
