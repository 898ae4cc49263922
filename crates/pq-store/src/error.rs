//! Store error types

use thiserror::Error;

/// Persisted-query store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis is not configured for persisted queries")]
    NotConfigured,

    #[error("Redis error: {0}")]
    Redis(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        Self::Redis(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_display() {
        let err = StoreError::NotConfigured;
        assert_eq!(
            err.to_string(),
            "Redis is not configured for persisted queries"
        );
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoreError = parse_err.into();
        assert!(matches!(err, StoreError::Config(_)));
    }
}
