//! Error types for Musecast
//!
//! The top-level [`MusecastError`] wraps stage-specific errors so callers can
//! match on where a publish cycle went wrong without losing the provider
//! detail that caused it.

use thiserror::Error;

/// Result type alias for Musecast operations
pub type Result<T> = std::result::Result<T, MusecastError>;

/// Main error type for Musecast operations
#[derive(Error, Debug)]
pub enum MusecastError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Content rejected: {0}")]
    ContentRejected(String),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Environment configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Environment variable {0} is set but empty")]
    EmptyVar(String),
}

/// Errors from the text generation provider
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Generation API error: {0}")]
    Api(String),

    #[error("Failed to parse generation response: {0}")]
    Parse(String),
}

/// Errors from the social posting provider
#[derive(Error, Debug, Clone)]
pub enum PublishError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Posting failed: {0}")]
    Posting(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Failed to parse posting response: {0}")]
    Parse(String),
}

impl MusecastError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MusecastError::InvalidInput(_) => 3,
            MusecastError::Publish(PublishError::Authentication(_)) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::MissingVar("GROQ_API_KEY".to_string());
        assert_eq!(
            error.to_string(),
            "Missing required environment variable: GROQ_API_KEY"
        );

        let error = ConfigError::EmptyVar("X_API_KEY".to_string());
        assert_eq!(
            error.to_string(),
            "Environment variable X_API_KEY is set but empty"
        );
    }

    #[test]
    fn test_generation_error_display() {
        let error = GenerationError::Api("model decommissioned".to_string());
        assert_eq!(error.to_string(), "Generation API error: model decommissioned");

        let error = GenerationError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_publish_error_display() {
        let error = PublishError::Authentication("invalid token".to_string());
        assert_eq!(error.to_string(), "Authentication failed: invalid token");

        let error = PublishError::RateLimit("try again later".to_string());
        assert_eq!(error.to_string(), "Rate limit exceeded: try again later");
    }

    #[test]
    fn test_error_conversion_preserves_detail() {
        let error: MusecastError = ConfigError::MissingVar("X_API_SECRET".to_string()).into();
        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required environment variable: X_API_SECRET"
        );

        let error: MusecastError = GenerationError::Parse("missing field `choices`".to_string()).into();
        assert!(error.to_string().starts_with("Generation error:"));
        assert!(error.to_string().contains("missing field `choices`"));

        let error: MusecastError = PublishError::Posting("duplicate content".to_string()).into();
        assert_eq!(error.to_string(), "Publish error: Posting failed: duplicate content");
    }

    #[test]
    fn test_exit_codes() {
        let config: MusecastError = ConfigError::MissingVar("GROQ_API_KEY".to_string()).into();
        assert_eq!(config.exit_code(), 1);

        let generation: MusecastError = GenerationError::Network("timeout".to_string()).into();
        assert_eq!(generation.exit_code(), 1);

        let auth: MusecastError = PublishError::Authentication("expired".to_string()).into();
        assert_eq!(auth.exit_code(), 2);

        let posting: MusecastError = PublishError::Posting("rejected".to_string()).into();
        assert_eq!(posting.exit_code(), 1);

        let rejected = MusecastError::ContentRejected("too long".to_string());
        assert_eq!(rejected.exit_code(), 1);

        let input = MusecastError::InvalidInput("bad format".to_string());
        assert_eq!(input.exit_code(), 3);
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: MusecastError = parse_error.into();
        assert!(error.to_string().starts_with("Serialization error:"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_content_rejected_display() {
        let error = MusecastError::ContentRejected(
            "content too long: 301 characters exceeds the 280 character limit".to_string(),
        );
        assert!(error.to_string().starts_with("Content rejected:"));
        assert!(error.to_string().contains("301 characters"));
    }
}
