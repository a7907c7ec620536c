//! Environment-backed configuration
//!
//! All credentials come from environment variables (a `.env` file is loaded
//! first when present). Resolution is fail-fast: the first missing or empty
//! required variable aborts the invocation before any network traffic.

use crate::error::{ConfigError, Result};

/// Credentials for both upstream providers plus the optional trigger secret.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API key for the Groq chat completion endpoint (`GROQ_API_KEY`)
    pub groq_api_key: String,
    /// OAuth 1.0a credentials for the X API
    pub x: XCredentials,
    /// Shared secret required by the HTTP trigger when set (`CRON_SECRET`)
    pub cron_secret: Option<String>,
}

/// OAuth 1.0a user-context credentials for posting to X.
#[derive(Debug, Clone)]
pub struct XCredentials {
    /// Consumer key (`X_API_KEY`)
    pub api_key: String,
    /// Consumer secret (`X_API_SECRET`)
    pub api_secret: String,
    /// Access token for the posting account (`X_ACCESS_TOKEN`)
    pub access_token: String,
    /// Access token secret (`X_ACCESS_TOKEN_SECRET`)
    pub access_token_secret: String,
}

impl Credentials {
    /// Load credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] or [`ConfigError::EmptyVar`] for
    /// the first required variable that is absent or blank.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            groq_api_key: require_var("GROQ_API_KEY")?,
            x: XCredentials {
                api_key: require_var("X_API_KEY")?,
                api_secret: require_var("X_API_SECRET")?,
                access_token: require_var("X_ACCESS_TOKEN")?,
                access_token_secret: require_var("X_ACCESS_TOKEN_SECRET")?,
            },
            cron_secret: optional_var("CRON_SECRET"),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            Err(ConfigError::EmptyVar(name.to_string()).into())
        }
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingVar(name.to_string()).into()),
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
