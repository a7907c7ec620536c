//! X platform implementation

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::XCredentials;
use crate::error::{PublishError, Result};
use crate::platforms::oauth1::Oauth1Signer;
use crate::platforms::SocialPlatform;
use crate::types::PublishedPost;

/// Default base URL for the X API.
pub const X_API_BASE: &str = "https://api.twitter.com";

/// Character limit for a standard X post.
pub const X_CHARACTER_LIMIT: usize = 280;

/// Client for posting to X via the v2 API with OAuth 1.0a user context.
#[derive(Debug, Clone)]
pub struct XPlatform {
    http_client: Client,
    signer: Oauth1Signer,
    base_url: String,
}

impl XPlatform {
    pub fn new(credentials: &XCredentials) -> Self {
        Self {
            http_client: Client::new(),
            signer: Oauth1Signer::new(
                credentials.api_key.clone(),
                credentials.api_secret.clone(),
                credentials.access_token.clone(),
                credentials.access_token_secret.clone(),
            ),
            base_url: X_API_BASE.to_string(),
        }
    }

    /// Override the base URL, for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
    text: String,
}

fn map_status_error(status: u16, body: &str) -> PublishError {
    match status {
        401 => PublishError::Authentication(format!(
            "X API rejected credentials (status 401): {}",
            body
        )),
        // 403 is how the API reports refused posts, duplicate content
        // included
        403 => PublishError::Posting(format!("X API refused the post (status 403): {}", body)),
        429 => PublishError::RateLimit(format!("X API rate limit hit (status 429): {}", body)),
        500..=599 => PublishError::Network(format!("X API server error (status {}): {}", status, body)),
        _ => PublishError::Posting(format!("X API error (status {}): {}", status, body)),
    }
}

#[async_trait]
impl SocialPlatform for XPlatform {
    async fn publish(&self, text: &str) -> Result<PublishedPost> {
        let url = format!("{}/2/tweets", self.base_url);
        let authorization = self.signer.authorization_header("POST", &url);

        debug!(chars = text.chars().count(), "Posting to X");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", authorization)
            .json(&TweetRequest { text })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "X request failed");
                PublishError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "X API returned error");
            return Err(map_status_error(status.as_u16(), &error_text).into());
        }

        let tweet: TweetResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Parse(e.to_string()))?;

        debug!(post_id = %tweet.data.id, "X accepted the post");

        Ok(PublishedPost {
            id: tweet.data.id,
            text: tweet.data.text,
            posted_at: Utc::now(),
        })
    }

    fn name(&self) -> &str {
        "x"
    }

    fn character_limit(&self) -> usize {
        X_CHARACTER_LIMIT
    }
}
