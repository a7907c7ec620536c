//! Mock social platform for testing

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{PublishError, Result};
use crate::platforms::SocialPlatform;
use crate::types::PublishedPost;

/// Configuration for the mock platform's behavior.
#[derive(Debug, Clone)]
pub struct MockPlatformConfig {
    /// Name reported by the platform
    pub name: String,
    /// When set, every publish fails with this error
    pub error: Option<PublishError>,
    /// Canned post id; a fresh one is generated when unset
    pub post_id: Option<String>,
    /// Character limit reported by the platform
    pub character_limit: usize,
    /// Number of times `publish` was called
    pub publish_call_count: Arc<Mutex<usize>>,
    /// Texts accepted by successful publishes
    pub published_texts: Arc<Mutex<Vec<String>>>,
}

impl Default for MockPlatformConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            error: None,
            post_id: None,
            character_limit: 280,
            publish_call_count: Arc::new(Mutex::new(0)),
            published_texts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock platform recording what was published, for orchestration tests.
#[derive(Debug, Clone)]
pub struct MockPlatform {
    config: MockPlatformConfig,
}

impl MockPlatform {
    pub fn new(config: MockPlatformConfig) -> Self {
        Self { config }
    }

    /// Platform that accepts every post.
    pub fn success(name: &str) -> Self {
        Self::new(MockPlatformConfig {
            name: name.to_string(),
            ..Default::default()
        })
    }

    /// Platform that accepts every post and always assigns `post_id`.
    pub fn with_post_id(name: &str, post_id: &str) -> Self {
        Self::new(MockPlatformConfig {
            name: name.to_string(),
            post_id: Some(post_id.to_string()),
            ..Default::default()
        })
    }

    /// Platform whose publishes fail with an authentication error.
    pub fn auth_failure(name: &str, message: &str) -> Self {
        Self::new(MockPlatformConfig {
            name: name.to_string(),
            error: Some(PublishError::Authentication(message.to_string())),
            ..Default::default()
        })
    }

    /// Platform whose publishes fail with a posting error.
    pub fn post_failure(name: &str, message: &str) -> Self {
        Self::new(MockPlatformConfig {
            name: name.to_string(),
            error: Some(PublishError::Posting(message.to_string())),
            ..Default::default()
        })
    }

    /// Change the reported character limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.character_limit = limit;
        self
    }

    /// How many times `publish` was called.
    pub fn publish_call_count(&self) -> usize {
        *self.config.publish_call_count.lock().unwrap()
    }

    /// Texts accepted so far, in publish order.
    pub fn published_texts(&self) -> Vec<String> {
        self.config.published_texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPlatform for MockPlatform {
    async fn publish(&self, text: &str) -> Result<PublishedPost> {
        *self.config.publish_call_count.lock().unwrap() += 1;

        if let Some(error) = &self.config.error {
            return Err(error.clone().into());
        }

        self.config
            .published_texts
            .lock()
            .unwrap()
            .push(text.to_string());

        let id = self
            .config
            .post_id
            .clone()
            .unwrap_or_else(|| format!("{}-mock-{}", self.config.name, uuid::Uuid::new_v4()));

        Ok(PublishedPost {
            id,
            text: text.to_string(),
            posted_at: Utc::now(),
        })
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn character_limit(&self) -> usize {
        self.config.character_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_records_published_text() {
        let platform = MockPlatform::success("test");
        let post = platform.publish("Hello world").await.unwrap();

        assert_eq!(post.text, "Hello world");
        assert!(post.id.starts_with("test-mock-"));
        assert_eq!(platform.publish_call_count(), 1);
        assert_eq!(platform.published_texts(), vec!["Hello world"]);
    }

    #[tokio::test]
    async fn test_canned_post_id() {
        let platform = MockPlatform::with_post_id("test", "123");
        let post = platform.publish("anything").await.unwrap();
        assert_eq!(post.id, "123");
    }

    #[tokio::test]
    async fn test_auth_failure_counts_attempt_without_recording_text() {
        let platform = MockPlatform::auth_failure("test", "bad token");
        let error = platform.publish("Hello").await.unwrap_err();

        assert!(error.to_string().contains("bad token"));
        assert_eq!(platform.publish_call_count(), 1);
        assert!(platform.published_texts().is_empty());
    }

    #[tokio::test]
    async fn test_post_failure_propagates_message() {
        let platform = MockPlatform::post_failure("test", "duplicate content");
        let error = platform.publish("Hello").await.unwrap_err();
        assert!(error.to_string().contains("duplicate content"));
    }

    #[test]
    fn test_with_limit_overrides_default() {
        let platform = MockPlatform::success("test").with_limit(40);
        assert_eq!(platform.character_limit(), 40);

        let platform = MockPlatform::success("test");
        assert_eq!(platform.character_limit(), 280);
    }
}
