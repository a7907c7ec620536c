//! Publish orchestration
//!
//! [`ContentPublisher`] runs the full cycle: generate text, clean it up,
//! enforce the platform's length limit, publish. Every invocation resolves
//! to an [`ExecutionOutcome`]; stage errors are folded into the outcome
//! rather than surfaced to the trigger, so one failed cycle never takes a
//! trigger surface down with it.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::Credentials;
use crate::error::{MusecastError, Result};
use crate::generation::{GroqClient, TextGenerator};
use crate::platforms::{SocialPlatform, XPlatform};
use crate::sanitize::{char_count, sanitize};
use crate::types::{ExecutionOutcome, GenerationRequest};

/// Orchestrates one generation provider and one posting platform.
pub struct ContentPublisher {
    generator: Arc<dyn TextGenerator>,
    platform: Arc<dyn SocialPlatform>,
    request: GenerationRequest,
}

impl ContentPublisher {
    /// Wire a generator and a platform with the stock viral-post prompt.
    pub fn new(generator: Arc<dyn TextGenerator>, platform: Arc<dyn SocialPlatform>) -> Self {
        Self {
            generator,
            platform,
            request: GenerationRequest::default(),
        }
    }

    /// Replace the generation request.
    pub fn with_request(mut self, request: GenerationRequest) -> Self {
        self.request = request;
        self
    }

    /// Build the production pairing (Groq plus X) from resolved credentials.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        let generator = GroqClient::new(credentials.groq_api_key.clone());
        let platform = XPlatform::new(&credentials.x);
        Self::new(Arc::new(generator), Arc::new(platform))
    }

    /// Build the production pairing from the environment.
    ///
    /// # Errors
    ///
    /// Fails with a `Config` error when a required variable is missing or
    /// empty; no network connection is attempted in that case.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_credentials(&Credentials::from_env()?))
    }

    /// Run one publish cycle.
    pub async fn run(&self) -> ExecutionOutcome {
        info!(
            generator = self.generator.name(),
            platform = self.platform.name(),
            "Starting publish cycle"
        );

        let raw = match self.generator.generate(&self.request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Text generation failed: {}", e);
                return ExecutionOutcome::failure(e.to_string(), None);
            }
        };

        let content = sanitize(&raw);
        if content.is_empty() {
            info!("Generator produced no usable content, skipping publish");
            return ExecutionOutcome::no_content();
        }

        let limit = self.platform.character_limit();
        let chars = char_count(&content);
        if chars > limit {
            let reason = MusecastError::ContentRejected(format!(
                "content too long: {} characters exceeds the {} character limit",
                chars, limit
            ));
            warn!("{}", reason);
            return ExecutionOutcome::failure(reason.to_string(), Some(content));
        }

        match self.platform.publish(&content).await {
            Ok(post) => {
                info!(post_id = %post.id, "Published to {}", self.platform.name());
                ExecutionOutcome::success(post.text, post.id)
            }
            Err(e) => {
                warn!("Publish to {} failed: {}", self.platform.name(), e);
                ExecutionOutcome::failure(e.to_string(), Some(content))
            }
        }
    }

    /// Resolve credentials and run one cycle, folding configuration errors
    /// into the outcome like any other stage failure.
    pub async fn run_from_env() -> ExecutionOutcome {
        match Self::from_env() {
            Ok(publisher) => publisher.run().await,
            Err(e) => {
                error!("Publish cycle aborted before contacting any provider: {}", e);
                ExecutionOutcome::failure(e.to_string(), None)
            }
        }
    }
}
