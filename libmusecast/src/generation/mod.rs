//! Text generation providers
//!
//! A [`TextGenerator`] turns a [`GenerationRequest`] into one candidate
//! passage of text. The trait is object-safe so orchestration code can hold
//! `Arc<dyn TextGenerator>` and tests can substitute the mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::GenerationRequest;

pub mod groq;
pub mod mock;

pub use groq::GroqClient;
pub use mock::MockGenerator;

/// A text generation provider.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce one passage of text for `request`.
    ///
    /// An empty string is a valid result and means the model produced
    /// nothing usable; callers decide what to do with it.
    ///
    /// # Errors
    ///
    /// Returns a `Generation` error when the provider is unreachable,
    /// rejects the request, or answers with a body that cannot be parsed.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Provider identifier used in logs.
    fn name(&self) -> &str;
}
