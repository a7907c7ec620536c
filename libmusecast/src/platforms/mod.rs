//! Social posting platforms
//!
//! A [`SocialPlatform`] accepts finished text and turns it into a live post.
//! Orchestration code holds `Arc<dyn SocialPlatform>` so the concrete
//! provider can be swapped without touching the publish pipeline.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::PublishedPost;

pub mod oauth1;
pub mod x;

// Mock platform is available for all builds (not just tests) to support
// integration tests
pub mod mock;

pub use mock::MockPlatform;
pub use x::XPlatform;

/// A platform posts can be published to.
#[async_trait]
pub trait SocialPlatform: Send + Sync {
    /// Publish `text` as a new post.
    ///
    /// The text must already be within [`character_limit`]; platforms do not
    /// truncate.
    ///
    /// # Errors
    ///
    /// Returns a `Publish` error when credentials are rejected, the platform
    /// refuses the post, the platform is unreachable, or its response cannot
    /// be parsed. The platform's own error detail is preserved in the
    /// message.
    ///
    /// [`character_limit`]: SocialPlatform::character_limit
    async fn publish(&self, text: &str) -> Result<PublishedPost>;

    /// Platform identifier used in logs.
    fn name(&self) -> &str;

    /// Maximum number of characters the platform accepts in one post.
    fn character_limit(&self) -> usize;
}
