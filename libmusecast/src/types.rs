//! Core types shared across Musecast crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instruction sent to the generation model for the stock viral-post persona.
pub const PERSONA_PROMPT: &str = "I want you to act as a masterful viral tweet creator \
    specializing in the domains of software development, build-in-public philosophy, \
    artificial intelligence, thought-provoking quotes, and web development. Your task is \
    to craft highly engaging and shareable single tweet without any double quotes of \
    40-50 words that capture attention, provoke thought, or inspire action from any of \
    the above topic. Ensure the tweets are concise, impactful, and written in a \
    professional tone without the use of emojis or hashtags. Each tweet should reflect \
    a deep understanding of its subject matter and resonate with an audience passionate \
    about technology, innovation, and learning. Focus on ideas that spark curiosity, \
    encourage discussion, or share actionable insights in a single scroll-stopping \
    sentence.";

/// Model requested from the Groq chat completion endpoint.
pub const GENERATION_MODEL: &str = "llama-3.3-70b-versatile";

/// Sampling temperature for generation requests.
pub const GENERATION_TEMPERATURE: f64 = 0.7;

/// Token ceiling for a single generated post.
pub const GENERATION_MAX_TOKENS: u32 = 160;

/// Nucleus sampling parameter for generation requests.
pub const GENERATION_TOP_P: f64 = 1.0;

/// Outcome message for a published post.
pub const MSG_SUCCESS: &str = "Post published successfully!";

/// Outcome message when generation produced nothing postable.
pub const MSG_NO_CONTENT: &str = "No content generated; nothing to publish";

/// Outcome message for a failed publish cycle.
pub const MSG_FAILURE: &str = "Post was not published";

/// One request to the text generation provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Prompt sent as the sole user message
    pub prompt: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens in the completion
    pub max_tokens: u32,
    /// Nucleus sampling parameter
    pub top_p: f64,
}

impl GenerationRequest {
    /// Create a request for `prompt` with the stock model parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: GENERATION_MODEL.to_string(),
            temperature: GENERATION_TEMPERATURE,
            max_tokens: GENERATION_MAX_TOKENS,
            top_p: GENERATION_TOP_P,
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(PERSONA_PROMPT)
    }
}

/// A post as acknowledged by the social platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedPost {
    /// Platform-assigned post identifier
    pub id: String,
    /// Canonical text stored by the platform
    pub text: String,
    /// When the platform acknowledged the post
    pub posted_at: DateTime<Utc>,
}

/// Result of one complete publish cycle.
///
/// Every invocation resolves to exactly one of these; errors from any stage
/// are folded into `Failure` rather than propagated to the trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// Content was generated and published
    Success {
        content: String,
        post_id: String,
        timestamp: DateTime<Utc>,
    },
    /// Generation produced nothing postable; publishing was skipped
    NoContent { timestamp: DateTime<Utc> },
    /// Some stage failed; nothing was published
    Failure {
        reason: String,
        /// Generated text, when generation got that far
        content: Option<String>,
        timestamp: DateTime<Utc>,
    },
}

impl ExecutionOutcome {
    pub fn success(content: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self::Success {
            content: content.into(),
            post_id: post_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn no_content() -> Self {
        Self::NoContent {
            timestamp: Utc::now(),
        }
    }

    pub fn failure(reason: impl Into<String>, content: Option<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
            content,
            timestamp: Utc::now(),
        }
    }

    /// Build the structured report for this outcome.
    pub fn report(&self) -> OutcomeReport {
        match self {
            ExecutionOutcome::Success {
                content,
                post_id,
                timestamp,
            } => OutcomeReport {
                success: true,
                message: MSG_SUCCESS.to_string(),
                content: Some(content.clone()),
                post_id: Some(post_id.clone()),
                error: None,
                timestamp: *timestamp,
            },
            ExecutionOutcome::NoContent { timestamp } => OutcomeReport {
                success: true,
                message: MSG_NO_CONTENT.to_string(),
                content: None,
                post_id: None,
                error: None,
                timestamp: *timestamp,
            },
            ExecutionOutcome::Failure {
                reason,
                content,
                timestamp,
            } => OutcomeReport {
                success: false,
                message: MSG_FAILURE.to_string(),
                content: content.clone(),
                post_id: None,
                error: Some(reason.clone()),
                timestamp: *timestamp,
            },
        }
    }
}

/// Serializable report of a publish cycle, shared by every trigger surface.
///
/// Optional fields are omitted from the JSON encoding when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}
