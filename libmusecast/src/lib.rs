//! Musecast core library
//!
//! Wires a text generation provider and a social posting platform into one
//! publish operation. The same [`ContentPublisher`] pipeline backs every
//! trigger surface: the one-shot CLI (`muse-post`), the timer daemon
//! (`muse-send`), and the HTTP trigger (`muse-serve`).
//!
//! Providers sit behind the [`generation::TextGenerator`] and
//! [`platforms::SocialPlatform`] traits, so orchestration code and tests
//! never depend on a concrete upstream service.

pub mod config;
pub mod counter;
pub mod error;
pub mod generation;
pub mod logging;
pub mod platforms;
pub mod publisher;
pub mod sanitize;
pub mod types;

pub use config::{Credentials, XCredentials};
pub use error::{ConfigError, GenerationError, MusecastError, PublishError, Result};
pub use publisher::ContentPublisher;
pub use types::{ExecutionOutcome, GenerationRequest, OutcomeReport, PublishedPost};
