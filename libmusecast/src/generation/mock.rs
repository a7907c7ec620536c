//! Mock text generator for testing

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{GenerationError, Result};
use crate::generation::TextGenerator;
use crate::types::GenerationRequest;

/// Configuration for the mock generator's behavior.
#[derive(Debug, Clone)]
pub struct MockGeneratorConfig {
    /// Name reported by the generator
    pub name: String,
    /// Text returned on success
    pub output: String,
    /// When set, every call fails with this error
    pub error: Option<GenerationError>,
    /// Number of times `generate` was called
    pub call_count: Arc<Mutex<usize>>,
}

impl Default for MockGeneratorConfig {
    fn default() -> Self {
        Self {
            name: "mock-generator".to_string(),
            output: String::new(),
            error: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }
}

/// Mock generator returning canned output, for orchestration tests.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    config: MockGeneratorConfig,
}

impl MockGenerator {
    pub fn new(config: MockGeneratorConfig) -> Self {
        Self { config }
    }

    /// Generator that always returns `output`.
    pub fn returns(output: impl Into<String>) -> Self {
        Self::new(MockGeneratorConfig {
            output: output.into(),
            ..Default::default()
        })
    }

    /// Generator that always returns an empty string.
    pub fn empty() -> Self {
        Self::returns("")
    }

    /// Generator whose calls fail with an API error.
    pub fn api_failure(message: impl Into<String>) -> Self {
        Self::new(MockGeneratorConfig {
            error: Some(GenerationError::Api(message.into())),
            ..Default::default()
        })
    }

    /// Generator whose calls fail with a network error.
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::new(MockGeneratorConfig {
            error: Some(GenerationError::Network(message.into())),
            ..Default::default()
        })
    }

    /// How many times `generate` was called.
    pub fn call_count(&self) -> usize {
        *self.config.call_count.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        *self.config.call_count.lock().unwrap() += 1;

        if let Some(error) = &self.config.error {
            return Err(error.clone().into());
        }

        Ok(self.config.output.clone())
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
