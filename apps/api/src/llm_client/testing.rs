//! Test doubles for `TextGenerator`.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Returns a canned response chosen by the first marker found in the prompt,
/// and records every call.
#[derive(Default)]
pub struct ScriptedGenerator {
    responses: Vec<(&'static str, String)>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single response for every prompt.
    pub fn always(response: &str) -> Self {
        Self::new().on("", response)
    }

    /// Respond with `response` when the prompt contains `marker`. Markers are
    /// checked in registration order.
    pub fn on(mut self, marker: &'static str, response: &str) -> Self {
        self.responses.push((marker, response.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            max_tokens,
            temperature,
        });

        self.responses
            .iter()
            .find(|(marker, _)| prompt.contains(marker))
            .map(|(_, response)| response.trim().to_string())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Credential present, every call fails.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn complete(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "The server is overloaded".to_string(),
        })
    }
}

/// No credential configured.
pub struct UnavailableGenerator;

#[async_trait]
impl TextGenerator for UnavailableGenerator {
    async fn complete(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, LlmError> {
        Err(LlmError::Unavailable)
    }
}
