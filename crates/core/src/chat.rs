//! ChatBackend trait — the abstraction over the chat-completion endpoint.
//!
//! A backend knows how to submit one prompt and hand back the aggregated
//! response text. The HTTP streaming implementation lives in
//! `wattwise-client`; tests inject scripted mocks.

use crate::error::RecommendError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One message in the outbound chat payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// The outbound chat payload: a fixed model identifier plus the prompt.
///
/// Serialized with serde rather than string substitution, so field values
/// containing quotes can never corrupt the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// A single-turn request carrying one user prompt.
    pub fn single_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// The chat-completion collaborator.
///
/// Exactly one `send` happens per recommendation run. The returned string
/// is the fully aggregated response text; errors are already classified.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// A human-readable name for this backend (e.g. "ollama").
    fn name(&self) -> &str;

    /// Submit the request and aggregate the streamed response.
    async fn send(&self, request: ChatRequest) -> Result<String, RecommendError>;

    /// Health check — can we reach the endpoint?
    async fn health_check(&self) -> Result<bool, RecommendError> {
        Ok(true)
    }
}
