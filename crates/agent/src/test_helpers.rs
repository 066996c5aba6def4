//! Shared test helpers for orchestrator tests.

use async_trait::async_trait;
use std::sync::Mutex;
use wattwise_core::chat::{ChatBackend, ChatRequest};
use wattwise_core::context::{ContextSelection, ContextSource};
use wattwise_core::error::RecommendError;

/// A mock backend that returns one scripted result and records every
/// request it receives.
pub struct ScriptedChat {
    result: Result<String, RecommendError>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChat {
    pub fn answering(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: RecommendError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedChat {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(&self, request: ChatRequest) -> Result<String, RecommendError> {
        self.requests.lock().unwrap().push(request);
        self.result.clone()
    }
}

/// A mock context source returning fixed text, with a call counter.
///
/// An empty `text` doubles as a simulated augmentation failure, since the
/// contract degrades every failure to an empty string.
pub struct FixedContext {
    text: String,
    calls: Mutex<usize>,
}

impl FixedContext {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Mutex::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self::returning("")
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ContextSource for FixedContext {
    async fn fetch(&self, selection: ContextSelection) -> String {
        *self.calls.lock().unwrap() += 1;
        if selection == ContextSelection::None {
            return String::new();
        }
        self.text.clone()
    }
}
