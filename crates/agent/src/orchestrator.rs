//! The Recommendation Orchestrator.
//!
//! Sequences one recommendation run: validate readings → resolve the tier
//! policy from the session → fetch augmentation context (best-effort,
//! strictly before composition) → compose the prompt → submit to the chat
//! backend. Exactly one chat request and at most one augmentation request
//! per invocation; no retries; stateless across invocations. Concurrent
//! trigger coalescing is the caller's concern.

use crate::prompt;
use std::sync::Arc;
use tracing::{debug, info};
use wattwise_core::chat::{ChatBackend, ChatRequest};
use wattwise_core::context::{ContextSelection, ContextSource};
use wattwise_core::error::RecommendationResult;
use wattwise_core::readings::RawReadings;
use wattwise_core::session::Session;

/// Orchestrates a single recommendation run against injected collaborators.
pub struct Recommender {
    backend: Arc<dyn ChatBackend>,
    context: Arc<dyn ContextSource>,
    model: String,
}

impl Recommender {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        context: Arc<dyn ContextSource>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            context,
            model: model.into(),
        }
    }

    /// Run one recommendation.
    ///
    /// Fails fast on validation — no network traffic happens for invalid
    /// input. Augmentation failures degrade to empty context and never
    /// surface as errors.
    pub async fn run(
        &self,
        raw: &RawReadings,
        session: &Session,
        selection: ContextSelection,
    ) -> RecommendationResult {
        let readings = raw.validate()?;
        debug!(tier = %session.tier, %selection, "Readings validated");

        let context = self.context.fetch(selection).await;
        let prompt = prompt::compose(&readings, &session.tier, &context);
        debug!(prompt_len = prompt.len(), context_len = context.len(), "Prompt composed");

        let text = self
            .backend
            .send(ChatRequest::single_prompt(&self.model, &prompt))
            .await?;

        info!(
            backend = self.backend.name(),
            response_len = text.len(),
            "Recommendation received"
        );
        Ok(text)
    }
}
