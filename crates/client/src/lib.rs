//! HTTP implementations of the WattWise collaborator traits.
//!
//! `OllamaChat` implements `wattwise_core::ChatBackend` against an
//! Ollama-style streaming chat endpoint; `HttpContextSource` implements
//! `wattwise_core::ContextSource` against the auxiliary data endpoints.

pub mod augment;
pub mod ollama;

pub use augment::HttpContextSource;
pub use ollama::OllamaChat;
