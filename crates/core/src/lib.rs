//! # WattWise Core
//!
//! Domain types, traits, and error definitions for the WattWise HVAC
//! recommendation engine. This crate has **zero framework dependencies** —
//! it defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The two external collaborators (the chat endpoint and the augmentation
//! endpoints) are defined as traits here. HTTP implementations live in
//! `wattwise-client`. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod chat;
pub mod context;
pub mod error;
pub mod readings;
pub mod session;
pub mod tier;

// Re-export key types at crate root for ergonomics
pub use chat::{ChatBackend, ChatMessage, ChatRequest};
pub use context::{ContextSelection, ContextSource};
pub use error::{RecommendError, RecommendationResult};
pub use readings::{RawReadings, ReadingSet};
pub use session::Session;
pub use tier::{AccessTier, resolve_style};
