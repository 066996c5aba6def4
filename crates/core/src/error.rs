//! Error types for the WattWise domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Every recommendation
//! run terminates in a `RecommendationResult`; nothing escapes as an
//! unhandled fault. A malformed streamed line is deliberately *not* an
//! error — it is inlined into the accumulated text by the chat client.

use thiserror::Error;

/// A classified failure of one recommendation run.
#[derive(Debug, Clone, Error)]
pub enum RecommendError {
    /// A raw input field did not parse as its declared numeric type.
    /// Reported to the user with the offending field.
    #[error("{field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The chat endpoint answered with a non-200 status. The body is not
    /// read in this case.
    #[error("status {status}")]
    Http { status: u16 },

    /// Connection, I/O, or encoding failure talking to the chat endpoint,
    /// carrying the underlying message.
    #[error("{0}")]
    Network(String),
}

impl RecommendError {
    /// Shorthand for a "not a number" validation failure on `field`.
    pub fn not_a_number(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "not a number".into(),
        }
    }
}

/// Terminal value of one orchestration run: the recommendation text or a
/// classified error. Never retained beyond display.
pub type RecommendationResult = std::result::Result<String, RecommendError>;
