//! Session context — who is asking, and at what service tier.
//!
//! The tier is resolved exactly once at login (by the credential store in
//! the CLI layer) and is read-only for the lifetime of the session. Passing
//! the session into the orchestrator explicitly avoids the hidden
//! process-wide mutable state the original system relied on.

use crate::tier::AccessTier;
use serde::{Deserialize, Serialize};

/// The session-scoped context for recommendation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in username, when one was resolved from the credential
    /// store. Purely informational; the tier is what drives policy.
    pub username: Option<String>,
    /// The user's access tier, set once at login.
    pub tier: AccessTier,
}

impl Session {
    /// A session for a user resolved from the credential store.
    pub fn for_user(username: &str, tier: AccessTier) -> Self {
        Self {
            username: Some(username.to_string()),
            tier,
        }
    }

    /// A session with an explicit tier and no username (e.g. `--tier`).
    pub fn anonymous(tier: AccessTier) -> Self {
        Self {
            username: None,
            tier,
        }
    }
}
