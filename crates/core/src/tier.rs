//! Access tiers and the recommendation styles derived from them.
//!
//! A tier is a per-user service level set once at login. Matching is an
//! exact, case-insensitive string comparison against the stored label —
//! there is no hierarchy. Unknown tiers resolve to the default style
//! rather than failing.

use serde::{Deserialize, Serialize};

/// Style descriptor for the `poor` tier.
pub const STYLE_POOR: &str = "cheap and efficient";
/// Style descriptor for the `average` tier.
pub const STYLE_AVERAGE: &str = "balanced between cost and performance";
/// Style descriptor for the `rich` tier.
pub const STYLE_RICH: &str = "best performance regardless of cost";
/// Fallback descriptor for unrecognized tiers.
pub const STYLE_DEFAULT: &str = "standard recommendation";

/// Map an access-tier label to its recommendation style descriptor.
///
/// Total function: every input maps to exactly one of the four
/// descriptors, case-insensitively.
pub fn resolve_style(tier: &str) -> &'static str {
    match tier.trim().to_lowercase().as_str() {
        "poor" => STYLE_POOR,
        "average" => STYLE_AVERAGE,
        "rich" => STYLE_RICH,
        _ => STYLE_DEFAULT,
    }
}

/// A per-user access tier, normalized to a trimmed lowercase label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTier(String);

impl AccessTier {
    pub fn new(label: &str) -> Self {
        Self(label.trim().to_lowercase())
    }

    /// The normalized label, as embedded in prompts.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The style descriptor this tier resolves to.
    pub fn style(&self) -> &'static str {
        resolve_style(&self.0)
    }
}

impl std::fmt::Display for AccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
