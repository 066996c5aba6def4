//! Context augmentation — optional auxiliary data embedded in the prompt.
//!
//! Augmentation is best-effort by contract: a `ContextSource` is total and
//! returns an empty string on absence or any failure. It never raises an
//! error that could block the core recommendation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Which auxiliary endpoint, if any, to consult before composing the
/// prompt. Drives zero or one outbound augmentation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextSelection {
    #[default]
    None,
    UsageTrends,
    WeatherForecast,
}

impl std::str::FromStr for ContextSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "usage-trends" => Ok(Self::UsageTrends),
            "weather-forecast" => Ok(Self::WeatherForecast),
            other => Err(format!(
                "unknown context selection '{other}' (expected none, usage-trends, or weather-forecast)"
            )),
        }
    }
}

impl std::fmt::Display for ContextSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::UsageTrends => "usage-trends",
            Self::WeatherForecast => "weather-forecast",
        };
        f.write_str(s)
    }
}

/// The augmentation collaborator.
#[async_trait]
pub trait ContextSource: Send + Sync {
    /// Fetch context text for the selection. Total: failures degrade to an
    /// empty string, never an error.
    async fn fetch(&self, selection: ContextSelection) -> String;
}

/// A source that always returns no context. Useful when augmentation is
/// disabled entirely.
pub struct NoContext;

#[async_trait]
impl ContextSource for NoContext {
    async fn fetch(&self, _selection: ContextSelection) -> String {
        String::new()
    }
}
