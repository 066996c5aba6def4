//! Best-effort HTTP context augmenter.
//!
//! Issues at most one GET per recommendation run against a fixed,
//! selection-specific endpoint. The response body is opaque text embedded
//! into the prompt; it is never validated as JSON. Every failure mode —
//! non-200 status, connection error, timeout, body-read failure — degrades
//! to an empty string. Augmentation never blocks the core recommendation.

use std::time::Duration;
use tracing::debug;
use wattwise_core::context::{ContextSelection, ContextSource};

/// A `ContextSource` backed by the auxiliary HTTP endpoints.
pub struct HttpContextSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContextSource {
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

    async fn try_fetch(&self, url: &str) -> Result<String, String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(format!("status {status}"));
        }

        response.text().await.map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl ContextSource for HttpContextSource {
    async fn fetch(&self, selection: ContextSelection) -> String {
        let path = match selection {
            ContextSelection::None => return String::new(),
            ContextSelection::UsageTrends => "/api/energy-usage-trends",
            ContextSelection::WeatherForecast => "/api/weather-forecasts",
        };

        let url = format!("{}{}", self.base_url, path);
        debug!(%selection, "Fetching augmentation context");

        match self.try_fetch(&url).await {
            Ok(body) => format!("Additional Data: {body}"),
            Err(reason) => {
                debug!(%selection, %reason, "Augmentation fetch failed, continuing without context");
                String::new()
            }
        }
    }
}
