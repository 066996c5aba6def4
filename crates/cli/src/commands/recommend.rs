//! `wattwise recommend` — run one recommendation and render the result.

use crate::credentials::CredentialStore;
use anyhow::{Context, bail};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use wattwise_agent::Recommender;
use wattwise_client::{HttpContextSource, OllamaChat};
use wattwise_config::AppConfig;
use wattwise_core::context::ContextSelection;
use wattwise_core::readings::RawReadings;
use wattwise_core::session::Session;
use wattwise_core::tier::AccessTier;

#[derive(clap::Args)]
pub struct RecommendArgs {
    /// Room temperature in °C
    #[arg(short, long)]
    pub temperature: String,

    /// Number of people in the room
    #[arg(short, long)]
    pub occupancy: String,

    /// Current power draw in watts
    #[arg(short, long)]
    pub power: String,

    /// Room floor area in m² (optional)
    #[arg(long)]
    pub room_area: Option<String>,

    /// Whether the request falls inside peak tariff hours
    #[arg(long)]
    pub peak_hours: bool,

    /// Auxiliary context to embed: none, usage-trends, or weather-forecast
    #[arg(long, default_value = "none")]
    pub context: ContextSelection,

    /// Username to resolve against the credential file
    #[arg(short, long)]
    pub user: Option<String>,

    /// Access tier to use directly, bypassing the credential file
    #[arg(long)]
    pub tier: Option<String>,
}

pub async fn run(args: RecommendArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let session = resolve_session(&args, &config)?;

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let backend = Arc::new(OllamaChat::new(config.endpoint_base(), timeout));
    let context = Arc::new(HttpContextSource::new(config.endpoint_base(), timeout));
    let recommender = Recommender::new(backend, context, &config.model);

    let raw = RawReadings {
        temperature: args.temperature,
        occupancy: args.occupancy,
        power: args.power,
        room_area: args.room_area,
        peak_hours: args.peak_hours,
    };

    eprint!("  Thinking...");
    let result = recommender.run(&raw, &session, args.context).await;
    eprint!("\r             \r");

    match result {
        Ok(text) => println!("Recommended Setting: {text}"),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}

/// Resolve the session tier: `--tier` wins, otherwise `--user` is looked
/// up in the credential file. Exactly one tier is active per session.
fn resolve_session(args: &RecommendArgs, config: &AppConfig) -> anyhow::Result<Session> {
    if let Some(tier) = &args.tier {
        let tier = AccessTier::new(tier);
        return Ok(match &args.user {
            Some(user) => Session::for_user(user, tier),
            None => Session::anonymous(tier),
        });
    }

    let Some(user) = &args.user else {
        bail!("Provide --user (resolved against the credential file) or an explicit --tier");
    };

    let store = CredentialStore::load(Path::new(&config.users_file)).with_context(|| {
        format!("Failed to read credential file '{}'", config.users_file)
    })?;

    let Some(tier) = store.resolve(user) else {
        bail!("Unknown user '{user}' in credential file '{}'", config.users_file);
    };

    Ok(Session::for_user(user, tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(user: Option<&str>, tier: Option<&str>) -> RecommendArgs {
        RecommendArgs {
            temperature: "22".into(),
            occupancy: "3".into(),
            power: "500".into(),
            room_area: None,
            peak_hours: false,
            context: ContextSelection::None,
            user: user.map(String::from),
            tier: tier.map(String::from),
        }
    }

    #[test]
    fn explicit_tier_bypasses_the_credential_file() {
        let config = AppConfig {
            users_file: "/nonexistent/users.csv".into(),
            ..AppConfig::default()
        };
        let session = resolve_session(&args(None, Some("Rich")), &config).unwrap();
        assert_eq!(session.tier.as_str(), "rich");
        assert!(session.username.is_none());
    }

    #[test]
    fn user_is_resolved_from_the_credential_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alice,average").unwrap();
        let config = AppConfig {
            users_file: file.path().display().to_string(),
            ..AppConfig::default()
        };
        let session = resolve_session(&args(Some("alice"), None), &config).unwrap();
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.tier.as_str(), "average");
    }

    #[test]
    fn unknown_user_is_an_error() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alice,average").unwrap();
        let config = AppConfig {
            users_file: file.path().display().to_string(),
            ..AppConfig::default()
        };
        assert!(resolve_session(&args(Some("bob"), None), &config).is_err());
    }

    #[test]
    fn neither_user_nor_tier_is_an_error() {
        let config = AppConfig::default();
        assert!(resolve_session(&args(None, None), &config).is_err());
    }
}
