//! `wattwise doctor` — Diagnose endpoint and credential-store health.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use wattwise_client::OllamaChat;
use wattwise_config::AppConfig;
use wattwise_core::chat::ChatBackend;

pub async fn run() -> anyhow::Result<()> {
    println!("WattWise Doctor — System Diagnostics");
    println!("====================================\n");

    let mut issues = 0;

    // Check config
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = match AppConfig::load() {
        Ok(config) => {
            if config_path.exists() {
                println!("  [ok]   Config file valid");
            } else {
                println!("  [ok]   No config file — using defaults");
            }
            config
        }
        Err(e) => {
            println!("  [fail] Config file invalid: {e}");
            println!();
            println!("  1 issue found. See above for details.");
            return Ok(());
        }
    };

    // Check credential file
    if Path::new(&config.users_file).exists() {
        println!("  [ok]   Credential file present: {}", config.users_file);
    } else {
        println!(
            "  [warn] No credential file at '{}' — only --tier sessions will work",
            config.users_file
        );
        issues += 1;
    }

    // Check chat endpoint reachability
    let backend = Arc::new(OllamaChat::new(
        config.endpoint_base(),
        Duration::from_secs(5),
    ));
    match backend.health_check().await {
        Ok(true) => println!("  [ok]   Chat endpoint reachable: {}", config.endpoint_base()),
        Ok(false) => {
            println!(
                "  [fail] Chat endpoint answered with an error status: {}",
                config.endpoint_base()
            );
            issues += 1;
        }
        Err(e) => {
            println!(
                "  [fail] Chat endpoint unreachable ({}): {e}",
                config.endpoint_base()
            );
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
