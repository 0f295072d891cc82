//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::resolve_config;
use crate::config::{Config, DEFAULT_API_BASE_URL};
use crate::error::Result;

/// Display the effective configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Copilot Dashboard Configuration Status".bold());

    let path = Config::resolve_path(opts.config_ref())?;
    if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let config = resolve_config(opts)?;
    println!();

    println!("{} Listening on {}", "○".dimmed(), config.listen_addr());

    if config.api_base_url == DEFAULT_API_BASE_URL {
        println!("{} GitHub API: {}", "✓".green(), config.api_base_url);
    } else {
        println!(
            "{} Custom GitHub API host: {}",
            "○".dimmed(),
            config.api_base_url.cyan()
        );
    }

    if config.has_oauth_credentials() {
        println!("{} OAuth app credentials configured", "✓".green());
        if let Some(id) = &config.client_id {
            println!("  Client ID: {}", mask_secret(id).dimmed());
        }
    } else {
        println!("{} OAuth app credentials not configured", "✗".red());
        println!("  → Set GITHUB_CLIENT_ID and GITHUB_CLIENT_SECRET");
    }

    println!("{} Allowed origin: {}", "○".dimmed(), config.allowed_origin);
    println!(
        "{} Member concurrency: {}",
        "○".dimmed(),
        config.member_concurrency
    );

    if std::env::var("GITHUB_TOKEN").is_ok_and(|t| !t.is_empty()) {
        println!("{} GITHUB_TOKEN set for CLI reports", "✓".green());
    } else {
        println!("{} GITHUB_TOKEN not set", "○".dimmed());
        println!("  → Pass --token to 'report' and 'user'");
    }

    Ok(())
}

/// Show only the first four characters of a secret
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if visible.len() == secret.len() {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}
