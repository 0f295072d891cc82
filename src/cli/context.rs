//! Command execution context
//!
//! Loads configuration, applies environment and flag overrides, and builds
//! the GitHub client every API-backed command needs.

use std::sync::Arc;

use log::debug;

use crate::cli::GlobalOptions;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;

/// Resolved configuration plus a ready-to-use client
pub struct CommandContext {
    pub config: Config,
    pub client: Arc<GitHubClient>,
}

impl CommandContext {
    /// Build the context from global options.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded, an override is
    /// invalid, or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let client = Arc::new(GitHubClient::new(&config)?);

        Ok(Self { config, client })
    }
}

/// Load, override and validate configuration without building a client.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?.with_env()?;

    if let Some(host) = opts.api_host_ref() {
        debug!("Using custom API host: {}", host);
        config.api_base_url = host.trim_end_matches('/').to_string();
    }

    config.validate()?;
    Ok(config)
}
