//! Arguments shared across commands

use clap::Args;

use crate::cli::Cli;
use crate::error::{ConfigError, Result};

/// Global CLI options passed to command handlers.
///
/// Precedence is CLI flag, then environment variable, then config file, then
/// default. This struct holds the first two layers; the config file is merged
/// in [`super::CommandContext`].
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.copilot-dashboard/config.yaml)
    pub config: Option<String>,

    /// GitHub API base URL override
    pub api_host: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}

/// GitHub token for commands that call the API on a user's behalf
#[derive(Debug, Clone, Args, Default)]
pub struct TokenArgs {
    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl TokenArgs {
    /// The token, or an error explaining how to supply one
    pub fn require(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingToken.into())
    }
}
