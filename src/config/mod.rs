//! Configuration management for the dashboard backend
//!
//! Settings come from an optional YAML file, then environment variables, then
//! CLI flags (applied by the caller). A missing file at the default location
//! yields defaults; a missing file at an explicit `--config` path is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Public GitHub REST API host
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Host serving the OAuth token exchange endpoint
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://github.com";

/// Frontend dev server origin
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// GitHub REST API base URL
    pub api_base_url: String,

    /// GitHub OAuth base URL (token exchange lives under `/login/oauth`)
    pub oauth_base_url: String,

    /// OAuth app client ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth app client secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Redirect URI sent with the OAuth code exchange
    pub redirect_uri: String,

    /// Origin allowed to call the backend from a browser
    pub allowed_origin: String,

    /// Maximum number of members fetched at the same time
    pub member_concurrency: usize,

    /// Per-request timeout for upstream calls
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            oauth_base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            client_id: None,
            client_secret: None,
            redirect_uri: DEFAULT_FRONTEND_ORIGIN.to_string(),
            allowed_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            member_concurrency: 32,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".copilot-dashboard").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config file at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply overrides from process environment variables
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `PORT`, `GITHUB_CLIENT_ID` and `GITHUB_CLIENT_SECRET` overrides.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT is not a valid port: {port}")))?;
        }
        if let Some(id) = lookup("GITHUB_CLIENT_ID").filter(|v| !v.is_empty()) {
            self.client_id = Some(id);
        }
        if let Some(secret) = lookup("GITHUB_CLIENT_SECRET").filter(|v| !v.is_empty()) {
            self.client_secret = Some(secret);
        }
        Ok(self)
    }

    /// Validate settings that serde cannot check
    pub fn validate(&self) -> Result<()> {
        if self.member_concurrency == 0 {
            return Err(
                ConfigError::Invalid("member_concurrency must be at least 1".to_string()).into(),
            );
        }
        if !self.api_base_url.starts_with("http") {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL: {}",
                self.api_base_url
            ))
            .into());
        }
        Ok(())
    }

    /// Whether the OAuth code exchange can be performed
    pub fn has_oauth_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Socket address string for the server listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
