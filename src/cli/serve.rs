//! Serve command implementation

use std::sync::Arc;

use log::{info, warn};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::server;

/// Run the HTTP API server until interrupted
pub async fn run(opts: &GlobalOptions, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let CommandContext { mut config, client } = CommandContext::new(opts)?;

    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(port) = port {
        config.port = port;
    }

    if !config.has_oauth_credentials() {
        warn!("GITHUB_CLIENT_ID or GITHUB_CLIENT_SECRET not set; OAuth login will fail");
    }
    info!("GitHub API: {}", client.api_base_url());
    info!("Allowed origin: {}", config.allowed_origin);

    server::serve(&config, client as Arc<dyn GitHubApi>).await
}
