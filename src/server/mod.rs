//! HTTP API consumed by the dashboard frontend

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use log::info;
use tokio::net::TcpListener;

use crate::client::GitHubApi;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn GitHubApi>,
    pub member_concurrency: usize,
    pub allowed_origin: HeaderValue,
}

impl AppState {
    pub fn new(api: Arc<dyn GitHubApi>, config: &Config) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(&config.allowed_origin).map_err(|_| {
            ConfigError::Invalid(format!(
                "allowed_origin is not a valid header value: {}",
                config.allowed_origin
            ))
        })?;

        Ok(Self {
            api,
            member_concurrency: config.member_concurrency,
            allowed_origin,
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/auth/github/callback", post(handlers::oauth_callback))
        .route("/api/github/user", get(handlers::user))
        .route("/api/github/orgs", get(handlers::orgs))
        .route(
            "/api/github/copilot/org/:org_name/members",
            get(handlers::org_members),
        )
        .route(
            "/api/github/copilot/user/:username",
            get(handlers::user_usage),
        )
        .route(
            "/api/github/organization/members",
            get(handlers::organization_members),
        )
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::no_cache))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::cors,
        ))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config, api: Arc<dyn GitHubApi>) -> Result<()> {
    let state = AppState::new(api, config)?;
    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
