//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::OAuthCodeExchange;
use super::{CommitSearch, Event, GitHubApi, Member, Organization, Repository};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// Media type for the v3 REST API
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// REST API version pinned on every call
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Client identifier sent as `User-Agent` (GitHub rejects requests without one)
const CLIENT_USER_AGENT: &str = "Copilot-Dashboard";

/// OAuth app credentials used for the code exchange
#[derive(Debug, Clone)]
struct OAuthApp {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

/// GitHub REST API client.
///
/// Holds only connection settings. The token travels with each call, so one
/// instance serves every request.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: HttpClient,
    api_base_url: String,
    oauth_base_url: String,
    oauth: Option<OAuthApp>,
}

impl GitHubClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let oauth = match (&config.client_id, &config.client_secret) {
            (Some(id), Some(secret)) => Some(OAuthApp {
                client_id: id.clone(),
                client_secret: secret.clone(),
                redirect_uri: config.redirect_uri.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            oauth_base_url: config.oauth_base_url.trim_end_matches('/').to_string(),
            oauth,
        })
    }

    /// Base URL all API paths are resolved against
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Resolve path segments against the base URL.
    ///
    /// Each segment is percent-encoded, so a login or organization name can
    /// never change which endpoint is called.
    pub fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let invalid = || {
            ConfigError::Invalid(format!(
                "api_base_url is not a base URL: {}",
                self.api_base_url
            ))
        };

        let mut url = Url::parse(&self.api_base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET an API path and decode the JSON body.
    ///
    /// Single attempt: any non-2xx status becomes [`ApiError::Upstream`]
    /// carrying the status and raw body.
    pub async fn request<T: DeserializeOwned>(&self, segments: &[&str], token: &str) -> Result<T> {
        self.request_with_query(segments, &[], token).await
    }

    async fn request_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        token: &str,
    ) -> Result<T> {
        let url = self.api_url(segments)?;
        debug!("GitHub request: GET {} {:?}", url, query);

        let mut request = self
            .http
            .get(url.clone())
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            warn!("GitHub request to {} failed with {}: {}", url, status, body);
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
                .into()
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn exchange_oauth_code(&self, code: &str) -> Result<String> {
        let app = self.oauth.as_ref().ok_or(ApiError::MissingCredentials)?;
        let url = format!("{}/login/oauth/access_token", self.oauth_base_url);

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&OAuthCodeExchange {
                client_id: &app.client_id,
                client_secret: &app.client_secret,
                code,
                redirect_uri: &app.redirect_uri,
            })
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            warn!("OAuth code exchange failed with {}: {}", status, body);
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let payload: Value = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse token response: {}", e))
        })?;

        // GitHub reports a bad code with 200 and an `error` field
        if payload.get("error").is_some() {
            warn!("OAuth error: {}", payload);
            return Err(ApiError::OAuth(payload).into());
        }

        payload
            .get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::InvalidResponse("Token response has no access_token".to_string()).into()
            })
    }

    async fn get_authenticated_user(&self, token: &str) -> Result<Value> {
        self.request(&["user"], token).await
    }

    async fn list_user_orgs(&self, token: &str) -> Result<Vec<Organization>> {
        self.request(&["user", "orgs"], token).await
    }

    async fn get_org(&self, org: &str, token: &str) -> Result<Organization> {
        self.request(&["orgs", org], token).await
    }

    async fn list_org_members(&self, org: &str, token: &str) -> Result<Vec<Member>> {
        self.request(&["orgs", org, "members"], token).await
    }

    async fn list_user_repos(&self, login: &str, token: &str) -> Result<Vec<Repository>> {
        self.request(&["users", login, "repos"], token).await
    }

    async fn list_user_events(&self, login: &str, token: &str) -> Result<Vec<Event>> {
        self.request(&["users", login, "events", "public"], token)
            .await
    }

    async fn search_commits(&self, query: &str, token: &str) -> Result<CommitSearch> {
        self.request_with_query(&["search", "commits"], &[("q", query)], token)
            .await
    }
}
