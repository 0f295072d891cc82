//! Mock GitHub API client for testing
//!
//! Provides a mock implementation of [`GitHubApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{CommitSearch, Event, GitHubApi, Member, Organization, Repository};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_members(vec![MemberBuilder::new("alice").build()])
///     .await
///     .with_commit_count("alice", 10)
///     .await;
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    /// Profile returned from get_authenticated_user
    user: Arc<Mutex<Option<Value>>>,
    /// Organizations returned from list_user_orgs
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Members returned from list_org_members
    members: Arc<Mutex<Vec<Member>>>,
    /// Repositories per login
    repos: Arc<Mutex<HashMap<String, Vec<Repository>>>>,
    /// Events per login
    events: Arc<Mutex<HashMap<String, Vec<Event>>>>,
    /// Commit search totals per login (absent login = no `total_count`)
    commit_counts: Arc<Mutex<HashMap<String, u64>>>,
    /// Logins whose per-user calls fail
    failing_logins: Arc<Mutex<HashSet<String>>>,
    /// Raw token response body for exchange_oauth_code
    oauth_response: Arc<Mutex<Option<Value>>>,
    /// Error to return from the next org-level call - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Commit search queries received, in call order
    search_queries: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub exchange_oauth_code: usize,
    pub get_authenticated_user: usize,
    pub list_user_orgs: usize,
    pub get_org: usize,
    pub list_org_members: usize,
    pub list_user_repos: usize,
    pub list_user_events: usize,
    pub search_commits: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.exchange_oauth_code
            + self.get_authenticated_user
            + self.list_user_orgs
            + self.get_org
            + self.list_org_members
            + self.list_user_repos
            + self.list_user_events
            + self.search_commits
    }
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the profile returned for the token owner.
    pub async fn with_user(self, user: Value) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure organizations returned from list_user_orgs.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure members returned from list_org_members.
    pub async fn with_members(self, members: Vec<Member>) -> Self {
        *self.members.lock().await = members;
        self
    }

    /// Configure repositories for a login.
    pub async fn with_repos(self, login: &str, repos: Vec<Repository>) -> Self {
        self.repos.lock().await.insert(login.to_string(), repos);
        self
    }

    /// Configure public events for a login.
    pub async fn with_events(self, login: &str, events: Vec<Event>) -> Self {
        self.events.lock().await.insert(login.to_string(), events);
        self
    }

    /// Configure the commit search total for a login.
    pub async fn with_commit_count(self, login: &str, count: u64) -> Self {
        self.commit_counts
            .lock()
            .await
            .insert(login.to_string(), count);
        self
    }

    /// Make every per-user call for a login fail with a 500.
    pub async fn with_failing_login(self, login: &str) -> Self {
        self.failing_logins.lock().await.insert(login.to_string());
        self
    }

    /// Configure the raw token response for exchange_oauth_code.
    pub async fn with_oauth_response(self, body: Value) -> Self {
        *self.oauth_response.lock().await = Some(body);
        self
    }

    /// Configure an error to return on the next org-level API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get commit search queries received so far.
    pub async fn search_queries(&self) -> Vec<String> {
        self.search_queries.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Fail if the login was configured to fail.
    async fn check_login(&self, login: &str) -> Result<()> {
        if self.failing_logins.lock().await.contains(login) {
            return Err(ApiError::Upstream {
                status: 500,
                body: format!(r#"{{"message":"mock failure for {}"}}"#, login),
            }
            .into());
        }
        Ok(())
    }
}

/// Extract the `author:` login from a commit search query.
fn author_of(query: &str) -> Option<&str> {
    query
        .split_whitespace()
        .find_map(|term| term.strip_prefix("author:"))
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn exchange_oauth_code(&self, _code: &str) -> Result<String> {
        self.call_count.lock().await.exchange_oauth_code += 1;

        let body = self
            .oauth_response
            .lock()
            .await
            .clone()
            .ok_or(ApiError::MissingCredentials)?;

        if body.get("error").is_some() {
            return Err(ApiError::OAuth(body).into());
        }
        body.get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ApiError::InvalidResponse("no access_token".to_string()).into())
    }

    async fn get_authenticated_user(&self, _token: &str) -> Result<Value> {
        self.check_error().await?;
        self.call_count.lock().await.get_authenticated_user += 1;

        self.user.lock().await.clone().ok_or_else(|| {
            ApiError::Upstream {
                status: 401,
                body: r#"{"message":"Bad credentials"}"#.to_string(),
            }
            .into()
        })
    }

    async fn list_user_orgs(&self, _token: &str) -> Result<Vec<Organization>> {
        self.check_error().await?;
        self.call_count.lock().await.list_user_orgs += 1;

        Ok(self.orgs.lock().await.clone())
    }

    async fn get_org(&self, org: &str, _token: &str) -> Result<Organization> {
        self.check_error().await?;
        self.call_count.lock().await.get_org += 1;

        Ok(super::fixtures::organization(org))
    }

    async fn list_org_members(&self, _org: &str, _token: &str) -> Result<Vec<Member>> {
        self.check_error().await?;
        self.call_count.lock().await.list_org_members += 1;

        Ok(self.members.lock().await.clone())
    }

    async fn list_user_repos(&self, login: &str, _token: &str) -> Result<Vec<Repository>> {
        self.call_count.lock().await.list_user_repos += 1;
        self.check_login(login).await?;

        Ok(self
            .repos
            .lock()
            .await
            .get(login)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_user_events(&self, login: &str, _token: &str) -> Result<Vec<Event>> {
        self.call_count.lock().await.list_user_events += 1;
        self.check_login(login).await?;

        Ok(self
            .events
            .lock()
            .await
            .get(login)
            .cloned()
            .unwrap_or_default())
    }

    async fn search_commits(&self, query: &str, _token: &str) -> Result<CommitSearch> {
        self.call_count.lock().await.search_commits += 1;
        self.search_queries.lock().await.push(query.to_string());

        let login = author_of(query).unwrap_or_default();
        self.check_login(login).await?;

        Ok(CommitSearch {
            total_count: self.commit_counts.lock().await.get(login).copied(),
        })
    }
}
