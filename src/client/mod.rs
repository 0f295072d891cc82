//! GitHub REST API client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod parallel;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use models::{CommitSearch, Event, Member, Organization, Repository};
pub use parallel::fetch_all_settled;

/// GitHub API operations used by the dashboard.
///
/// Every call takes the caller's token explicitly; implementations hold no
/// per-user state and can be shared across requests.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Exchange an OAuth authorization code for an access token
    async fn exchange_oauth_code(&self, code: &str) -> Result<String>;

    /// Profile of the token's owner (`/user`), passed through as-is
    async fn get_authenticated_user(&self, token: &str) -> Result<Value>;

    /// Organizations the token's owner belongs to (`/user/orgs`)
    async fn list_user_orgs(&self, token: &str) -> Result<Vec<Organization>>;

    /// Organization details (`/orgs/{org}`)
    async fn get_org(&self, org: &str, token: &str) -> Result<Organization>;

    /// Organization members (`/orgs/{org}/members`)
    async fn list_org_members(&self, org: &str, token: &str) -> Result<Vec<Member>>;

    /// Public repositories of a user (`/users/{login}/repos`)
    async fn list_user_repos(&self, login: &str, token: &str) -> Result<Vec<Repository>>;

    /// Most recent page of a user's public events
    async fn list_user_events(&self, login: &str, token: &str) -> Result<Vec<Event>>;

    /// Commit search (`/search/commits?q=...`)
    async fn search_commits(&self, query: &str, token: &str) -> Result<CommitSearch>;
}
