//! Per-member usage fetching

use log::{debug, warn};

use super::{ActivitySnapshot, MemberOutcome, MemberUsage};
use crate::client::{GitHubApi, Member};
use crate::error::Result;

/// Which commits count toward a user's activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitScope<'a> {
    /// Only commits in repositories of this organization
    Organization(&'a str),
    /// All of the user's commits
    User,
}

impl CommitScope<'_> {
    /// Commit search query for a login
    pub fn query(&self, login: &str) -> String {
        match self {
            CommitScope::Organization(org) => format!("author:{} org:{}", login, org),
            CommitScope::User => format!("author:{}", login),
        }
    }
}

/// Fetch repositories, public events and commit count for a login.
///
/// The three calls run concurrently; the first failure fails the whole fetch.
pub async fn fetch_activity<A>(
    api: &A,
    login: &str,
    scope: CommitScope<'_>,
    token: &str,
) -> Result<ActivitySnapshot>
where
    A: GitHubApi + ?Sized,
{
    let query = scope.query(login);
    let (repos, events, search) = tokio::try_join!(
        api.list_user_repos(login, token),
        api.list_user_events(login, token),
        api.search_commits(&query, token),
    )?;

    debug!(
        "{}: {} repos, {} events, {:?} commits",
        login,
        repos.len(),
        events.len(),
        search.total_count
    );

    Ok(ActivitySnapshot {
        repos,
        events,
        commit_count: search.commit_count(),
    })
}

/// Fetch and derive usage for one member.
///
/// Never fails: any fetch error is logged and reported as
/// [`MemberOutcome::Unavailable`] so the caller can keep going.
pub async fn fetch_member_usage<A>(
    api: &A,
    member: &Member,
    scope: CommitScope<'_>,
    token: &str,
) -> MemberOutcome
where
    A: GitHubApi + ?Sized,
{
    match fetch_activity(api, &member.login, scope, token).await {
        Ok(activity) => {
            MemberOutcome::Available(MemberUsage::from_activity(&activity, Some(member)))
        }
        Err(err) => {
            warn!("Error fetching data for {}: {}", member.login, err);
            MemberOutcome::Unavailable(err.to_string())
        }
    }
}
