//! Member statistics for the caller's first organization
//!
//! A flatter report than [`super::org`]: members stay in fetch order, failed
//! members carry an error string instead of `null` usage, and the acceptance
//! rate is a plain average over all members.

use log::{info, warn};
use serde::Serialize;

use super::member::{CommitScope, fetch_activity};
use super::{ActivitySnapshot, LanguageCounts, MemberUsage, active_time, merge_languages};
use crate::client::{GitHubApi, Member, fetch_all_settled};
use crate::error::Result;

/// Error text for members whose data could not be fetched
pub const MEMBER_FETCH_ERROR: &str = "Failed to fetch member data";

/// Identity fields echoed for each member
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberIdentity {
    pub login: String,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub name: Option<String>,
}

impl From<&Member> for MemberIdentity {
    fn from(member: &Member) -> Self {
        Self {
            login: member.login.clone(),
            avatar_url: member.avatar_url().map(str::to_string),
            html_url: member.html_url().map(str::to_string),
            name: member.name().map(str::to_string),
        }
    }
}

/// Estimated usage for one member
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberStatistics {
    pub total_suggestions: u64,
    pub acceptance_rate: f64,
    pub lines_saved: u64,
    pub repositories: usize,
    pub commits: u64,
    pub languages: LanguageCounts,
    /// Time of the most recent public event, if any
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
    pub active_time: String,
}

/// Raw activity counts for one member
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberActivity {
    pub recent_commits: u64,
    pub recent_additions: u64,
    pub repository_count: usize,
    pub recent_events: usize,
}

/// One row of the report
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MemberStatisticsEntry {
    Available {
        user: MemberIdentity,
        statistics: MemberStatistics,
        activity: MemberActivity,
    },
    Failed {
        user: Member,
        error: String,
    },
}

impl MemberStatisticsEntry {
    fn from_activity(member: &Member, activity: &ActivitySnapshot) -> Self {
        let usage = MemberUsage::from_activity(activity, Some(member));

        MemberStatisticsEntry::Available {
            user: MemberIdentity::from(member),
            statistics: MemberStatistics {
                total_suggestions: usage.total_suggestions,
                acceptance_rate: usage.acceptance_rate,
                lines_saved: usage.lines_saved,
                repositories: usage.repositories,
                commits: usage.activity_level,
                languages: usage.languages,
                last_active: activity.events.first().and_then(|e| e.created_at),
                active_time: active_time(usage.activity_level),
            },
            activity: MemberActivity {
                recent_commits: usage.activity_level,
                recent_additions: usage.contributions.additions,
                repository_count: usage.repositories,
                recent_events: activity.recent_event_count(),
            },
        }
    }

    fn statistics(&self) -> Option<&MemberStatistics> {
        match self {
            MemberStatisticsEntry::Available { statistics, .. } => Some(statistics),
            MemberStatisticsEntry::Failed { .. } => None,
        }
    }
}

/// Organization-wide statistics plus every member row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberStatisticsReport {
    pub organization: String,
    pub total_members: usize,
    pub active_members: usize,
    pub total_suggestions: u64,
    pub total_lines_saved: u64,
    pub average_acceptance_rate: f64,
    pub total_repositories: usize,
    pub language_distribution: LanguageCounts,
    pub member_statistics: Vec<MemberStatisticsEntry>,
}

/// Response body; `{"members": []}` when the caller has no organization
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MemberStatisticsResponse {
    NoOrganization { members: Vec<MemberStatisticsEntry> },
    Report(MemberStatisticsReport),
}

/// Build member statistics for the first organization the token can see.
pub async fn build_member_statistics<A>(
    api: &A,
    token: &str,
    max_concurrent: usize,
) -> Result<MemberStatisticsResponse>
where
    A: GitHubApi + ?Sized,
{
    let orgs = api.list_user_orgs(token).await?;
    let Some(org) = orgs.into_iter().next() else {
        info!("Token has no organizations; returning empty member list");
        return Ok(MemberStatisticsResponse::NoOrganization {
            members: Vec::new(),
        });
    };

    let org_name = org.login;
    let members = api.list_org_members(&org_name, token).await?;
    info!(
        "Collecting member statistics for {} ({} members)",
        org_name,
        members.len()
    );

    let scope = CommitScope::Organization(&org_name);
    let entries = fetch_all_settled(
        members,
        move |member| async move {
            match fetch_activity(api, &member.login, scope, token).await {
                Ok(activity) => MemberStatisticsEntry::from_activity(&member, &activity),
                Err(err) => {
                    warn!("Error fetching data for {}: {}", member.login, err);
                    MemberStatisticsEntry::Failed {
                        user: member,
                        error: MEMBER_FETCH_ERROR.to_string(),
                    }
                }
            }
        },
        max_concurrent,
    )
    .await;

    Ok(MemberStatisticsResponse::Report(summarize(org_name, entries)))
}

/// Roll member rows into organization totals.
pub fn summarize(
    organization: String,
    entries: Vec<MemberStatisticsEntry>,
) -> MemberStatisticsReport {
    let total_members = entries.len();
    let mut active_members = 0;
    let mut total_suggestions = 0;
    let mut total_lines_saved = 0;
    let mut acceptance_sum = 0.0;
    let mut total_repositories = 0;
    let mut language_distribution = LanguageCounts::new();

    for stats in entries.iter().filter_map(MemberStatisticsEntry::statistics) {
        active_members += 1;
        total_suggestions += stats.total_suggestions;
        total_lines_saved += stats.lines_saved;
        acceptance_sum += stats.acceptance_rate;
        total_repositories += stats.repositories;
        merge_languages(&mut language_distribution, &stats.languages);
    }

    // Failed members count as 0% in the average
    let average_acceptance_rate = if total_members == 0 {
        0.0
    } else {
        acceptance_sum / total_members as f64
    };

    MemberStatisticsReport {
        organization,
        total_members,
        active_members,
        total_suggestions,
        total_lines_saved,
        average_acceptance_rate,
        total_repositories,
        language_distribution,
        member_statistics: entries,
    }
}
