//! Individual user usage summary

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::member::{CommitScope, fetch_activity};
use super::{
    Contributions, LanguageCounts, acceptance_rate, active_time, count_languages,
    daily_acceptance_rate, estimated_lines_saved, estimated_suggestions,
};
use crate::client::{Event, GitHubApi};
use crate::error::Result;

/// Days covered by the daily breakdown
pub const DAILY_USAGE_DAYS: u64 = 7;

/// Suggestions credited per event on a given day
const SUGGESTIONS_PER_EVENT: u64 = 5;

/// Estimated usage for one calendar day (UTC)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyUsage {
    /// `YYYY-MM-DD`
    pub date: NaiveDate,
    pub suggestions: u64,
    pub acceptance_rate: f64,
}

/// Response of the per-user usage endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserSummary {
    pub total_suggestions: u64,
    pub acceptance_rate: f64,
    pub lines_saved: u64,
    pub active_time: String,
    pub usage_by_language: LanguageCounts,
    /// Oldest day first, ending today
    pub daily_usage: Vec<DailyUsage>,
    pub repositories: usize,
    pub contributions: Contributions,
}

/// Build the usage summary for a single user across all their commits.
pub async fn build_user_summary<A>(
    api: &A,
    username: &str,
    token: &str,
    today: NaiveDate,
) -> Result<UserSummary>
where
    A: GitHubApi + ?Sized,
{
    let activity = fetch_activity(api, username, CommitScope::User, token).await?;
    let commits = activity.commit_count;
    let additions = activity.additions();

    Ok(UserSummary {
        total_suggestions: estimated_suggestions(commits),
        acceptance_rate: acceptance_rate(commits),
        lines_saved: estimated_lines_saved(additions),
        active_time: active_time(commits),
        usage_by_language: count_languages(&activity.repos),
        daily_usage: daily_usage(&activity.events, today),
        repositories: activity.repos.len(),
        contributions: Contributions {
            commits,
            additions,
            repos_contributed: activity.repos.len(),
        },
    })
}

/// Bucket every fetched event by UTC date over the last [`DAILY_USAGE_DAYS`]
/// days ending `today`.
pub fn daily_usage(events: &[Event], today: NaiveDate) -> Vec<DailyUsage> {
    (0..DAILY_USAGE_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let count = events
                .iter()
                .filter(|e| e.created_at.map(|t| t.date_naive()) == Some(date))
                .count();
            DailyUsage {
                date,
                suggestions: count as u64 * SUGGESTIONS_PER_EVENT,
                acceptance_rate: daily_acceptance_rate(count),
            }
        })
        .collect()
}
