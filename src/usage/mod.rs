//! Copilot usage estimation
//!
//! GitHub exposes no per-user Copilot telemetry, so usage is estimated from
//! public activity: commit-search totals, push events and repository
//! languages. The constants below are the estimation policy; they are
//! placeholders, not measurements.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::client::{Event, Member, Repository};

pub mod member;
pub mod members;
pub mod org;
pub mod user;

pub use members::{MemberStatisticsResponse, build_member_statistics};
pub use org::{OrganizationReport, build_organization_report};
pub use user::{UserSummary, build_user_summary};

/// Suggestions credited per commit
pub const SUGGESTIONS_PER_COMMIT: u64 = 5;

/// Lines saved credited per pushed commit
pub const LINES_PER_ADDITION: u64 = 3;

/// Acceptance rate floor, in percent
pub const BASE_ACCEPTANCE_RATE: f64 = 65.0;

/// Acceptance rate cap, in percent
pub const MAX_ACCEPTANCE_RATE: f64 = 95.0;

/// Number of most recent events that count as recent activity
pub const RECENT_EVENT_WINDOW: usize = 30;

/// Language name → number of repositories using it
pub type LanguageCounts = BTreeMap<String, u64>;

/// Estimated suggestions for a commit count
pub fn estimated_suggestions(commits: u64) -> u64 {
    commits * SUGGESTIONS_PER_COMMIT
}

/// Estimated lines saved for a number of pushed commits
pub fn estimated_lines_saved(additions: u64) -> u64 {
    additions * LINES_PER_ADDITION
}

/// `min(95, 65 + commits / 10)`
pub fn acceptance_rate(commits: u64) -> f64 {
    clamp_rate(BASE_ACCEPTANCE_RATE + commits as f64 / 10.0)
}

/// `min(95, 65 + total_commits / members)`, 65 when there are no members
pub fn blended_acceptance_rate(total_commits: u64, members: usize) -> f64 {
    if members == 0 {
        return BASE_ACCEPTANCE_RATE;
    }
    clamp_rate(BASE_ACCEPTANCE_RATE + total_commits as f64 / members as f64)
}

/// `min(95, 65 + events * 2)` for one day of activity
pub fn daily_acceptance_rate(events: usize) -> f64 {
    clamp_rate(BASE_ACCEPTANCE_RATE + events as f64 * 2.0)
}

fn clamp_rate(rate: f64) -> f64 {
    rate.clamp(0.0, MAX_ACCEPTANCE_RATE)
}

/// Estimated hours of assisted coding, formatted like `"3h"`
pub fn active_time(commits: u64) -> String {
    format!("{}h", (commits as f64 / 10.0).round() as u64)
}

/// The first [`RECENT_EVENT_WINDOW`] events, in the order GitHub returned them
pub fn recent_events(events: &[Event]) -> &[Event] {
    &events[..events.len().min(RECENT_EVENT_WINDOW)]
}

/// Sum of push sizes over recent events
pub fn pushed_additions(events: &[Event]) -> u64 {
    recent_events(events).iter().map(Event::push_size).sum()
}

/// Count repositories per primary language, skipping repos without one
pub fn count_languages(repos: &[Repository]) -> LanguageCounts {
    let mut languages = LanguageCounts::new();
    for language in repos.iter().filter_map(|r| r.language.as_ref()) {
        *languages.entry(language.clone()).or_insert(0) += 1;
    }
    languages
}

/// Add every count in `from` to `into`
pub fn merge_languages(into: &mut LanguageCounts, from: &LanguageCounts) {
    for (language, count) in from {
        *into.entry(language.clone()).or_insert(0) += count;
    }
}

/// Latest known activity: first event, else first repo update or push,
/// else account creation.
pub fn last_active(
    events: &[Event],
    repos: &[Repository],
    member: Option<&Member>,
) -> Option<DateTime<Utc>> {
    let first_repo = repos.first();
    events
        .first()
        .and_then(|e| e.created_at)
        .or_else(|| first_repo.and_then(|r| r.updated_at))
        .or_else(|| first_repo.and_then(|r| r.pushed_at))
        .or_else(|| member.and_then(Member::created_at))
}

/// Raw data fetched for one user
#[derive(Debug, Clone, Default)]
pub struct ActivitySnapshot {
    pub repos: Vec<Repository>,
    pub events: Vec<Event>,
    pub commit_count: u64,
}

impl ActivitySnapshot {
    /// Sum of push sizes over recent events
    pub fn additions(&self) -> u64 {
        pushed_additions(&self.events)
    }

    /// Number of events counted as recent
    pub fn recent_event_count(&self) -> usize {
        recent_events(&self.events).len()
    }
}

/// Raw contribution counts behind the estimates
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Contributions {
    pub commits: u64,
    pub additions: u64,
    pub repos_contributed: usize,
}

/// Estimated usage for one member
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberUsage {
    pub total_suggestions: u64,
    pub acceptance_rate: f64,
    pub lines_saved: u64,
    pub last_active: Option<DateTime<Utc>>,
    /// Commit count, used for ranking
    pub activity_level: u64,
    pub languages: LanguageCounts,
    pub repositories: usize,
    pub contributions: Contributions,
}

impl MemberUsage {
    /// Derive usage from fetched activity
    pub fn from_activity(activity: &ActivitySnapshot, member: Option<&Member>) -> Self {
        let commits = activity.commit_count;
        let additions = activity.additions();

        Self {
            total_suggestions: estimated_suggestions(commits),
            acceptance_rate: acceptance_rate(commits),
            lines_saved: estimated_lines_saved(additions),
            last_active: last_active(&activity.events, &activity.repos, member),
            activity_level: commits,
            languages: count_languages(&activity.repos),
            repositories: activity.repos.len(),
            contributions: Contributions {
                commits,
                additions,
                repos_contributed: activity.repos.len(),
            },
        }
    }
}

/// Result of fetching one member's usage.
///
/// Serializes as the usage object, or `null` when unavailable.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberOutcome {
    Available(MemberUsage),
    Unavailable(String),
}

impl MemberOutcome {
    /// Usage if it could be computed
    pub fn usage(&self) -> Option<&MemberUsage> {
        match self {
            MemberOutcome::Available(usage) => Some(usage),
            MemberOutcome::Unavailable(_) => None,
        }
    }

    /// Ranking key; unavailable members rank as 0
    pub fn activity_level(&self) -> u64 {
        self.usage().map_or(0, |u| u.activity_level)
    }
}

impl Serialize for MemberOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MemberOutcome::Available(usage) => usage.serialize(serializer),
            MemberOutcome::Unavailable(_) => serializer.serialize_none(),
        }
    }
}
