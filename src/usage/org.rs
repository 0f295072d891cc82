//! Organization usage aggregation
//!
//! Fans out over every member of an organization, then rolls the per-member
//! estimates into seat counts, organization totals and a ranked member list.

use log::info;
use serde::Serialize;

use super::member::{CommitScope, fetch_member_usage};
use super::{
    LanguageCounts, MemberOutcome, blended_acceptance_rate, estimated_suggestions,
    merge_languages,
};
use crate::client::{GitHubApi, Member, Organization, fetch_all_settled};
use crate::error::Result;

/// Seat counts: every member holds a seat, members with usage are "used"
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Seats {
    pub total_seats: usize,
    pub used_seats: usize,
}

/// Organization-wide rollup over members with usage
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrganizationUsage {
    pub total_suggestions: u64,
    pub acceptance_rate: f64,
    pub total_commits: u64,
    pub lines_saved: u64,
    pub total_repositories: usize,
    pub languages: LanguageCounts,
}

/// One member and their usage (`null` when it could not be fetched)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberUsageEntry {
    pub user: Member,
    pub usage: MemberOutcome,
}

/// Response of the organization members endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationReport {
    pub organization: Organization,
    pub seats: Seats,
    pub organization_usage: OrganizationUsage,
    /// Sorted by activity level, highest first
    pub member_usage: Vec<MemberUsageEntry>,
}

/// Build the usage report for an organization.
///
/// Fails only if the organization or its member list cannot be fetched.
/// Per-member failures show up as entries with `usage: null`.
pub async fn build_organization_report<A>(
    api: &A,
    org_name: &str,
    token: &str,
    max_concurrent: usize,
) -> Result<OrganizationReport>
where
    A: GitHubApi + ?Sized,
{
    let (organization, members) = tokio::try_join!(
        api.get_org(org_name, token),
        api.list_org_members(org_name, token),
    )?;

    info!(
        "Building usage report for {} ({} members)",
        org_name,
        members.len()
    );

    let scope = CommitScope::Organization(org_name);
    let entries = fetch_all_settled(
        members,
        move |member| async move {
            let usage = fetch_member_usage(api, &member, scope, token).await;
            MemberUsageEntry {
                user: member,
                usage,
            }
        },
        max_concurrent,
    )
    .await;

    Ok(summarize(organization, entries))
}

/// Roll per-member entries into a report.
pub fn summarize(
    organization: Organization,
    mut entries: Vec<MemberUsageEntry>,
) -> OrganizationReport {
    let total_seats = entries.len();

    let mut used_seats = 0;
    let mut total_commits = 0;
    let mut lines_saved = 0;
    let mut total_repositories = 0;
    let mut languages = LanguageCounts::new();

    for usage in entries.iter().filter_map(|e| e.usage.usage()) {
        used_seats += 1;
        total_commits += usage.activity_level;
        lines_saved += usage.lines_saved;
        total_repositories += usage.repositories;
        merge_languages(&mut languages, &usage.languages);
    }

    // Stable sort; ties keep fetch order, which callers must not rely on
    entries.sort_by(|a, b| b.usage.activity_level().cmp(&a.usage.activity_level()));

    OrganizationReport {
        organization,
        seats: Seats {
            total_seats,
            used_seats,
        },
        organization_usage: OrganizationUsage {
            total_suggestions: estimated_suggestions(total_commits),
            acceptance_rate: blended_acceptance_rate(total_commits, total_seats),
            total_commits,
            lines_saved,
            total_repositories,
            languages,
        },
        member_usage: entries,
    }
}
