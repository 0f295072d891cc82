//! Organization report command

use crate::cli::{CommandContext, GlobalOptions, TokenArgs};
use crate::error::Result;
use crate::output;
use crate::usage::build_organization_report;

/// Print the usage report for `org` as JSON
pub async fn run(opts: &GlobalOptions, org: &str, token: &TokenArgs) -> Result<()> {
    let token = token.require()?;
    let ctx = CommandContext::new(opts)?;

    let report = build_organization_report(
        ctx.client.as_ref(),
        org,
        token,
        ctx.config.member_concurrency,
    )
    .await?;

    output::print_json(&report, org)
}
