//! User summary command

use chrono::Utc;

use crate::cli::{CommandContext, GlobalOptions, TokenArgs};
use crate::error::Result;
use crate::output;
use crate::usage::build_user_summary;

/// Print the usage summary for `username` as JSON
pub async fn run(opts: &GlobalOptions, username: &str, token: &TokenArgs) -> Result<()> {
    let token = token.require()?;
    let ctx = CommandContext::new(opts)?;

    let today = Utc::now().date_naive();
    let summary = build_user_summary(ctx.client.as_ref(), username, token, today).await?;

    output::print_json(&summary, username)
}
