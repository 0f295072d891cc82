//! Concurrent fan-out helper.
//!
//! Runs one future per input item and waits for every one of them to finish.
//! A failing item never cancels the rest; each output is returned in the
//! position of the item that produced it.

use std::future::Future;

use futures::stream::{self, StreamExt};
use log::debug;

/// Run `fetch` for every item, at most `max_concurrent` at a time, and wait
/// for all of them to settle.
///
/// The output type is whatever `fetch` resolves to, typically a `Result` or
/// an outcome enum, so failures are collected alongside successes.
///
/// # Example
///
/// ```ignore
/// let outcomes = fetch_all_settled(
///     members,
///     |member| async move { fetch_member_usage(api, &member, scope, token).await },
///     32,
/// )
/// .await;
/// ```
pub async fn fetch_all_settled<I, O, F, Fut>(
    items: Vec<I>,
    fetch: F,
    max_concurrent: usize,
) -> Vec<O>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = O>,
{
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    debug!(
        "Fetching {} items with max {} concurrent",
        total,
        max_concurrent
    );

    let mut settled: Vec<(usize, O)> = stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| {
            let fut = fetch(item);
            async move { (index, fut.await) }
        })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    // Completion order is arbitrary; restore input order
    settled.sort_by_key(|(index, _)| *index);

    debug!("All {} fetches settled", total);
    settled.into_iter().map(|(_, output)| output).collect()
}
