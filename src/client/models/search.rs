//! Search result models

use serde::{Deserialize, Serialize};

/// Commit search result; items are never read
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommitSearch {
    /// Total number of matching commits
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl CommitSearch {
    /// Match count, treating an absent count as zero
    pub fn commit_count(&self) -> u64 {
        self.total_count.unwrap_or(0)
    }
}
