//! Repository models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public repository listed under `/users/{login}/repos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Primary language detected by GitHub
    #[serde(default)]
    pub language: Option<String>,

    /// Last metadata update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Last push
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}
