//! Organization member models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GitHub user identity as listed under `/orgs/{org}/members`.
///
/// Only `login` is typed; the rest is kept verbatim and read through
/// accessors, so members echo back exactly as GitHub described them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    /// Login handle
    pub login: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Member {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// Display name (only present on full user objects)
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.str_field("avatar_url")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.str_field("html_url")
    }

    /// Account creation time (only present on full user objects)
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.str_field("created_at")
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
            .map(|t| t.with_timezone(&Utc))
    }
}
