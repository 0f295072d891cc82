//! Organization models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organization as returned by `/orgs/{org}` and `/user/orgs`.
///
/// Only `login` is typed. Every other field is kept as GitHub sent it,
/// `null` values included, so the object serializes back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    /// Organization login (used in URLs)
    pub login: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
