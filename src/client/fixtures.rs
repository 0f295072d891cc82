//! Test fixtures and builders for GitHub model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use super::models::{Event, EventPayload, Member, Organization, Repository};

/// Parse an RFC 3339 timestamp, panicking on bad input.
pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

// ============================================================================
// MemberBuilder
// ============================================================================

/// Builder for creating test Member instances.
///
/// # Example
/// ```ignore
/// let member = MemberBuilder::new("alice").name("Alice").build();
/// ```
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    login: String,
    id: Option<u64>,
    name: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl MemberBuilder {
    /// Create a new builder with the given login.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            id: None,
            name: None,
            created_at: None,
        }
    }

    /// Set the numeric user ID.
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the account creation time.
    pub fn created_at(mut self, created_at: &str) -> Self {
        self.created_at = Some(ts(created_at));
        self
    }

    /// Build the Member.
    pub fn build(self) -> Member {
        let mut extra = Map::new();
        if let Some(id) = self.id {
            extra.insert("id".to_string(), json!(id));
        }
        extra.insert(
            "avatar_url".to_string(),
            json!(format!("https://avatars.example.com/{}", self.login)),
        );
        extra.insert(
            "html_url".to_string(),
            json!(format!("https://github.com/{}", self.login)),
        );
        if let Some(name) = self.name {
            extra.insert("name".to_string(), Value::String(name));
        }
        if let Some(created_at) = self.created_at {
            extra.insert("created_at".to_string(), json!(created_at.to_rfc3339()));
        }

        Member {
            login: self.login,
            extra,
        }
    }
}

/// Build an organization with just a login.
pub fn organization(login: &str) -> Organization {
    Organization {
        login: login.to_string(),
        extra: Map::new(),
    }
}

// ============================================================================
// RepositoryBuilder
// ============================================================================

/// Builder for creating test Repository instances.
#[derive(Debug, Clone)]
pub struct RepositoryBuilder {
    name: String,
    language: Option<String>,
    updated_at: Option<DateTime<Utc>>,
    pushed_at: Option<DateTime<Utc>>,
}

impl RepositoryBuilder {
    /// Create a new builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: None,
            updated_at: None,
            pushed_at: None,
        }
    }

    /// Set the primary language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the last update time.
    pub fn updated_at(mut self, value: &str) -> Self {
        self.updated_at = Some(ts(value));
        self
    }

    /// Set the last push time.
    pub fn pushed_at(mut self, value: &str) -> Self {
        self.pushed_at = Some(ts(value));
        self
    }

    /// Build the Repository.
    pub fn build(self) -> Repository {
        Repository {
            name: self.name,
            language: self.language,
            updated_at: self.updated_at,
            pushed_at: self.pushed_at,
        }
    }
}

// ============================================================================
// EventBuilder
// ============================================================================

/// Builder for creating test Event instances.
///
/// # Example
/// ```ignore
/// let push = EventBuilder::push(3).created_at("2024-05-01T10:00:00Z").build();
/// ```
#[derive(Debug, Clone)]
pub struct EventBuilder {
    kind: String,
    size: Option<u64>,
    created_at: Option<DateTime<Utc>>,
}

impl EventBuilder {
    /// Create a builder for an event of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            size: None,
            created_at: None,
        }
    }

    /// Create a builder for a push event of the given size.
    pub fn push(size: u64) -> Self {
        Self::new("PushEvent").size(size)
    }

    /// Set the payload size.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the event time.
    pub fn created_at(mut self, value: &str) -> Self {
        self.created_at = Some(ts(value));
        self
    }

    /// Build the Event.
    pub fn build(self) -> Event {
        Event {
            id: None,
            kind: self.kind,
            payload: Some(EventPayload { size: self.size }),
            created_at: self.created_at,
        }
    }
}
