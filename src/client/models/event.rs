//! Public activity event models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event type emitted for `git push`
pub const PUSH_EVENT: &str = "PushEvent";

/// Public event listed under `/users/{login}/events/public`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Event ID
    #[serde(default)]
    pub id: Option<String>,

    /// Event type, e.g. `PushEvent`
    #[serde(rename = "type")]
    pub kind: String,

    /// Event payload; only push size is read
    #[serde(default)]
    pub payload: Option<EventPayload>,

    /// When the event happened
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Subset of an event payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventPayload {
    /// Number of commits in a push
    #[serde(default)]
    pub size: Option<u64>,
}

impl Event {
    /// Whether this is a push event
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }

    /// Commits pushed by this event (0 for non-push or missing size)
    pub fn push_size(&self) -> u64 {
        if !self.is_push() {
            return 0;
        }
        self.payload.as_ref().and_then(|p| p.size).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_event_size() {
        let event: Event = serde_json::from_str(
            r#"{"id":"1","type":"PushEvent","payload":{"size":4,"ref":"refs/heads/main"},"created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(event.is_push());
        assert_eq!(event.push_size(), 4);
    }

    #[test]
    fn test_push_event_without_size() {
        let event: Event = serde_json::from_str(r#"{"type":"PushEvent","payload":{}}"#).unwrap();
        assert_eq!(event.push_size(), 0);
    }

    #[test]
    fn test_non_push_event_ignores_size() {
        let event: Event =
            serde_json::from_str(r#"{"type":"WatchEvent","payload":{"size":9}}"#).unwrap();
        assert!(!event.is_push());
        assert_eq!(event.push_size(), 0);
    }
}
