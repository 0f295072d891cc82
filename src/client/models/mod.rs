//! GitHub API data models
//!
//! Only the fields the dashboard reads are typed. Identity types keep the
//! remaining fields so passthrough responses reach the frontend intact.

mod auth;
mod event;
mod member;
mod org;
mod repo;
mod search;

pub use auth::OAuthCodeExchange;
pub use event::Event;
#[cfg(test)]
pub use event::EventPayload;
pub use member::Member;
pub use org::Organization;
pub use repo::Repository;
pub use search::CommitSearch;
