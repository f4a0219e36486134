//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client has no compile-time dependency on server internals;
//! integration tests catch any schema drift between the two crates.
//!
//! `TodoPatch` is presence-significant: only fields actually set are
//! serialized, and the nullable `notes` field uses a double option so an
//! explicit `"notes": null` (clear the notes) survives a round-trip while
//! an unset field is omitted from the request body entirely.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub notes: Option<String>,
}

/// Request payload for creating or replacing a todo.
///
/// Replace (PUT) uses the same shape as create: the server discards every
/// old field value, so omitting `done` or `notes` resets them to their
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoIn {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request payload for partially updating a todo. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(
        default,
        deserialize_with = "some_if_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

/// Body of the root greeting route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// Wrap a present value (including an explicit null) in `Some`; the serde
/// `default` supplies `None` when the field is missing entirely.
fn some_if_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
