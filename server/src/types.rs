//! Domain shapes for the todo service.
//!
//! # Design
//! The output shape (`Todo`) and the input shapes (`TodoIn`, `TodoPatch`)
//! are independent structs related by `Todo::from_input`, not variations of
//! a single schema. `TodoPatch` is presence-significant: a field absent from
//! the JSON must be distinguishable from a field explicitly set to
//! null/false, which for the nullable `notes` field takes a double option.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the server: monotonically increasing from 1,
/// never reused even after deletion.
pub type TodoId = u64;

/// A single todo item as returned by the API.
///
/// `notes` serializes as JSON `null` when unset; the field is always
/// present in output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub notes: Option<String>,
}

impl Todo {
    /// Construct a `Todo` from an input payload and a server-assigned id.
    pub fn from_input(id: TodoId, input: TodoIn) -> Self {
        Self {
            id,
            title: input.title,
            done: input.done,
            notes: input.notes,
        }
    }
}

/// Request payload for create and replace.
///
/// `title` is required and must be a string; `done` defaults to false and
/// `notes` to null. Unknown extra fields are ignored, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoIn {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request payload for partial update. Only fields present in the JSON are
/// applied; omitted fields keep their current values.
///
/// `notes` is nullable, so presence and value are tracked separately: the
/// outer option records whether the field was in the request, the inner
/// option is the value (`null` clears the notes).
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default, deserialize_with = "some_if_present")]
    pub notes: Option<Option<String>>,
}

/// Wrap a present value (including an explicit null) in `Some`; the serde
/// `default` supplies `None` when the field is missing entirely.
fn some_if_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
