//! Todo domain record.
//!
//! # Responsibility
//! - Define the single record shape shared by the in-memory and SQLite
//!   backends and by the service layer.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `title` is never empty for a record that was created or updated through
//!   a storage backend successfully.
//! - `completed` starts `false` and only ever transitions to `true`.

use serde::{Deserialize, Serialize};

use crate::model::id::TodoId;

/// Canonical task record tracked by this system.
///
/// Serialization matches the RPC wire shape: `id` renders as the
/// 26-character ULID string, `completed` as a plain boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Time-sortable stable ID, assigned by the owning backend at creation.
    pub id: TodoId,
    /// Human-readable title. Non-empty for every stored record.
    pub title: String,
    /// Completion flag. Set only via the complete operation.
    pub completed: bool,
}

impl Todo {
    /// Creates a fresh record with `completed = false`.
    ///
    /// Backends call this after generating an id; callers never pick ids.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
