//! Storage contracts and backend implementations.
//!
//! # Responsibility
//! - Define the backend-agnostic storage contract consumed by the service
//!   layer.
//! - Isolate map/SQL details from service orchestration.
//!
//! # Invariants
//! - Absence of a record is reported through `Ok(None)` / `Ok(false)`, never
//!   through an error; errors are reserved for validation and engine
//!   failures.
//! - Both backends return `list` results ordered ascending by id, so
//!   callers observe identical ordering regardless of backend.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::id::TodoId;
use crate::model::todo::Todo;

pub mod memory;
pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for todo persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Create/update was attempted with an empty title.
    EmptyTitle,
    /// Underlying SQLite engine failure (persistent backend only).
    Db(DbError),
    /// A persisted row no longer parses as a valid record.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Backend-agnostic storage contract for todo records.
///
/// Both implementations expose identical semantics so the service layer
/// never needs to know which one it talks to:
///
/// - `add` assigns a fresh time-sortable id; it does not validate the title
///   (the service layer does that before calling in).
/// - `get` never treats absence as an error.
/// - `update` re-validates the title defensively, mutates only the title,
///   and reports absence as `Ok(false)`.
/// - `delete` and `complete` report whether a record was actually affected.
pub trait TodoStore {
    /// Stores a new record and returns it with its assigned id.
    fn add(&self, title: &str) -> StoreResult<Todo>;

    /// Returns the record for `id`, or `None` if absent.
    fn get(&self, id: TodoId) -> StoreResult<Option<Todo>>;

    /// Returns every stored record ordered ascending by id.
    fn list(&self) -> StoreResult<Vec<Todo>>;

    /// Replaces the title of an existing record.
    fn update(&self, id: TodoId, title: &str) -> StoreResult<bool>;

    /// Removes a record, reporting whether one was present.
    fn delete(&self, id: TodoId) -> StoreResult<bool>;

    /// Marks a record completed, reporting whether one was present.
    fn complete(&self, id: TodoId) -> StoreResult<bool>;
}
