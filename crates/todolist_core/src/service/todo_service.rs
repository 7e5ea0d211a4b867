//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the five RPC-facing operations over any storage backend.
//! - Validate caller input (id strings, empty titles) before touching
//!   storage.
//! - Translate storage outcomes into response semantics unchanged.
//!
//! # Invariants
//! - A malformed id string is an `InvalidId` error, never a `false`
//!   success boolean; absence of a record is a `false` boolean, never an
//!   error.
//! - The service never touches records directly; it is pure orchestration
//!   over the `TodoStore` contract.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ulid::Ulid;

use crate::model::id::TodoId;
use crate::model::todo::Todo;
use crate::store::{StoreError, TodoStore};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-facing error for the RPC operation set.
///
/// Display output is part of the wire contract: transports forward these
/// messages verbatim.
#[derive(Debug)]
pub enum ServiceError {
    /// Create/update was attempted with an empty title.
    EmptyTitle,
    /// The caller-supplied id does not parse as a 26-character sortable id.
    InvalidId(String),
    /// Storage-layer failure, propagated unchanged.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::InvalidId(detail) => write!(f, "invalid ID: {detail}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::InvalidId(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service wrapper over a storage backend.
///
/// Constructed once at startup with the chosen backend and injected into
/// the transport layer.
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    /// Creates a service using the provided storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every todo ordered ascending by id.
    pub fn list_todos(&self) -> ServiceResult<Vec<Todo>> {
        Ok(self.store.list()?)
    }

    /// Creates a todo with the given title.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty; storage is never called.
    pub fn add_todo(&self, title: &str) -> ServiceResult<Todo> {
        if title.is_empty() {
            return Err(ServiceError::EmptyTitle);
        }

        Ok(self.store.add(title)?)
    }

    /// Deletes the todo named by `id`.
    ///
    /// Returns `Ok(false)` when no such record exists.
    pub fn delete_todo(&self, id: &str) -> ServiceResult<bool> {
        let id = parse_id(id)?;
        Ok(self.store.delete(id)?)
    }

    /// Replaces the title of the todo named by `id`.
    ///
    /// # Errors
    /// - `InvalidId` when `id` does not parse.
    /// - `EmptyTitle` when `title` is empty (checked here and again inside
    ///   the backend).
    pub fn update_todo(&self, id: &str, title: &str) -> ServiceResult<bool> {
        let id = parse_id(id)?;
        if title.is_empty() {
            return Err(ServiceError::EmptyTitle);
        }

        Ok(self.store.update(id, title)?)
    }

    /// Marks the todo named by `id` as completed.
    ///
    /// Completing an already-completed todo reports success again.
    pub fn complete_todo(&self, id: &str) -> ServiceResult<bool> {
        let id = parse_id(id)?;
        Ok(self.store.complete(id)?)
    }
}

fn parse_id(id: &str) -> ServiceResult<TodoId> {
    Ulid::from_string(id).map_err(|err| ServiceError::InvalidId(err.to_string()))
}
