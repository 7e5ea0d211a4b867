//! In-memory storage backend.
//!
//! # Responsibility
//! - Back the `TodoStore` contract with a lock-guarded map for tests,
//!   development, and ephemeral deployments.
//!
//! # Invariants
//! - Mutating operations take the exclusive lock; reads take the shared
//!   lock, so every operation observes a consistent snapshot and concurrent
//!   reads never block each other.
//! - No I/O happens while a lock is held; critical sections are bounded by
//!   map access.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::model::id::{IdGenerator, TodoId};
use crate::model::todo::Todo;
use crate::store::{StoreError, StoreResult, TodoStore};

/// Map-backed implementation of [`TodoStore`].
///
/// Each instance owns its records and its id generator; there is no shared
/// process-wide state between instances.
pub struct MemoryTodoStore {
    todos: RwLock<HashMap<TodoId, Todo>>,
    ids: IdGenerator,
}

impl MemoryTodoStore {
    /// Creates an empty store with fresh entropy state.
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
            ids: IdGenerator::new(),
        }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for MemoryTodoStore {
    fn add(&self, title: &str) -> StoreResult<Todo> {
        let mut todos = self.todos.write().unwrap_or_else(PoisonError::into_inner);

        let todo = Todo::new(self.ids.next_id(), title);
        todos.insert(todo.id, todo.clone());

        Ok(todo)
    }

    fn get(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let todos = self.todos.read().unwrap_or_else(PoisonError::into_inner);
        Ok(todos.get(&id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().unwrap_or_else(PoisonError::into_inner);

        let mut all: Vec<Todo> = todos.values().cloned().collect();
        // The map has no intrinsic order; sort the snapshot so listing
        // approximates creation order via the time-sortable ids.
        all.sort_unstable_by_key(|todo| todo.id);

        Ok(all)
    }

    fn update(&self, id: TodoId, title: &str) -> StoreResult<bool> {
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let mut todos = self.todos.write().unwrap_or_else(PoisonError::into_inner);

        match todos.get_mut(&id) {
            Some(todo) => {
                todo.title = title.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: TodoId) -> StoreResult<bool> {
        let mut todos = self.todos.write().unwrap_or_else(PoisonError::into_inner);
        Ok(todos.remove(&id).is_some())
    }

    fn complete(&self, id: TodoId) -> StoreResult<bool> {
        let mut todos = self.todos.write().unwrap_or_else(PoisonError::into_inner);

        match todos.get_mut(&id) {
            Some(todo) => {
                todo.completed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
