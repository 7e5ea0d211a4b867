//! SQLite storage backend.
//!
//! # Responsibility
//! - Back the `TodoStore` contract with a durable `todos` table.
//! - Keep SQL details inside this module; callers only see the contract.
//!
//! # Invariants
//! - Every operation is a single statement, so concurrency correctness is
//!   delegated to SQLite's own locking; no application-level locks exist
//!   and no cross-operation atomicity is offered.
//! - Read paths reject invalid persisted state instead of masking it.

use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use ulid::Ulid;

use crate::db::{open_db, open_db_in_memory};
use crate::model::id::{IdGenerator, TodoId};
use crate::model::todo::Todo;
use crate::store::{StoreError, StoreResult, TodoStore};

const TODO_SELECT_SQL: &str = "SELECT id, title, completed FROM todos";

/// SQLite-backed implementation of [`TodoStore`].
///
/// Owns a single connection for its lifetime. Callers are responsible for
/// invoking [`SqliteTodoStore::close`] exactly once during shutdown;
/// dropping the store also releases the handle, but without surfacing
/// close-time errors.
pub struct SqliteTodoStore {
    conn: Connection,
    ids: IdGenerator,
}

impl SqliteTodoStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// `todos` table exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path)?;
        info!("event=store_open module=store backend=sqlite status=ok");
        Ok(Self {
            conn,
            ids: IdGenerator::new(),
        })
    }

    /// Opens an in-memory database with identical schema and semantics.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self {
            conn,
            ids: IdGenerator::new(),
        })
    }

    /// Releases the underlying connection.
    ///
    /// Consumes the store so no operation can run after shutdown.
    pub fn close(self) -> StoreResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=store_close module=store backend=sqlite status=ok");
                Ok(())
            }
            Err((_conn, err)) => Err(err.into()),
        }
    }
}

impl TodoStore for SqliteTodoStore {
    fn add(&self, title: &str) -> StoreResult<Todo> {
        let todo = Todo::new(self.ids.next_id(), title);

        self.conn.execute(
            "INSERT INTO todos (id, title, completed) VALUES (?1, ?2, ?3);",
            params![todo.id.to_string(), todo.title.as_str(), todo.completed],
        )?;

        Ok(todo)
    }

    fn get(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let row = self
            .conn
            .query_row(
                &format!("{TODO_SELECT_SQL} WHERE id = ?1;"),
                [id.to_string()],
                parse_todo_row_sql,
            )
            .optional()?;

        match row {
            Some(parsed) => Ok(Some(parsed?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(&format!("{TODO_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;

        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        // Sorted in the application rather than via ORDER BY so ordering
        // semantics are byte-identical with the in-memory backend.
        todos.sort_unstable_by_key(|todo| todo.id);

        Ok(todos)
    }

    fn update(&self, id: TodoId, title: &str) -> StoreResult<bool> {
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let changed = self.conn.execute(
            "UPDATE todos SET title = ?1 WHERE id = ?2;",
            params![title, id.to_string()],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: TodoId) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;

        Ok(changed > 0)
    }

    fn complete(&self, id: TodoId) -> StoreResult<bool> {
        let changed = self.conn.execute(
            "UPDATE todos SET completed = 1 WHERE id = ?1;",
            [id.to_string()],
        )?;

        Ok(changed > 0)
    }
}

/// Row mapper usable inside `query_row`, deferring semantic validation.
fn parse_todo_row_sql(row: &Row<'_>) -> rusqlite::Result<StoreResult<Todo>> {
    Ok(parse_todo_row(row))
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<Todo> {
    let id_text: String = row.get("id")?;
    let id = Ulid::from_string(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid id value `{id_text}` in todos.id"))
    })?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    Ok(Todo {
        id,
        title: row.get("title")?,
        completed,
    })
}
