//! Cross-backend equivalence: an identical operation script against the
//! in-memory and SQLite backends must yield identical observable results,
//! ignoring the randomly generated id values themselves.

use todolist_core::{MemoryTodoStore, SqliteTodoStore, StoreError, TodoStore};
use ulid::Ulid;

/// Runs a fixed operation script and records every observable outcome as a
/// plain string, with ids normalized away.
fn exercise<S: TodoStore>(store: &S) -> Vec<String> {
    let mut log = Vec::new();
    let absent = Ulid::from_parts(1, 1);

    let first = store.add("write spec").unwrap();
    let second = store.add("review spec").unwrap();
    log.push(format!("add titles: {} / {}", first.title, second.title));
    log.push(format!(
        "add completed flags: {} / {}",
        first.completed, second.completed
    ));

    let listed = store.list().unwrap();
    log.push(format!(
        "list after adds: {:?}",
        listed
            .iter()
            .map(|todo| (todo.title.as_str(), todo.completed))
            .collect::<Vec<_>>()
    ));
    log.push(format!(
        "list preserves creation order: {}",
        listed[0].id == first.id && listed[1].id == second.id
    ));

    log.push(format!(
        "update existing: {}",
        store.update(first.id, "write the spec").unwrap()
    ));
    log.push(format!(
        "update absent: {}",
        store.update(absent, "nobody home").unwrap()
    ));
    log.push(format!(
        "update empty title errors: {}",
        matches!(store.update(first.id, ""), Err(StoreError::EmptyTitle))
    ));

    log.push(format!("complete existing: {}", store.complete(second.id).unwrap()));
    log.push(format!("complete again: {}", store.complete(second.id).unwrap()));
    log.push(format!("complete absent: {}", store.complete(absent).unwrap()));

    let reloaded = store.get(second.id).unwrap().unwrap();
    log.push(format!(
        "get after complete: ({}, {})",
        reloaded.title, reloaded.completed
    ));
    log.push(format!("get absent: {:?}", store.get(absent).unwrap()));

    log.push(format!("delete existing: {}", store.delete(first.id).unwrap()));
    log.push(format!("delete again: {}", store.delete(first.id).unwrap()));
    log.push(format!(
        "final list: {:?}",
        store
            .list()
            .unwrap()
            .iter()
            .map(|todo| (todo.title.as_str(), todo.completed))
            .collect::<Vec<_>>()
    ));

    log
}

#[test]
fn memory_and_sqlite_backends_observe_identically() {
    let memory = MemoryTodoStore::new();
    let sqlite = SqliteTodoStore::open_in_memory().unwrap();

    assert_eq!(exercise(&memory), exercise(&sqlite));
}
