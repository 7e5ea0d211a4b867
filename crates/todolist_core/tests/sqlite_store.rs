use todolist_core::{SqliteTodoStore, StoreError, TodoStore};
use ulid::Ulid;

fn absent_id() -> Ulid {
    Ulid::from_parts(1, 1)
}

#[test]
fn add_and_get_roundtrip() {
    let store = SqliteTodoStore::open_in_memory().unwrap();

    let created = store.add("Test Todo").unwrap();
    assert_eq!(created.title, "Test Todo");
    assert!(!created.completed);

    let loaded = store.get(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn get_absent_id_reports_none_not_error() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    assert!(store.get(absent_id()).unwrap().is_none());
}

#[test]
fn list_orders_by_creation_and_starts_empty() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    assert!(store.list().unwrap().is_empty());

    let first = store.add("First Todo").unwrap();
    let second = store.add("Second Todo").unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn update_replaces_title_and_leaves_completed_untouched() {
    let store = SqliteTodoStore::open_in_memory().unwrap();

    let created = store.add("Original Title").unwrap();
    store.complete(created.id).unwrap();

    assert!(store.update(created.id, "Updated Title").unwrap());

    let loaded = store.get(created.id).unwrap().unwrap();
    assert_eq!(loaded.title, "Updated Title");
    assert!(loaded.completed);
}

#[test]
fn update_rejects_empty_title() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    let created = store.add("keep me").unwrap();

    let err = store.update(created.id, "").unwrap_err();
    assert!(matches!(err, StoreError::EmptyTitle));

    let loaded = store.get(created.id).unwrap().unwrap();
    assert_eq!(loaded.title, "keep me");
}

#[test]
fn absent_id_mutations_report_false_not_error() {
    let store = SqliteTodoStore::open_in_memory().unwrap();

    assert!(!store.update(absent_id(), "New Title").unwrap());
    assert!(!store.delete(absent_id()).unwrap());
    assert!(!store.complete(absent_id()).unwrap());
}

#[test]
fn delete_is_idempotent_on_absence() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    let created = store.add("To Be Deleted").unwrap();

    assert!(store.delete(created.id).unwrap());
    assert!(store.get(created.id).unwrap().is_none());
    assert!(!store.delete(created.id).unwrap());
}

#[test]
fn complete_reports_success_when_already_completed() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    let created = store.add("To Be Completed").unwrap();

    assert!(store.complete(created.id).unwrap());
    assert!(store.complete(created.id).unwrap());
    assert!(store.get(created.id).unwrap().unwrap().completed);
}

#[test]
fn records_survive_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.db");

    let store = SqliteTodoStore::open(&path).unwrap();
    let created = store.add("durable todo").unwrap();
    store.complete(created.id).unwrap();
    store.close().unwrap();

    let reopened = SqliteTodoStore::open(&path).unwrap();
    let loaded = reopened.get(created.id).unwrap().unwrap();
    assert_eq!(loaded.title, "durable todo");
    assert!(loaded.completed);
    reopened.close().unwrap();
}
