//! Tests for the in-memory store.

use chrono::Utc;

use crate::db::{DoneFilter, MemoryStore, Todo, TodoStore};

#[tokio::test]
async fn insert_assigns_a_fresh_id() {
    let store = MemoryStore::new();

    let created = store.insert(Todo::new("buy milk", Utc::now())).await.unwrap();
    assert!(created.id.is_some());

    let other = store.insert(Todo::new("walk dog", Utc::now())).await.unwrap();
    assert_ne!(created.id, other.id);
}

#[tokio::test]
async fn list_applies_the_done_filter() {
    let store = MemoryStore::new();
    store.insert(Todo::new("open item", Utc::now())).await.unwrap();

    let mut finished = Todo::new("finished item", Utc::now());
    finished.done = true;
    store.insert(finished).await.unwrap();

    let all = store.list(DoneFilter::All).await.unwrap();
    assert_eq!(all.len(), 2);

    let done = store.list(DoneFilter::Only(true)).await.unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "finished item");

    let open = store.list(DoneFilter::Only(false)).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].title, "open item");
}
