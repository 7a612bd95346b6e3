//! In-memory todo store.

use std::sync::Mutex;

use bson::oid::ObjectId;

use super::error::{StoreError, StoreResult};
use super::models::{DoneFilter, Todo};
use super::store::TodoStore;

/// Store backed by a plain `Vec`, used by handler tests in place of a
/// running MongoDB server. Ids are assigned the same way the server would
/// assign them, so wire-format assertions hold against both backends.
#[derive(Default)]
pub struct MemoryStore {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self, filter: DoneFilter) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.lock().map_err(|e| StoreError::Query {
            message: e.to_string(),
        })?;

        Ok(todos
            .iter()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect())
    }

    async fn insert(&self, mut todo: Todo) -> StoreResult<Todo> {
        todo.id = Some(ObjectId::new());

        let mut todos = self.todos.lock().map_err(|e| StoreError::Insert {
            message: e.to_string(),
        })?;
        todos.push(todo.clone());

        Ok(todo)
    }
}
