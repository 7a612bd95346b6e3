//! The data-access seam for todo items.

use std::future::Future;

use super::error::StoreResult;
use super::models::{DoneFilter, Todo};

/// Contract for todo persistence.
///
/// Handlers are generic over this trait so the MongoDB backend can be
/// swapped for an in-memory one in tests. The futures are `Send` because
/// handlers run on the multi-threaded runtime.
pub trait TodoStore: Send + Sync {
    /// List items matching the filter, in store order.
    fn list(&self, filter: DoneFilter) -> impl Future<Output = StoreResult<Vec<Todo>>> + Send;

    /// Insert a new item and return it with the store-assigned id.
    fn insert(&self, todo: Todo) -> impl Future<Output = StoreResult<Todo>> + Send;
}
