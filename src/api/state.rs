//! Application state for the API server.

use std::sync::Arc;
use std::time::Duration;

use crate::db::TodoStore;

/// Shared application state.
///
/// Holds the store handle established at startup and the per-request
/// store-operation timeout. Handlers receive a clone per request; the
/// store itself sits behind an `Arc` and is never reassigned.
pub struct AppState<S: TodoStore> {
    store: Arc<S>,
    op_timeout: Duration,
}

// Manual Clone impl - we only need the Arc to be cloneable, not S.
impl<S: TodoStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            op_timeout: self.op_timeout,
        }
    }
}

impl<S: TodoStore> AppState<S> {
    /// Create a new AppState with the given store and operation timeout.
    pub fn new(store: S, op_timeout: Duration) -> Self {
        Self {
            store: Arc::new(store),
            op_timeout,
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the per-request store-operation timeout.
    pub fn op_timeout(&self) -> Duration {
        self.op_timeout
    }
}
