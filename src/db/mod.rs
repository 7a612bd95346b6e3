//! Storage layer for todo items.
//!
//! # Architecture
//!
//! - `error`: storage-agnostic error types
//! - `models`: the todo document and the list filter
//! - `store`: the `TodoStore` trait handlers are generic over
//! - `mongo`: MongoDB-backed implementation used in production
//! - `memory`: in-memory implementation used by handler tests

mod error;
mod memory;
mod models;
mod mongo;
mod store;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod memory_test;
#[cfg(test)]
mod models_test;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::*;
pub use mongo::MongoStore;
pub use store::TodoStore;
