//! MongoDB-backed todo store.

use bson::{Bson, doc};
use futures_util::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::info;

use super::error::{StoreError, StoreResult};
use super::models::{DoneFilter, Todo};
use super::store::TodoStore;
use crate::config::Config;

/// Store backed by a MongoDB collection.
///
/// The typed collection handle is obtained once at startup and is safe for
/// unlimited concurrent use; it is never reassigned afterwards.
pub struct MongoStore {
    collection: Collection<Todo>,
}

impl MongoStore {
    /// Connect to the configured server and obtain the collection handle.
    ///
    /// Runs a `ping` command immediately after connecting so an unreachable
    /// store fails startup instead of the first request. Both the connect
    /// and the ping are bounded by `config.connect_timeout`. Errors here
    /// are fatal to the caller; there is no retry.
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let mut options =
            ClientOptions::parse(&config.mongo_uri)
                .await
                .map_err(|e| StoreError::Connection {
                    message: e.to_string(),
                })?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options).map_err(|e| StoreError::Connection {
            message: e.to_string(),
        })?;

        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Ping {
                message: e.to_string(),
            })?;
        info!(database = %config.database, collection = %config.collection, "MongoDB connected");

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }
}

impl TodoStore for MongoStore {
    async fn list(&self, filter: DoneFilter) -> StoreResult<Vec<Todo>> {
        let filter = match filter {
            DoneFilter::All => doc! {},
            DoneFilter::Only(done) => doc! { "done": done },
        };

        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| StoreError::Query {
                message: e.to_string(),
            })?;

        // The cursor is released on drop, on every exit path.
        let todos: Vec<Todo> = cursor.try_collect().await.map_err(|e| StoreError::Decode {
            message: e.to_string(),
        })?;

        Ok(todos)
    }

    async fn insert(&self, mut todo: Todo) -> StoreResult<Todo> {
        let result = self
            .collection
            .insert_one(&todo)
            .await
            .map_err(|e| StoreError::Insert {
                message: e.to_string(),
            })?;

        // Losing the assigned id would make the created response
        // meaningless, so an unexpected id type is an error rather than a
        // silent fallback.
        match result.inserted_id {
            Bson::ObjectId(oid) => {
                todo.id = Some(oid);
                Ok(todo)
            }
            other => Err(StoreError::MalformedId {
                actual: format!("{:?}", other),
            }),
        }
    }
}
