//! Storage error types.
//!
//! Abstracted error types for store operations, using miette for diagnostic
//! output and thiserror for derive macros. Handlers convert these into
//! generic HTTP error bodies; the underlying driver detail stays server-side.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todo_api::db::connection_error),
        help("Is MongoDB running at the configured URI?")
    )]
    Connection { message: String },

    #[error("Ping error: {message}")]
    #[diagnostic(
        code(todo_api::db::ping_error),
        help("The server accepted the connection but did not answer a ping.")
    )]
    Ping { message: String },

    #[error("Query error: {message}")]
    #[diagnostic(code(todo_api::db::query_error))]
    Query { message: String },

    #[error("Decode error: {message}")]
    #[diagnostic(code(todo_api::db::decode_error))]
    Decode { message: String },

    #[error("Insert error: {message}")]
    #[diagnostic(code(todo_api::db::insert_error))]
    Insert { message: String },

    #[error("Unexpected inserted id type: {actual}")]
    #[diagnostic(code(todo_api::db::malformed_id))]
    MalformedId { actual: String },

    #[error("Operation timed out after {seconds}s")]
    #[diagnostic(code(todo_api::db::timeout))]
    Timeout { seconds: u64 },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
