//! Todo list and create handlers.

use std::future::Future;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{error, instrument};
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::db::{DoneFilter, StoreError, StoreResult, Todo, TodoStore};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Todo item response DTO
#[derive(Serialize, ToSchema)]
pub struct TodoResponse {
    /// Store-assigned identifier (24-character hex)
    #[schema(example = "65f2c0a19b1d8c3f4e5a6b7c")]
    pub id: String,
    /// Item title
    #[schema(example = "buy milk")]
    pub title: String,
    /// Completion flag
    pub done: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: todo.title,
            done: todo.done,
            created_at: todo.created_at,
        }
    }
}

/// Create todo request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Item title; must be non-empty after trimming
    #[schema(example = "buy milk")]
    pub title: String,
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "done must be true or false")]
    pub error: String,
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub done: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List todo items
///
/// Returns all items, optionally filtered by completion status
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    params(
        ("done" = Option<String>, Query,
            description = "Filter by completion status: true/1/t/on or false/0/f/off (case-insensitive)")
    ),
    responses(
        (status = 200, description = "List of todo items", body = Vec<TodoResponse>),
        (status = 400, description = "Invalid done value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TodoResponse>>, (StatusCode, Json<ErrorResponse>)> {
    // An invalid filter value never reaches the store.
    let filter: DoneFilter = params
        .done
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|_| bad_request("done must be true or false"))?;

    let todos = bounded(&state, state.store().list(filter))
        .await
        .map_err(|e| internal_error("database query failed", e))?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Create a new todo item
///
/// Creates an item with the given title; `done` starts false and the
/// creation timestamp is set server-side
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo item created", body = TodoResponse),
        (status = 400, description = "Invalid JSON body or empty title", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Decoded by hand so malformed JSON and a missing title both surface
    // as the same 400 regardless of content-type.
    let request: CreateTodoRequest =
        serde_json::from_slice(&body).map_err(|_| bad_request("invalid JSON body"))?;

    let title = request.title.trim();
    if title.is_empty() {
        return Err(bad_request("title must not be empty"));
    }

    let todo = Todo::new(title, Utc::now());
    let created = bounded(&state, state.store().insert(todo))
        .await
        .map_err(|e| internal_error("database insert failed", e))?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(created))))
}

// =============================================================================
// Helpers
// =============================================================================

/// Bound a store operation by the configured per-request timeout.
///
/// The handler future itself is dropped when the client disconnects, so
/// either the timeout or connection loss cancels the in-flight store call.
async fn bounded<S: TodoStore, T>(
    state: &AppState<S>,
    operation: impl Future<Output = StoreResult<T>>,
) -> StoreResult<T> {
    match timeout(state.op_timeout(), operation).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout {
            seconds: state.op_timeout().as_secs(),
        }),
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Log the store error server-side and answer with a generic message;
/// driver detail never reaches the client.
fn internal_error(message: &str, err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %err, "{message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
