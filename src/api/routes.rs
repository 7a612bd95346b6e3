//! API route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, CreateTodoRequest, ErrorResponse, HealthResponse, TodoResponse};
use super::state::AppState;
use crate::db::TodoStore;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Minimal todo HTTP API backed by MongoDB",
        license(name = "MIT")
    ),
    paths(handlers::health, handlers::list_todos, handlers::create_todo),
    components(
        schemas(
            HealthResponse,
            TodoResponse,
            CreateTodoRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "todos", description = "Todo item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// Methods other than GET/POST on `/todos` fall through to axum's method
/// router, which answers 405 with an empty body.
pub fn create_router<S: TodoStore + 'static>(state: AppState<S>) -> Router {
    let api = ApiDoc::openapi();

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
