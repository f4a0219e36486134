//! HTTP todo service over an in-memory store.
//!
//! # Overview
//! A thin routing layer: client → router → handler → store scan/mutation →
//! JSON response. All state is one shared [`TodoStore`] behind an
//! `Arc<RwLock>` whose lifetime equals the process; nothing is persisted.
//!
//! # Design
//! - Handlers do nothing but adapt HTTP to `TodoStore` calls; the store is
//!   injected through axum state so it can be swapped or driven directly in
//!   tests.
//! - PUT replaces every field, PATCH applies only the fields present in the
//!   request. The two share the lookup but not their semantics.
//! - Body validation failures surface as [`ApiError::MalformedInput`],
//!   missing ids as [`ApiError::NotFound`]. Every operation completes
//!   synchronously within its request.

pub mod error;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use store::TodoStore;
pub use types::{Todo, TodoId, TodoIn, TodoPatch};

/// Shared handle to the process-wide store.
pub type Db = Arc<RwLock<TodoStore>>;

/// Build the service router over a fresh, empty store.
pub fn app() -> Router {
    app_with(Db::default())
}

/// Build the service router over an existing store handle.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(replace_todo)
                .patch(patch_todo)
                .delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Serve the app on the given listener.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello Ntobeko" }))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    payload: Result<Json<TodoIn>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload?;
    let todo = db.write().await.create(input);
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    db.read()
        .await
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound { id })
}

async fn replace_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
    payload: Result<Json<TodoIn>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload?;
    db.write()
        .await
        .replace(id, input)
        .map(Json)
        .ok_or(ApiError::NotFound { id })
}

async fn patch_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(patch) = payload?;
    db.write()
        .await
        .patch(id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound { id })
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    if db.write().await.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound { id })
    }
}
